pub mod move_cache_repository_errors;
