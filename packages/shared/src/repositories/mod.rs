pub mod errors;
pub mod move_cache_repository;
