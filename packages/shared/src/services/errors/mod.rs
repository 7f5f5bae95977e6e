pub mod move_guesser_service_errors;
pub mod strategy_registry_errors;
