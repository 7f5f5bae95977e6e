pub mod cached_move_guesser_service;
pub mod errors;
pub mod move_guesser_service;
pub mod strategies;
pub mod strategy_registry;
