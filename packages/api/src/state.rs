use std::sync::Arc;

use shared::models::board::Board;
use shared::repositories::move_cache_repository::InMemoryMoveCacheRepository;
use shared::services::cached_move_guesser_service::CachedMoveGuesserService;
use shared::services::move_guesser_service::{MoveGuesser, MoveGuesserService};
use shared::services::strategy_registry::StrategyRegistry;

use crate::config::{AppConfig, ConfigError};

#[derive(Clone)]
pub struct AppState {
    pub move_guesser: Arc<dyn MoveGuesser>,
}

impl AppState {
    /// Wire the board, the strategies and the move cache from `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let board = Board::square(config.board_size)
            .map_err(|_| ConfigError::UnsupportedBoardSize(config.board_size))?;

        let move_guesser_service = Arc::new(MoveGuesserService::with_policy(
            board,
            StrategyRegistry::standard(),
            config.out_of_board_policy,
        ));
        let move_cache_repository = Arc::new(InMemoryMoveCacheRepository::new(config.cache));
        let move_guesser = Arc::new(CachedMoveGuesserService::new(
            move_guesser_service,
            move_cache_repository,
        ));

        Ok(AppState { move_guesser })
    }
}
