use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::piece::PieceKind;
use crate::models::position::Position;
use crate::repositories::move_cache_repository::MoveCacheRepository;
use crate::services::errors::move_guesser_service_errors::MoveGuesserServiceError;
use crate::services::move_guesser_service::MoveGuesser;

/// Memoizes another [`MoveGuesser`] behind a [`MoveCacheRepository`].
///
/// Only successful results are stored. A failing cache is logged and bypassed.
pub struct CachedMoveGuesserService {
    inner: Arc<dyn MoveGuesser>,
    cache: Arc<dyn MoveCacheRepository>,
}

impl CachedMoveGuesserService {
    pub fn new(inner: Arc<dyn MoveGuesser>, cache: Arc<dyn MoveCacheRepository>) -> Self {
        CachedMoveGuesserService { inner, cache }
    }

    /// `<PIECE>_<position>`, the position in its `Debug` rendering.
    pub fn cache_key(position: &Position, piece: PieceKind) -> String {
        format!("{}_{:?}", piece, position)
    }
}

impl MoveGuesser for CachedMoveGuesserService {
    fn get_possible_moves(
        &self,
        position: &Position,
        piece: PieceKind,
    ) -> Result<String, MoveGuesserServiceError> {
        let key = Self::cache_key(position, piece);

        match self.cache.get(&key) {
            Ok(Some(moves)) => {
                debug!("Move cache hit for {}", key);
                return Ok(moves);
            }
            Ok(None) => debug!("Move cache miss for {}", key),
            Err(e) => warn!("Move cache lookup failed for {}: {}", key, e),
        }

        let moves = self.inner.get_possible_moves(position, piece)?;

        if let Err(e) = self.cache.put(&key, &moves) {
            warn!("Failed to cache moves for {}: {}", key, e);
        }

        Ok(moves)
    }
}
