use std::sync::Arc;

use tracing::debug;

use crate::models::piece::PieceKind;
use crate::services::errors::strategy_registry_errors::StrategyRegistryError;
use crate::services::strategies::{
    KingMoveStrategy, MoveStrategy, PawnMoveStrategy, QueenMoveStrategy,
};

/// Maps every [`PieceKind`] to exactly one [`MoveStrategy`].
///
/// Completeness is checked when the registry is built, so lookups never miss.
#[derive(Clone)]
pub struct StrategyRegistry {
    strategies: [Arc<dyn MoveStrategy>; 3],
}

impl StrategyRegistry {
    /// Registry with the built-in king, queen and pawn strategies.
    pub fn standard() -> Self {
        StrategyRegistry {
            strategies: [
                Arc::new(KingMoveStrategy),
                Arc::new(QueenMoveStrategy),
                Arc::new(PawnMoveStrategy),
            ],
        }
    }

    pub fn from_strategies(
        strategies: Vec<Arc<dyn MoveStrategy>>,
    ) -> Result<Self, StrategyRegistryError> {
        let mut slots: [Option<Arc<dyn MoveStrategy>>; 3] = [None, None, None];

        for strategy in strategies {
            let piece = strategy.piece();
            let slot = &mut slots[piece.index()];
            if slot.is_some() {
                return Err(StrategyRegistryError::DuplicateStrategy(piece));
            }
            debug!("Registering move strategy for {}", piece);
            *slot = Some(strategy);
        }

        let [king, queen, pawn] = slots;
        Ok(StrategyRegistry {
            strategies: [
                king.ok_or(StrategyRegistryError::MissingStrategy(PieceKind::King))?,
                queen.ok_or(StrategyRegistryError::MissingStrategy(PieceKind::Queen))?,
                pawn.ok_or(StrategyRegistryError::MissingStrategy(PieceKind::Pawn))?,
            ],
        })
    }

    pub fn get_strategy(&self, piece: PieceKind) -> &dyn MoveStrategy {
        self.strategies[piece.index()].as_ref()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        StrategyRegistry::standard()
    }
}
