use tracing::debug;

use crate::models::board::Board;
use crate::models::piece::PieceKind;
use crate::models::position::Position;
use crate::services::errors::move_guesser_service_errors::MoveGuesserServiceError;
use crate::services::strategy_registry::StrategyRegistry;

#[cfg(test)]
use mockall::automock;

/// What to do with an input position that is not on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfBoardPolicy {
    /// Run the strategy anyway, off-board candidates are dropped.
    #[default]
    Filter,
    /// Fail with [`MoveGuesserServiceError::PositionOutOfBoard`].
    Reject,
}

#[cfg_attr(test, automock)]
pub trait MoveGuesser: Send + Sync {
    /// Comma-space separated squares the piece can reach, in ascending order.
    /// No reachable square yields an empty string.
    fn get_possible_moves(
        &self,
        position: &Position,
        piece: PieceKind,
    ) -> Result<String, MoveGuesserServiceError>;
}

pub struct MoveGuesserService {
    board: Board,
    registry: StrategyRegistry,
    policy: OutOfBoardPolicy,
}

impl MoveGuesserService {
    pub fn new(board: Board, registry: StrategyRegistry) -> Self {
        MoveGuesserService {
            board,
            registry,
            policy: OutOfBoardPolicy::default(),
        }
    }

    pub fn with_policy(board: Board, registry: StrategyRegistry, policy: OutOfBoardPolicy) -> Self {
        MoveGuesserService {
            board,
            registry,
            policy,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl MoveGuesser for MoveGuesserService {
    fn get_possible_moves(
        &self,
        position: &Position,
        piece: PieceKind,
    ) -> Result<String, MoveGuesserServiceError> {
        if self.policy == OutOfBoardPolicy::Reject && !self.board.is_valid(position) {
            return Err(MoveGuesserServiceError::PositionOutOfBoard(format!(
                "(row={}, column={})",
                position.row, position.column
            )));
        }

        let strategy = self.registry.get_strategy(piece);
        let moves = strategy.get_moves(position, &self.board);
        debug!(
            "Computed {} moves for {} at {}",
            moves.len(),
            piece,
            position.to_dto()
        );

        Ok(moves
            .iter()
            .map(Position::to_dto)
            .collect::<Vec<_>>()
            .join(", "))
    }
}
