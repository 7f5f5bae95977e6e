use crate::models::board::Board;
use crate::models::piece::PieceKind;
use crate::models::position::Position;

pub mod king_move_strategy;
pub mod pawn_move_strategy;
pub mod queen_move_strategy;

pub use king_move_strategy::KingMoveStrategy;
pub use pawn_move_strategy::PawnMoveStrategy;
pub use queen_move_strategy::QueenMoveStrategy;

/// `(row_delta, column_delta)` for the four orthogonal and four diagonal neighbours.
pub(crate) const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

pub trait MoveStrategy: Send + Sync {
    /// The piece this strategy computes moves for.
    fn piece(&self) -> PieceKind;

    /// Reachable squares from `position` on an otherwise empty `board`.
    /// Only board-valid squares are returned.
    fn get_moves(&self, position: &Position, board: &Board) -> Vec<Position>;
}
