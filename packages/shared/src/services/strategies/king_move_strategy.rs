use std::collections::BTreeSet;

use crate::models::board::Board;
use crate::models::piece::PieceKind;
use crate::models::position::Position;
use crate::services::strategies::{MoveStrategy, DIRECTIONS};

/// One step in any of the eight directions.
#[derive(Debug, Default, Clone, Copy)]
pub struct KingMoveStrategy;

impl MoveStrategy for KingMoveStrategy {
    fn piece(&self) -> PieceKind {
        PieceKind::King
    }

    fn get_moves(&self, position: &Position, board: &Board) -> Vec<Position> {
        DIRECTIONS
            .iter()
            .map(|&(row_delta, column_delta)| position.offset(row_delta, column_delta))
            .filter(|candidate| board.is_valid(candidate))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
