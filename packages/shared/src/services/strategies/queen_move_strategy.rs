use std::collections::BTreeSet;

use crate::models::board::Board;
use crate::models::piece::PieceKind;
use crate::models::position::Position;
use crate::services::strategies::{MoveStrategy, DIRECTIONS};

/// Slides along each of the eight directions until it leaves the board.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueenMoveStrategy;

impl MoveStrategy for QueenMoveStrategy {
    fn piece(&self) -> PieceKind {
        PieceKind::Queen
    }

    fn get_moves(&self, position: &Position, board: &Board) -> Vec<Position> {
        let mut moves = BTreeSet::new();

        for &(row_delta, column_delta) in DIRECTIONS.iter() {
            let mut candidate = position.offset(row_delta, column_delta);
            while board.is_valid(&candidate) {
                moves.insert(candidate);
                candidate = candidate.offset(row_delta, column_delta);
            }
        }

        moves.into_iter().collect()
    }
}
