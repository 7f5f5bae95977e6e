use crate::models::board::Board;
use crate::models::piece::PieceKind;
use crate::models::position::Position;
use crate::services::strategies::MoveStrategy;

/// Advances one row. Forward is always towards higher rows.
#[derive(Debug, Default, Clone, Copy)]
pub struct PawnMoveStrategy;

impl MoveStrategy for PawnMoveStrategy {
    fn piece(&self) -> PieceKind {
        PieceKind::Pawn
    }

    fn get_moves(&self, position: &Position, board: &Board) -> Vec<Position> {
        let candidate = position.offset(1, 0);
        if board.is_valid(&candidate) {
            vec![candidate]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A1", Some("A2"))]
    #[case("E4", Some("E5"))]
    #[case("H7", Some("H8"))]
    #[case("A8", None)]
    #[case("D0", Some("D1"))]
    #[case("I4", None)]
    fn test_pawn_moves_one_row_forward(#[case] from: &str, #[case] expected: Option<&str>) {
        let board = Board::square(8).unwrap();
        let moves = PawnMoveStrategy.get_moves(&Position::from_algebraic(from).unwrap(), &board);
        let rendered: Vec<String> = moves.iter().map(Position::to_dto).collect();
        assert_eq!(rendered, expected.into_iter().map(String::from).collect::<Vec<_>>());
    }

    #[test]
    fn test_pawn_respects_smaller_boards() {
        let board = Board::square(3).unwrap();
        assert!(PawnMoveStrategy
            .get_moves(&Position::new(3, 2), &board)
            .is_empty());
        assert_eq!(
            PawnMoveStrategy.get_moves(&Position::new(2, 2), &board),
            vec![Position::new(3, 2)]
        );
    }
}
