use crate::models::errors::model_errors::ModelError;
use crate::models::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    rows: i32,
    columns: i32,
}

impl Board {
    pub fn new(rows: i32, columns: i32) -> Result<Self, ModelError> {
        if rows < 1 {
            return Err(ModelError::InvalidBoardSize(rows));
        }
        if columns < 1 {
            return Err(ModelError::InvalidBoardSize(columns));
        }
        Ok(Board { rows, columns })
    }

    pub fn square(size: i32) -> Result<Self, ModelError> {
        Board::new(size, size)
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn is_valid(&self, position: &Position) -> bool {
        (1..=self.rows).contains(&position.row) && (1..=self.columns).contains(&position.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1, true)]
    #[case(8, 8, true)]
    #[case(4, 5, true)]
    #[case(0, 1, false)]
    #[case(1, 0, false)]
    #[case(9, 1, false)]
    #[case(1, 9, false)]
    #[case(-3, -3, false)]
    fn test_is_valid_on_eight_by_eight(
        #[case] row: i32,
        #[case] column: i32,
        #[case] expected: bool,
    ) {
        let board = Board::square(8).unwrap();
        assert_eq!(board.is_valid(&Position::new(row, column)), expected);
    }

    #[test]
    fn test_rectangular_board_checks_each_axis() {
        let board = Board::new(2, 5).unwrap();
        assert!(board.is_valid(&Position::new(2, 5)));
        assert!(!board.is_valid(&Position::new(3, 1)));
        assert!(!board.is_valid(&Position::new(1, 6)));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert_eq!(Board::square(0), Err(ModelError::InvalidBoardSize(0)));
        assert_eq!(Board::new(3, -1), Err(ModelError::InvalidBoardSize(-1)));
    }

    #[test]
    fn test_single_square_board() {
        let board = Board::square(1).unwrap();
        assert_eq!(board.rows(), 1);
        assert_eq!(board.columns(), 1);
        assert!(board.is_valid(&Position::new(1, 1)));
    }
}
