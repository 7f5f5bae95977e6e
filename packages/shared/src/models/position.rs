use std::cmp::Ordering;
use std::str::FromStr;

use crate::models::errors::model_errors::ModelError;

/// A 1-based `(row, column)` coordinate.
///
/// A position carries no bounds of its own: anything outside the board is
/// still representable and is only rejected by [`crate::models::board::Board::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub fn new(row: i32, column: i32) -> Self {
        Position { row, column }
    }

    /// Parse a two character square such as `"E4"`.
    ///
    /// The input is trimmed and upper-cased first. The first character is the
    /// column letter, the second is the row digit, so rows above 9 cannot be
    /// expressed.
    pub fn from_algebraic(raw: &str) -> Result<Self, ModelError> {
        let normalized = raw.trim().to_uppercase();
        let mut chars = normalized.chars();

        match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(digit), None) if letter.is_ascii_uppercase() => {
                let row = digit
                    .to_digit(10)
                    .ok_or_else(|| ModelError::InvalidPositionFormat(raw.to_string()))?;
                let column = letter as i32 - 'A' as i32 + 1;
                Ok(Position::new(row as i32, column))
            }
            _ => Err(ModelError::InvalidPositionFormat(raw.to_string())),
        }
    }

    pub fn offset(&self, row_delta: i32, column_delta: i32) -> Self {
        Position::new(self.row + row_delta, self.column + column_delta)
    }

    /// Render as column letter followed by row, e.g. row 5 column 3 is `"C5"`.
    /// Only meaningful for positions already known to be on the board.
    pub fn to_dto(&self) -> String {
        let letter = u32::try_from(self.column - 1)
            .ok()
            .and_then(|offset| char::from_u32('A' as u32 + offset))
            .unwrap_or('?');
        format!("{}{}", letter, self.row)
    }
}

// File-major, so sorted positions read in the same order as their rendered squares.
impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.column.cmp(&other.column).then(self.row.cmp(&other.row))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Position {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_algebraic(s)
    }
}
