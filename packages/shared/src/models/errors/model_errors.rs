use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidPieceName(String),
    InvalidPositionFormat(String),
    InvalidBoardSize(i32),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::InvalidPieceName(raw) => write!(f, "Invalid piece: {}", raw),
            ModelError::InvalidPositionFormat(raw) => write!(f, "Invalid position: {}", raw),
            ModelError::InvalidBoardSize(size) => {
                write!(f, "Invalid board size: {} (must be at least 1)", size)
            }
        }
    }
}

impl std::error::Error for ModelError {}
