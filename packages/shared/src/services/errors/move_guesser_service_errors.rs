use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGuesserServiceError {
    PositionOutOfBoard(String),
}

impl fmt::Display for MoveGuesserServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveGuesserServiceError::PositionOutOfBoard(position) => {
                write!(f, "Position {} is out of board", position)
            }
        }
    }
}

impl std::error::Error for MoveGuesserServiceError {}
