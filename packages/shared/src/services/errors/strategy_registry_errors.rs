use std::fmt;

use crate::models::piece::PieceKind;

#[derive(Debug)]
pub enum StrategyRegistryError {
    MissingStrategy(PieceKind),
    DuplicateStrategy(PieceKind),
}

impl fmt::Display for StrategyRegistryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StrategyRegistryError::MissingStrategy(piece) => {
                write!(f, "No move strategy registered for {}", piece)
            }
            StrategyRegistryError::DuplicateStrategy(piece) => {
                write!(f, "More than one move strategy registered for {}", piece)
            }
        }
    }
}

impl std::error::Error for StrategyRegistryError {}
