use std::fmt;
use std::str::FromStr;

use crate::models::errors::model_errors::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 3] = [PieceKind::King, PieceKind::Queen, PieceKind::Pawn];

    /// Case-insensitive, whitespace-tolerant parse. Never falls back to a default.
    pub fn from_string(raw: &str) -> Result<Self, ModelError> {
        match raw.trim().to_uppercase().as_str() {
            "KING" => Ok(PieceKind::King),
            "QUEEN" => Ok(PieceKind::Queen),
            "PAWN" => Ok(PieceKind::Pawn),
            _ => Err(ModelError::InvalidPieceName(raw.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::King => "KING",
            PieceKind::Queen => "QUEEN",
            PieceKind::Pawn => "PAWN",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Pawn => 2,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::from_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("KING", PieceKind::King)]
    #[case("king", PieceKind::King)]
    #[case(" Queen ", PieceKind::Queen)]
    #[case("pAwN", PieceKind::Pawn)]
    fn test_from_string_normalizes_input(#[case] raw: &str, #[case] expected: PieceKind) {
        assert_eq!(PieceKind::from_string(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("BISHOP")]
    #[case("")]
    #[case("KINGS")]
    #[case("K")]
    fn test_from_string_rejects_unknown_pieces(#[case] raw: &str) {
        let err = PieceKind::from_string(raw).unwrap_err();
        assert_eq!(err, ModelError::InvalidPieceName(raw.to_string()));
        assert_eq!(err.to_string(), format!("Invalid piece: {}", raw));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for piece in PieceKind::ALL {
            assert_eq!(piece.to_string().parse::<PieceKind>().unwrap(), piece);
        }
    }

    #[test]
    fn test_indices_are_distinct() {
        let mut indices: Vec<usize> = PieceKind::ALL.iter().map(PieceKind::index).collect();
        indices.sort();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
