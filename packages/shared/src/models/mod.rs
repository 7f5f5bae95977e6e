pub mod board;
pub mod errors;
pub mod piece;
pub mod position;
