pub mod health;
pub mod move_guesser;
