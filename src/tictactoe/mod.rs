//! Tic-Tac-Toe rules and an unbeatable minimax opponent.

pub mod board;
pub mod error;
pub mod minimax;
pub mod play;

pub use board::{Board, Move, Player};
pub use error::GameError;
pub use minimax::{minimax, search};
pub use play::{Outcome, parse_move, play};
