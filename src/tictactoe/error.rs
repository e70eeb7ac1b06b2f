use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("cell ({row}, {col}) is already taken")]
    MoveTaken { row: usize, col: usize },

    #[error("move ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
}
