#[macro_use]
pub mod common;
pub mod heredity;
pub mod pagerank;
pub mod tictactoe;

pub use heredity::{ModelParameters, Population, Posteriors, infer};
pub use pagerank::{Corpus, PageRankOptions, PageRankReport, rank_corpus};
pub use tictactoe::{Board, Player, minimax};
