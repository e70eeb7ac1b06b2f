use rand::distributions::WeightedError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageRankError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to walk corpus directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid link pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("corpus contains no pages")]
    EmptyCorpus,

    #[error("page '{0}' is not part of the corpus")]
    UnknownPage(String),

    #[error("damping factor must lie in [0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("ranks did not converge within {iterations} iterations")]
    NoConvergence { iterations: usize },

    #[error("failed to build sampling distribution: {0}")]
    Sampling(#[from] WeightedError),
}
