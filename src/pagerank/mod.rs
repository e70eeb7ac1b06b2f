//! PageRank over a directory of linked HTML pages, estimated two ways: by
//! sampling a random surfer and by iterating the rank equation to a fixed
//! point.

pub mod corpus;
pub mod error;
pub mod iterate;
pub mod ranks;
pub mod sample;
pub mod transition;

use rand::Rng;
use serde::Serialize;

pub use corpus::{Corpus, crawl};
pub use error::PageRankError;
pub use iterate::iterate_pagerank;
pub use ranks::PageRanks;
pub use sample::sample_pagerank;
pub use transition::transition_model;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct PageRankOptions {
    /// Probability of following a link instead of jumping to a random page
    pub damping: f64,
    /// Pages visited by the sampler
    pub samples: usize,
    /// Iteration stops once no rank moves by this much
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for PageRankOptions {
    fn default() -> Self {
        PageRankOptions {
            damping: 0.85,
            samples: 10_000,
            tolerance: 0.001,
            max_iterations: 10_000,
        }
    }
}

impl PageRankOptions {
    pub fn validate(&self) -> Result<(), PageRankError> {
        transition::check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(PageRankError::InvalidOption(
                "sample count must be positive".to_string(),
            ));
        }
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(PageRankError::InvalidOption(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(PageRankError::InvalidOption(
                "max iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Both estimates for one corpus.
#[derive(Clone, Debug, Serialize)]
pub struct PageRankReport {
    pub samples: usize,
    pub sampling: PageRanks,
    pub iteration: PageRanks,
}

impl PageRankReport {
    pub fn render(&self) -> String {
        let mut out = self
            .sampling
            .render(&format!("PageRank Results from Sampling (n = {})", self.samples));
        out.push_str(&self.iteration.render("PageRank Results from Iteration"));
        out
    }
}

/// Runs the sampler and the iterative solver over the same corpus.
pub fn rank_corpus<R: Rng>(
    corpus: &Corpus,
    options: &PageRankOptions,
    rng: &mut R,
) -> Result<PageRankReport, PageRankError> {
    options.validate()?;
    let sampling = sample_pagerank(corpus, options.damping, options.samples, rng)?;
    let iteration = iterate_pagerank(corpus, options)?;
    log::debug!(
        "Sampling and iteration differ by at most {:.4}",
        sampling.max_difference(&iteration)
    );
    Ok(PageRankReport {
        samples: options.samples,
        sampling,
        iteration,
    })
}
