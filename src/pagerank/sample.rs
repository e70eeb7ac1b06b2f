use log::{debug, info};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use std::collections::BTreeMap;

use super::corpus::Corpus;
use super::error::PageRankError;
use super::ranks::PageRanks;
use super::transition::{check_damping, transition_row};

/// Estimates PageRank by following a random surfer for `samples` pages.
///
/// The first page is chosen uniformly; every later one is drawn from the
/// transition model of the page before it. A page's rank is the share of
/// samples that landed on it.
pub fn sample_pagerank<R: Rng>(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<PageRanks, PageRankError> {
    check_damping(damping)?;
    if samples == 0 {
        return Err(PageRankError::InvalidOption(
            "sample count must be positive".to_string(),
        ));
    }
    info!("Sampling {} pages from a corpus of {}", samples, corpus.len());

    let transitions = (0..corpus.len())
        .map(|i| WeightedIndex::new(transition_row(corpus, i, damping)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut visits = vec![0usize; corpus.len()];
    let mut page = rng.gen_range(0..corpus.len());
    visits[page] += 1;
    for _ in 1..samples {
        page = transitions[page].sample(rng);
        visits[page] += 1;
    }
    debug!("Visit counts: {:?}", visits);

    let ranks: BTreeMap<String, f64> = corpus
        .pages()
        .iter()
        .cloned()
        .zip(visits.iter().map(|&v| v as f64 / samples as f64))
        .collect();
    Ok(PageRanks::new(ranks))
}
