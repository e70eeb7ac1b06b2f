use std::collections::BTreeMap;

use super::corpus::Corpus;
use super::error::PageRankError;

pub fn check_damping(damping: f64) -> Result<(), PageRankError> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(PageRankError::InvalidDamping(damping));
    }
    Ok(())
}

/// Next-page probabilities from the page at `index`, indexed like the corpus.
///
/// A page without links behaves as if it linked to every page, itself
/// included.
pub fn transition_row(corpus: &Corpus, index: usize, damping: f64) -> Vec<f64> {
    let n = corpus.len() as f64;
    let outgoing = corpus.outgoing(index);
    if outgoing.is_empty() {
        return vec![1.0 / n; corpus.len()];
    }
    let mut row = vec![(1.0 - damping) / n; corpus.len()];
    let follow = damping / outgoing.len() as f64;
    for &target in outgoing {
        row[target] += follow;
    }
    row
}

/// Where a random surfer on `page` goes next.
///
/// With probability `damping` it follows one of the page's links, chosen
/// uniformly; otherwise it jumps to any page in the corpus.
pub fn transition_model(
    corpus: &Corpus,
    page: &str,
    damping: f64,
) -> Result<BTreeMap<String, f64>, PageRankError> {
    check_damping(damping)?;
    let index = corpus
        .index_of(page)
        .ok_or_else(|| PageRankError::UnknownPage(page.to_string()))?;
    Ok(corpus
        .pages()
        .iter()
        .cloned()
        .zip(transition_row(corpus, index, damping))
        .collect())
}
