use log::{debug, info};
use ndarray::{Array1, Array2};
use std::collections::BTreeMap;

use super::PageRankOptions;
use super::corpus::Corpus;
use super::error::PageRankError;
use super::ranks::PageRanks;

/// Column-stochastic link matrix: entry `(target, source)` is the share of
/// `source`'s rank passed to `target`. Pages without links share with all.
pub fn link_matrix(corpus: &Corpus) -> Array2<f64> {
    let n = corpus.len();
    let mut matrix = Array2::zeros((n, n));
    for source in 0..n {
        let outgoing = corpus.outgoing(source);
        if outgoing.is_empty() {
            matrix.column_mut(source).fill(1.0 / n as f64);
        } else {
            let share = 1.0 / outgoing.len() as f64;
            for &target in outgoing {
                matrix[[target, source]] = share;
            }
        }
    }
    matrix
}

/// Computes PageRank by repeating
/// `PR(p) = (1 - d) / N + d * sum(PR(i) / NumLinks(i))` over the pages `i`
/// linking to `p`, starting from a uniform distribution, until no page moves
/// by `tolerance` or more.
pub fn iterate_pagerank(
    corpus: &Corpus,
    options: &PageRankOptions,
) -> Result<PageRanks, PageRankError> {
    options.validate()?;
    let n = corpus.len();
    let damping = options.damping;
    let matrix = link_matrix(corpus);
    let teleport = (1.0 - damping) / n as f64;

    let mut ranks = Array1::from_elem(n, 1.0 / n as f64);
    for iteration in 1..=options.max_iterations {
        let next = matrix.dot(&ranks) * damping + teleport;
        let change = (&next - &ranks).mapv(f64::abs).fold(0.0, |a: f64, &b| a.max(b));
        ranks = next;
        debug!("Iteration {}: largest change {}", iteration, change);
        if change < options.tolerance {
            info!("PageRank converged after {} iterations", iteration);
            let ranks: BTreeMap<String, f64> =
                corpus.pages().iter().cloned().zip(ranks.iter().copied()).collect();
            return Ok(PageRanks::new(ranks));
        }
    }
    Err(PageRankError::NoConvergence {
        iterations: options.max_iterations,
    })
}
