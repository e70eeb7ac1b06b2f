use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Estimated PageRank per page, sorted by page name.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PageRanks {
    ranks: BTreeMap<String, f64>,
}

impl PageRanks {
    pub fn new(ranks: BTreeMap<String, f64>) -> Self {
        PageRanks { ranks }
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ranks.iter().map(|(page, rank)| (page.as_str(), *rank))
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// Largest absolute difference against another estimate of the same pages.
    pub fn max_difference(&self, other: &PageRanks) -> f64 {
        self.iter()
            .map(|(page, rank)| (rank - other.get(page).unwrap_or(0.0)).abs())
            .fold(0.0, f64::max)
    }

    /// `title` followed by one `  page: rank` line per page.
    pub fn render(&self, title: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", title);
        for (page, rank) in self.iter() {
            let _ = writeln!(out, "  {}: {:.4}", page, rank);
        }
        out
    }
}
