use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::error::HeredityError;

/// Tolerance used when checking that a distribution sums to one.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Number of copies of the gene a person carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeneCount {
    Zero,
    One,
    Two,
}

impl GeneCount {
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    pub fn copies(self) -> usize {
        match self {
            GeneCount::Zero => 0,
            GeneCount::One => 1,
            GeneCount::Two => 2,
        }
    }

    /// Gene count of the person at `index` given the one-gene and two-gene masks.
    pub fn from_masks(index: usize, one_gene: u64, two_genes: u64) -> GeneCount {
        let bit = 1u64 << index;
        if two_genes & bit != 0 {
            GeneCount::Two
        } else if one_gene & bit != 0 {
            GeneCount::One
        } else {
            GeneCount::Zero
        }
    }
}

/// Probability of showing the trait, and of not showing it, for one gene count.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraitRow {
    pub present: f64,
    pub absent: f64,
}

impl TraitRow {
    pub fn probability(&self, has_trait: bool) -> f64 {
        if has_trait { self.present } else { self.absent }
    }
}

/// Fixed tables of the heredity network.
///
/// `gene` is the unconditional prior for founders and `trait_given_gene` the
/// chance of expressing the trait, both indexed by number of copies.
/// `mutation` is the chance a transmitted copy flips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    pub gene: [f64; 3],
    pub trait_given_gene: [TraitRow; 3],
    pub mutation: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        ModelParameters {
            gene: [0.96, 0.03, 0.01],
            trait_given_gene: [
                TraitRow { present: 0.01, absent: 0.99 },
                TraitRow { present: 0.56, absent: 0.44 },
                TraitRow { present: 0.65, absent: 0.35 },
            ],
            mutation: 0.01,
        }
    }
}

fn check_probability(label: &str, value: f64) -> Result<(), HeredityError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(HeredityError::InvalidParameters(format!(
            "{} must lie in [0, 1], got {}",
            label, value
        )));
    }
    Ok(())
}

fn check_sum(label: &str, values: &[f64]) -> Result<(), HeredityError> {
    let total: f64 = values.iter().sum();
    if (total - 1.0).abs() > SUM_TOLERANCE {
        return Err(HeredityError::InvalidParameters(format!(
            "{} must sum to 1, got {}",
            label, total
        )));
    }
    Ok(())
}

impl ModelParameters {
    pub fn founder_prior(&self, genes: GeneCount) -> f64 {
        self.gene[genes.copies()]
    }

    pub fn trait_probability(&self, genes: GeneCount, has_trait: bool) -> f64 {
        self.trait_given_gene[genes.copies()].probability(has_trait)
    }

    /// Chance that a parent with `parent` copies hands a mutant copy to a child.
    pub fn transmission_probability(&self, parent: GeneCount) -> f64 {
        match parent {
            GeneCount::Zero => self.mutation,
            GeneCount::One => 0.5 * (1.0 - self.mutation) + 0.5 * self.mutation,
            GeneCount::Two => 1.0 - self.mutation,
        }
    }

    pub fn validate(&self) -> Result<(), HeredityError> {
        for genes in GeneCount::ALL {
            check_probability(&format!("gene[{}]", genes.copies()), self.founder_prior(genes))?;
            let row = &self.trait_given_gene[genes.copies()];
            check_probability(&format!("trait[{}].present", genes.copies()), row.present)?;
            check_probability(&format!("trait[{}].absent", genes.copies()), row.absent)?;
            check_sum(&format!("trait[{}]", genes.copies()), &[row.present, row.absent])?;
        }
        check_sum("gene prior", &self.gene)?;
        check_probability("mutation", self.mutation)
    }

    /// Load and validate parameters from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, HeredityError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, HeredityError> {
        let params: ModelParameters = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Save parameters to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), HeredityError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
