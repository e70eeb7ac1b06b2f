use super::error::HeredityError;
use super::params::{GeneCount, ModelParameters};
use super::population::{Individual, Population};

/// One complete outcome of the network, as masks over population indices.
///
/// Anyone in neither gene mask carries no copy; anyone outside
/// `have_trait` does not show the trait.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub one_gene: u64,
    pub two_genes: u64,
    pub have_trait: u64,
}

impl Assignment {
    /// Builds an assignment from lists of names.
    pub fn from_names<S: AsRef<str>>(
        population: &Population,
        one_gene: &[S],
        two_genes: &[S],
        have_trait: &[S],
    ) -> Result<Self, HeredityError> {
        Ok(Assignment {
            one_gene: population.mask_of(one_gene)?,
            two_genes: population.mask_of(two_genes)?,
            have_trait: population.mask_of(have_trait)?,
        })
    }

    pub fn genes(&self, index: usize) -> GeneCount {
        GeneCount::from_masks(index, self.one_gene, self.two_genes)
    }

    pub fn has_trait(&self, index: usize) -> bool {
        self.have_trait & (1u64 << index) != 0
    }
}

/// Probability that a child ends up with `genes` copies given how likely
/// each parent is to pass one on.
pub fn inherited_probability(genes: GeneCount, from_mother: f64, from_father: f64) -> f64 {
    match genes {
        GeneCount::Zero => (1.0 - from_mother) * (1.0 - from_father),
        GeneCount::One => (1.0 - from_mother) * from_father + from_mother * (1.0 - from_father),
        GeneCount::Two => from_mother * from_father,
    }
}

/// Gene factor times trait factor for one person.
pub fn person_factor(
    person: &Individual,
    index: usize,
    params: &ModelParameters,
    assignment: &Assignment,
) -> f64 {
    let genes = assignment.genes(index);
    let gene_factor = match person.parents {
        None => params.founder_prior(genes),
        Some(parents) => inherited_probability(
            genes,
            params.transmission_probability(assignment.genes(parents.mother)),
            params.transmission_probability(assignment.genes(parents.father)),
        ),
    };
    gene_factor * params.trait_probability(genes, assignment.has_trait(index))
}

/// Probability of exactly this outcome for everyone in the population.
pub fn joint_probability(
    population: &Population,
    params: &ModelParameters,
    assignment: &Assignment,
) -> f64 {
    population
        .individuals()
        .iter()
        .enumerate()
        .map(|(i, person)| person_factor(person, i, params, assignment))
        .product()
}
