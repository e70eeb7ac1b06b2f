use serde::Serialize;

use super::error::HeredityError;
use super::joint::Assignment;
use super::params::GeneCount;
use super::population::Population;

/// Probability of carrying 0, 1 or 2 copies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct GeneDistribution {
    pub zero: f64,
    pub one: f64,
    pub two: f64,
}

impl GeneDistribution {
    pub fn get(&self, genes: GeneCount) -> f64 {
        match genes {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }

    pub fn total(&self) -> f64 {
        self.zero + self.one + self.two
    }
}

/// Probability of showing, and of not showing, the trait.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct TraitDistribution {
    pub present: f64,
    pub absent: f64,
}

impl TraitDistribution {
    pub fn get(&self, has_trait: bool) -> f64 {
        if has_trait { self.present } else { self.absent }
    }

    pub fn total(&self) -> f64 {
        self.present + self.absent
    }
}

/// Normalized marginals for one person.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PersonPosterior {
    pub name: String,
    pub gene: GeneDistribution,
    #[serde(rename = "trait")]
    pub has_trait: TraitDistribution,
}

/// Marginals for everyone, in population order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Posteriors {
    pub people: Vec<PersonPosterior>,
}

impl Posteriors {
    pub fn get(&self, name: &str) -> Option<&PersonPosterior> {
        self.people.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonPosterior> {
        self.people.iter()
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct Mass {
    genes: [f64; 3],
    traits: [f64; 2],
}

/// Running, unnormalized probability mass per person.
#[derive(Clone, Debug)]
pub struct Accumulator {
    names: Vec<String>,
    mass: Vec<Mass>,
}

impl Accumulator {
    pub fn new(population: &Population) -> Self {
        Accumulator {
            names: population.individuals().iter().map(|p| p.name.clone()).collect(),
            mass: vec![Mass::default(); population.len()],
        }
    }

    /// Adds `p` to each person's gene bucket and trait bucket for this outcome.
    pub fn update(&mut self, assignment: &Assignment, p: f64) {
        for (i, mass) in self.mass.iter_mut().enumerate() {
            mass.genes[assignment.genes(i).copies()] += p;
            mass.traits[usize::from(assignment.has_trait(i))] += p;
        }
    }

    /// Unnormalized gene mass for the person at `index`.
    pub fn gene_mass(&self, index: usize) -> GeneDistribution {
        let [zero, one, two] = self.mass[index].genes;
        GeneDistribution { zero, one, two }
    }

    /// Unnormalized trait mass for the person at `index`.
    pub fn trait_mass(&self, index: usize) -> TraitDistribution {
        let [absent, present] = self.mass[index].traits;
        TraitDistribution { present, absent }
    }

    /// Rescales every distribution to sum to one.
    ///
    /// Fails when a person received no mass at all, which only happens when
    /// the evidence is impossible under the model.
    pub fn normalize(self) -> Result<Posteriors, HeredityError> {
        let mut people = Vec::with_capacity(self.names.len());
        for (i, name) in self.names.iter().enumerate() {
            let gene = self.gene_mass(i);
            let has_trait = self.trait_mass(i);
            let gene_total = gene.total();
            let trait_total = has_trait.total();
            if !(gene_total > 0.0 && gene_total.is_finite())
                || !(trait_total > 0.0 && trait_total.is_finite())
            {
                return Err(HeredityError::ImpossibleEvidence(name.clone()));
            }
            people.push(PersonPosterior {
                name: name.clone(),
                gene: GeneDistribution {
                    zero: gene.zero / gene_total,
                    one: gene.one / gene_total,
                    two: gene.two / gene_total,
                },
                has_trait: TraitDistribution {
                    present: has_trait.present / trait_total,
                    absent: has_trait.absent / trait_total,
                },
            });
        }
        Ok(Posteriors { people })
    }
}
