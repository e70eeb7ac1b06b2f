use log::{debug, info, trace};

use super::accumulator::{Accumulator, Posteriors};
use super::enumerate::{assignment_count, assignments};
use super::error::HeredityError;
use super::joint::joint_probability;
use super::params::ModelParameters;
use super::population::Population;

/// Exact posterior gene and trait distributions for every person.
///
/// Sums the joint probability of every outcome consistent with the observed
/// traits, then normalizes each person's marginals. Runtime grows as
/// 3^n * 2^(unobserved), so this is meant for small families.
pub fn infer(population: &Population, params: &ModelParameters) -> Result<Posteriors, HeredityError> {
    params.validate()?;
    info!(
        "Running exact inference over {} individuals ({} assignments)",
        population.len(),
        assignment_count(population)
    );

    let mut accumulator = Accumulator::new(population);
    let mut steps = 0usize;
    let mut total = 0.0;
    for assignment in assignments(population) {
        let p = joint_probability(population, params, &assignment);
        trace!("assignment {:?} has probability {}", assignment, p);
        accumulator.update(&assignment, p);
        total += p;
        steps += 1;
    }
    debug!("Enumerated {} assignments, evidence probability {}", steps, total);

    accumulator.normalize()
}
