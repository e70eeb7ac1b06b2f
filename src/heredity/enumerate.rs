use super::joint::Assignment;
use super::population::Population;

/// Every submask of `mask`, starting at `mask` itself and ending at zero.
#[derive(Clone, Debug)]
pub struct Submasks {
    mask: u64,
    next: Option<u64>,
}

impl Submasks {
    pub fn new(mask: u64) -> Self {
        Submasks {
            mask,
            next: Some(mask),
        }
    }
}

impl Iterator for Submasks {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        self.next = if current == 0 {
            None
        } else {
            Some((current - 1) & self.mask)
        };
        Some(current)
    }
}

/// Trait-positive sets that agree with every observed trait.
///
/// Observed individuals are pinned; only the unobserved ones vary.
pub fn trait_assertions(population: &Population) -> impl Iterator<Item = u64> {
    let (known, present) = population.evidence_masks();
    let unknown = population.full_mask() & !known;
    Submasks::new(unknown).map(move |free| present | free)
}

/// Disjoint `(one_gene, two_genes)` pairs drawn from `full`; whoever is in
/// neither carries no copy.
pub fn gene_partitions(full: u64) -> impl Iterator<Item = (u64, u64)> {
    Submasks::new(full).flat_map(move |one_gene| {
        Submasks::new(full & !one_gene).map(move |two_genes| (one_gene, two_genes))
    })
}

/// Every evidence-consistent assignment, trait sets in the outer loop.
pub fn assignments(population: &Population) -> impl Iterator<Item = Assignment> {
    let full = population.full_mask();
    trait_assertions(population).flat_map(move |have_trait| {
        gene_partitions(full).map(move |(one_gene, two_genes)| Assignment {
            one_gene,
            two_genes,
            have_trait,
        })
    })
}

/// Number of assignments `assignments` yields, as a float since it overflows
/// integers long before it becomes the bottleneck.
pub fn assignment_count(population: &Population) -> f64 {
    let (known, _) = population.evidence_masks();
    let unobserved = population.len() - known.count_ones() as usize;
    3f64.powi(population.len() as i32) * 2f64.powi(unobserved as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heredity::population::PersonRecord;
    use std::collections::HashSet;

    #[test]
    fn test_submasks_cover_power_set() {
        let subs: Vec<u64> = Submasks::new(0b101).collect();
        assert_eq!(subs, vec![0b101, 0b100, 0b001, 0b000]);
        assert_eq!(Submasks::new(0).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_gene_partitions_are_disjoint_and_complete() {
        let full = 0b111;
        let parts: Vec<(u64, u64)> = gene_partitions(full).collect();
        assert_eq!(parts.len(), 27);
        let unique: HashSet<(u64, u64)> = parts.iter().copied().collect();
        assert_eq!(unique.len(), 27);
        for (one, two) in parts {
            assert_eq!(one & two, 0);
            assert_eq!((one | two) & !full, 0);
        }
    }

    #[test]
    fn test_trait_assertions_respect_evidence() {
        let population = Population::from_records(vec![
            PersonRecord::founder("A", Some(true)),
            PersonRecord::founder("B", None),
            PersonRecord::founder("C", Some(false)),
        ])
        .unwrap();
        let mut sets: Vec<u64> = trait_assertions(&population).collect();
        sets.sort();
        assert_eq!(sets, vec![0b001, 0b011]);
    }

    #[test]
    fn test_assignment_count_matches_iterator() {
        let population = Population::from_records(vec![
            PersonRecord::child("Harry", "Lily", "James", None),
            PersonRecord::founder("James", Some(true)),
            PersonRecord::founder("Lily", None),
        ])
        .unwrap();
        let count = assignments(&population).count();
        assert_eq!(count, 27 * 4);
        assert_eq!(assignment_count(&population), count as f64);
    }

    #[test]
    fn test_empty_population_has_one_assignment() {
        let population = Population::from_records(vec![]).unwrap();
        let all: Vec<Assignment> = assignments(&population).collect();
        assert_eq!(all, vec![Assignment::default()]);
    }
}
