use log::debug;
use std::collections::HashMap;

use super::error::HeredityError;

/// Largest population whose members fit in a `u64` mask.
pub const MAX_INDIVIDUALS: usize = u64::BITS as usize;

/// One row of input, before parent names are resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonRecord {
    pub name: String,
    pub mother: Option<String>,
    pub father: Option<String>,
    /// `None` when the trait was not observed
    pub has_trait: Option<bool>,
}

impl PersonRecord {
    pub fn founder(name: &str, has_trait: Option<bool>) -> Self {
        PersonRecord {
            name: name.to_string(),
            mother: None,
            father: None,
            has_trait,
        }
    }

    pub fn child(name: &str, mother: &str, father: &str, has_trait: Option<bool>) -> Self {
        PersonRecord {
            name: name.to_string(),
            mother: Some(mother.to_string()),
            father: Some(father.to_string()),
            has_trait,
        }
    }
}

/// Indices of a person's mother and father within the population.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Parents {
    pub mother: usize,
    pub father: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Individual {
    pub name: String,
    pub parents: Option<Parents>,
    pub has_trait: Option<bool>,
}

impl Individual {
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }
}

/// A validated family. Read-only once built.
///
/// Individuals keep their input order and each one's position is its bit in
/// every enumeration mask.
#[derive(Clone, Debug)]
pub struct Population {
    individuals: Vec<Individual>,
    index: HashMap<String, usize>,
}

impl Population {
    pub fn from_records(records: Vec<PersonRecord>) -> Result<Self, HeredityError> {
        if records.len() > MAX_INDIVIDUALS {
            return Err(HeredityError::TooManyIndividuals {
                count: records.len(),
                max: MAX_INDIVIDUALS,
            });
        }

        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.name.clone(), i).is_some() {
                return Err(HeredityError::DuplicateIndividual(record.name.clone()));
            }
        }

        let resolve = |name: &str, parent: &str| -> Result<usize, HeredityError> {
            if parent == name {
                return Err(HeredityError::SelfParent(name.to_string()));
            }
            index
                .get(parent)
                .copied()
                .ok_or_else(|| HeredityError::UnknownParent {
                    name: name.to_string(),
                    parent: parent.to_string(),
                })
        };

        let mut individuals = Vec::with_capacity(records.len());
        for record in records.iter() {
            let parents = match (&record.mother, &record.father) {
                (None, None) => None,
                (Some(mother), Some(father)) => Some(Parents {
                    mother: resolve(&record.name, mother)?,
                    father: resolve(&record.name, father)?,
                }),
                _ => return Err(HeredityError::IncompleteParents(record.name.clone())),
            };
            individuals.push(Individual {
                name: record.name.clone(),
                parents,
                has_trait: record.has_trait,
            });
        }

        debug!(
            "Loaded population of {} ({} founders)",
            individuals.len(),
            individuals.iter().filter(|p| p.is_founder()).count()
        );
        Ok(Population { individuals, index })
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn get(&self, name: &str) -> Option<&Individual> {
        self.index.get(name).map(|&i| &self.individuals[i])
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Mask with a bit set for every individual.
    pub fn full_mask(&self) -> u64 {
        if self.individuals.len() == MAX_INDIVIDUALS {
            u64::MAX
        } else {
            (1u64 << self.individuals.len()) - 1
        }
    }

    /// Builds a mask from a list of names.
    pub fn mask_of<S: AsRef<str>>(&self, names: &[S]) -> Result<u64, HeredityError> {
        let mut mask = 0u64;
        for name in names {
            let name = name.as_ref();
            let i = self
                .index_of(name)
                .ok_or_else(|| HeredityError::UnknownIndividual(name.to_string()))?;
            mask |= 1u64 << i;
        }
        Ok(mask)
    }

    /// Individuals whose trait was observed, and the subset observed with it.
    pub fn evidence_masks(&self) -> (u64, u64) {
        let mut known = 0u64;
        let mut present = 0u64;
        for (i, person) in self.individuals.iter().enumerate() {
            if let Some(has_trait) = person.has_trait {
                known |= 1u64 << i;
                if has_trait {
                    present |= 1u64 << i;
                }
            }
        }
        (known, present)
    }
}
