use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::HeredityError;
use super::population::{PersonRecord, Population};

/// Raw CSV row: `name,mother,father,trait`.
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    mother: Option<String>,
    father: Option<String>,
    #[serde(rename = "trait")]
    observed: Option<String>,
}

fn non_blank(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_trait(name: &str, value: Option<String>) -> Result<Option<bool>, HeredityError> {
    match non_blank(value).as_deref() {
        None => Ok(None),
        Some("1") => Ok(Some(true)),
        Some("0") => Ok(Some(false)),
        Some(other) => Err(HeredityError::InvalidTrait {
            name: name.to_string(),
            value: other.to_string(),
        }),
    }
}

impl TryFrom<CsvRow> for PersonRecord {
    type Error = HeredityError;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let name = row.name.trim().to_string();
        let has_trait = parse_trait(&name, row.observed)?;
        Ok(PersonRecord {
            mother: non_blank(row.mother),
            father: non_blank(row.father),
            has_trait,
            name,
        })
    }
}

/// Reads a family from CSV with a `name,mother,father,trait` header.
///
/// Blank parents mean a founder; `trait` is `1`, `0` or blank for unknown.
pub fn load_population<R: Read>(reader: R) -> Result<Population, HeredityError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in rdr.deserialize::<CsvRow>() {
        records.push(PersonRecord::try_from(row?)?);
    }
    Population::from_records(records)
}

pub fn load_population_from_path<P: AsRef<Path>>(path: P) -> Result<Population, HeredityError> {
    let path = path.as_ref();
    info!("Loading population from {}", path.display());
    load_population(File::open(path)?)
}
