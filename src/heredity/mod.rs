//! Exact inference over a two-generation heredity network.
//!
//! Each person carries 0, 1 or 2 copies of a gene and may or may not show a
//! trait. Founders draw their copies from a population prior; children get
//! one copy from each parent, each subject to mutation. Observed traits are
//! evidence, and `infer` returns every person's posterior marginals by
//! enumerating all consistent outcomes.

pub mod accumulator;
pub mod enumerate;
pub mod error;
pub mod inference;
pub mod joint;
pub mod loader;
pub mod params;
pub mod population;
pub mod report;

pub use accumulator::{Accumulator, GeneDistribution, PersonPosterior, Posteriors, TraitDistribution};
pub use error::HeredityError;
pub use inference::infer;
pub use joint::{Assignment, joint_probability};
pub use loader::{load_population, load_population_from_path};
pub use params::{GeneCount, ModelParameters, TraitRow};
pub use population::{Individual, Parents, PersonRecord, Population};
pub use report::{render_json, render_report};
