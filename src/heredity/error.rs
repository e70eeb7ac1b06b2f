use thiserror::Error;

/// Errors raised while loading a family or running inference over it.
#[derive(Debug, Error)]
pub enum HeredityError {
    #[error("failed to read population data: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model parameters: {0}")]
    Json(#[from] serde_json::Error),

    #[error("individual '{0}' appears more than once")]
    DuplicateIndividual(String),

    /// Mother and father must both be present or both be absent.
    #[error("individual '{0}' has only one parent recorded")]
    IncompleteParents(String),

    #[error("individual '{name}' refers to unknown parent '{parent}'")]
    UnknownParent { name: String, parent: String },

    #[error("individual '{0}' is listed as their own parent")]
    SelfParent(String),

    #[error("invalid trait value '{value}' for '{name}' (expected 0, 1 or blank)")]
    InvalidTrait { name: String, value: String },

    #[error("population of {count} individuals exceeds the supported maximum of {max}")]
    TooManyIndividuals { count: usize, max: usize },

    #[error("unknown individual '{0}'")]
    UnknownIndividual(String),

    #[error("invalid model parameters: {0}")]
    InvalidParameters(String),

    /// Every enumerated outcome for this person had probability zero, so the
    /// observed traits cannot occur under the model.
    #[error("the observed evidence is impossible under the model (no probability mass for '{0}')")]
    ImpossibleEvidence(String),
}
