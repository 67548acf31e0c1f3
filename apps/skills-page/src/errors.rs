use std::path::PathBuf;

use thiserror::Error;

use crate::results::submit::SubmitError;

/// Crate-level error type.
/// Field validation never produces one of these; invalid input is reported as a
/// [`crate::form::validation::FieldValidation`] value instead.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Failed to read skill catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Skill catalog is not valid JSON: {0}")]
    CatalogJson(#[from] serde_json::Error),

    #[error("Skill catalog must be a JSON array of names or an object keyed by name")]
    CatalogShape,

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Submission error: {0}")]
    Submit(#[from] SubmitError),
}
