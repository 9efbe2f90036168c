//! Catalog error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the dataset
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Dataset file could not be read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset is not a JSON array of project records
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share an id
    #[error("Duplicate project id '{id}' at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
