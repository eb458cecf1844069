// crates/countrydb-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by catalog operations and persistence.
///
/// Every variant is recoverable: a failed operation leaves the in-memory
/// catalog exactly as it was before the call (or, for a failed save after a
/// successful mutation, with the mutation applied but not yet on disk).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed or missing input (empty name, non-numeric population, ...).
    #[error("invalid input: {0}")]
    Validation(String),

    /// A record with the same normalized name already exists.
    #[error("country already exists: {0}")]
    Duplicate(String),

    /// No record matched the requested name.
    #[error("country not found: {0}")]
    NotFound(String),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }

    /// `true` for errors caused by bad caller input rather than storage.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CatalogError::Validation(_) | CatalogError::Duplicate(_) | CatalogError::NotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
