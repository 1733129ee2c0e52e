//! Domain layer error types
//!
//! Nothing in the catalog core is fatal. Lookups report absence as `None`;
//! these variants cover the cases where a caller has to make a decision.

use thiserror::Error;

use crate::domain::entities::Platform;

/// Main catalog error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Record or group not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// A record with this title already exists; the existing record is kept
    #[error("Duplicate title '{title}' (already cataloged under {existing})")]
    DuplicateTitle { title: String, existing: Platform },

    /// Candidate rejected at ingestion
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Persistence collaborator failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Scan collaborator failed
    #[error("Scan error: {0}")]
    Scan(String),
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Persistence(err.to_string())
    }
}
