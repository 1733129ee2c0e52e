//! CatalogRepository - interface for catalog persistence
//!
//! The storage format belongs to the implementation. Failures come back as
//! values; the in-memory catalog is never modified by a failed save.

use crate::domain::entities::Record;
use crate::domain::errors::CatalogError;

/// Repository interface for persisted records
pub trait CatalogRepository: Send + Sync {
    /// Load every persisted record
    fn load(&self) -> Result<Vec<Record>, CatalogError>;

    /// Replace the persisted records
    fn save(&self, records: &[Record]) -> Result<(), CatalogError>;
}

/// A null implementation for testing
pub struct NullCatalogRepository;

impl CatalogRepository for NullCatalogRepository {
    fn load(&self) -> Result<Vec<Record>, CatalogError> {
        Ok(Vec::new())
    }

    fn save(&self, _records: &[Record]) -> Result<(), CatalogError> {
        Ok(())
    }
}
