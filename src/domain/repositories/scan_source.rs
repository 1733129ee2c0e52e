//! ScanSource - interface for platform program discovery
//!
//! One source per storefront or discovery mechanism (registry, shortcut
//! folders, launcher databases). Discovery heuristics live entirely in the
//! implementation.

use crate::domain::entities::{Platform, ScannedProgram};
use crate::domain::errors::CatalogError;

/// Scanner interface producing raw candidates
pub trait ScanSource {
    /// Human-readable source name for reports and logs
    fn name(&self) -> &str;

    /// Platforms this source is authoritative for; only these are pruned
    /// when the source succeeds
    fn platforms(&self) -> Vec<Platform>;

    /// Discover installed programs
    fn scan(&self) -> Result<Vec<ScannedProgram>, CatalogError>;
}

/// A null implementation for testing
pub struct NullScanSource;

impl ScanSource for NullScanSource {
    fn name(&self) -> &str {
        "null"
    }

    fn platforms(&self) -> Vec<Platform> {
        Vec::new()
    }

    fn scan(&self) -> Result<Vec<ScannedProgram>, CatalogError> {
        Ok(Vec::new())
    }
}
