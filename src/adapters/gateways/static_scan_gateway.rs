//! StaticScanGateway - scan source backed by a fixed candidate list

use crate::domain::entities::{Platform, ScannedProgram};
use crate::domain::errors::CatalogError;
use crate::domain::repositories::ScanSource;

/// Scan source returning preset candidates, or a preset failure
pub struct StaticScanGateway {
    name: String,
    platforms: Vec<Platform>,
    result: Result<Vec<ScannedProgram>, CatalogError>,
}

impl StaticScanGateway {
    /// Source that always discovers `candidates`
    pub fn new(name: impl Into<String>, platform: Platform, candidates: Vec<ScannedProgram>) -> Self {
        Self {
            name: name.into(),
            platforms: vec![platform],
            result: Ok(candidates),
        }
    }

    /// Source whose scan always fails
    pub fn failing(name: impl Into<String>, platform: Platform, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            platforms: vec![platform],
            result: Err(CatalogError::Scan(reason.into())),
        }
    }

    /// Builder: list additional platforms this source covers
    pub fn with_platforms(mut self, platforms: Vec<Platform>) -> Self {
        self.platforms = platforms;
        self
    }
}

impl ScanSource for StaticScanGateway {
    fn name(&self) -> &str {
        &self.name
    }

    fn platforms(&self) -> Vec<Platform> {
        self.platforms.clone()
    }

    fn scan(&self) -> Result<Vec<ScannedProgram>, CatalogError> {
        self.result.clone()
    }
}
