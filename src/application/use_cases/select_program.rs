//! SelectProgramUseCase - Record a launch
//!
//! Selecting a program decays every frequency score, bumps the selected one
//! and persists the catalog.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::Catalog;
use crate::domain::errors::CatalogError;
use crate::domain::repositories::CatalogRepository;
use crate::domain::value_objects::Group;

/// Use case for selecting (launching) a program
pub struct SelectProgramUseCase<R>
where
    R: CatalogRepository,
{
    repository: Arc<R>,
}

impl<R> SelectProgramUseCase<R>
where
    R: CatalogRepository,
{
    /// Create a new select use case
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Select by title, returning the new frequency score.
    ///
    /// A failed save leaves the updated scores in memory.
    pub fn execute(&self, catalog: &mut Catalog, title: &str) -> Result<f64, CatalogError> {
        let frequency = catalog
            .normalize(title)
            .ok_or_else(|| CatalogError::NotFound(title.to_string()))?;
        debug!("Selected '{}' (frequency {:.2})", title, frequency);

        let records: Vec<_> = catalog.records().cloned().collect();
        self.repository.save(&records).map_err(|e| {
            warn!("Failed to save catalog after selecting '{}': {}", title, e);
            e
        })?;

        Ok(frequency)
    }

    /// Select the record at `index` in a group's last sorted order
    pub fn execute_at(
        &self,
        catalog: &mut Catalog,
        group: &Group,
        index: usize,
    ) -> Result<f64, CatalogError> {
        let title = catalog
            .get_record(group, index)
            .map(|r| r.title.clone())
            .ok_or_else(|| CatalogError::NotFound(format!("{} #{}", group, index)))?;
        self.execute(catalog, &title)
    }
}
