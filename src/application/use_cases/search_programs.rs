//! SearchProgramsUseCase - Search the catalog
//!
//! Builds a query from the configured defaults, runs it and publishes the hits
//! as the SearchResults view.

use tracing::info;

use crate::domain::entities::Catalog;
use crate::domain::services::SearchOutcome;
use crate::domain::value_objects::SearchQuery;
use crate::shared::config::CatalogConfig;

/// Use case for searching programs
pub struct SearchProgramsUseCase {
    config: CatalogConfig,
}

impl SearchProgramsUseCase {
    /// Create a new search use case
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// The query `text` would run as
    pub fn query(&self, text: &str) -> SearchQuery {
        self.config.search_query(text)
    }

    /// Search without touching the SearchResults view
    pub fn preview(&self, catalog: &Catalog, text: &str) -> SearchOutcome {
        catalog.search(&self.query(text))
    }

    /// Search and commit the results view
    pub fn execute(&self, catalog: &mut Catalog, text: &str) -> SearchOutcome {
        let outcome = self.preview(catalog, text);
        catalog.commit_search(&outcome);
        info!("Search '{}' matched {} programs", text, outcome.len());
        outcome
    }
}

impl Default for SearchProgramsUseCase {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}
