//! RefreshCatalogUseCase - Rescan platforms and persist the result
//!
//! Runs every scan source, reconciles what they found into the catalog and
//! saves. A failing or empty source never prunes: only platforms whose source
//! succeeded with at least one candidate are eligible for removal.

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::entities::{Catalog, Platform};
use crate::domain::errors::CatalogError;
use crate::domain::repositories::{CatalogRepository, ScanSource};
use crate::domain::services::{ReconcileOptions, ReconcileReport};

/// A scan source that failed during a refresh
#[derive(Clone, Debug, PartialEq)]
pub struct ScanFailure {
    pub source: String,
    pub error: CatalogError,
}

/// Outcome of a refresh that reached the reconcile step
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RefreshReport {
    pub reconcile: ReconcileReport,
    /// Sources that failed; their platforms were not pruned
    pub scan_failures: Vec<ScanFailure>,
    /// Sources that succeeded but found nothing; their platforms were not
    /// pruned unless pruning on an empty scan was requested
    pub empty_sources: Vec<String>,
    /// Set when the catalog changed in memory but could not be persisted
    pub save_error: Option<CatalogError>,
}

impl RefreshReport {
    /// Every source succeeded and the save went through
    pub fn is_clean(&self) -> bool {
        self.scan_failures.is_empty() && self.save_error.is_none()
    }
}

/// Error for refresh operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RefreshError {
    #[error("Failed to load catalog: {0}")]
    Load(#[source] CatalogError),

    #[error("All {} scan sources failed", .0.len())]
    AllSourcesFailed(Vec<ScanFailure>),
}

/// Use case for loading and rescanning the catalog
pub struct RefreshCatalogUseCase<R>
where
    R: CatalogRepository,
{
    repository: Arc<R>,
    sources: Vec<Box<dyn ScanSource>>,
    prune_on_empty_scan: bool,
}

impl<R> RefreshCatalogUseCase<R>
where
    R: CatalogRepository,
{
    /// Create a refresh use case with no scan sources
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            sources: Vec::new(),
            prune_on_empty_scan: false,
        }
    }

    /// Builder: add a scan source
    pub fn with_source(mut self, source: Box<dyn ScanSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Builder: prune a source's platforms even when that source found nothing
    pub fn with_prune_on_empty_scan(mut self, prune: bool) -> Self {
        self.prune_on_empty_scan = prune;
        self
    }

    /// Restore persisted records into `catalog`, returning how many were
    /// skipped as duplicates
    pub fn load(&self, catalog: &mut Catalog) -> Result<usize, RefreshError> {
        let records = self.repository.load().map_err(RefreshError::Load)?;
        Ok(catalog.restore(records))
    }

    /// Scan, reconcile and save
    pub fn execute(&self, catalog: &mut Catalog) -> Result<RefreshReport, RefreshError> {
        let mut report = RefreshReport::default();
        if self.sources.is_empty() {
            return Ok(report);
        }

        // 1. Scan every source, keeping failures apart
        let mut candidates = Vec::new();
        let mut covered: BTreeSet<Platform> = BTreeSet::new();
        for source in &self.sources {
            match source.scan() {
                Ok(found) => {
                    info!("Source '{}' found {} programs", source.name(), found.len());
                    let empty = found.iter().all(|c| c.title.trim().is_empty());
                    if empty && !self.prune_on_empty_scan {
                        warn!(
                            "Source '{}' found nothing; keeping its platforms",
                            source.name()
                        );
                        report.empty_sources.push(source.name().to_string());
                    } else {
                        covered.extend(source.platforms());
                    }
                    candidates.extend(found);
                }
                Err(error) => {
                    warn!("Source '{}' failed: {}", source.name(), error);
                    report.scan_failures.push(ScanFailure {
                        source: source.name().to_string(),
                        error,
                    });
                }
            }
        }

        if report.scan_failures.len() == self.sources.len() {
            return Err(RefreshError::AllSourcesFailed(report.scan_failures));
        }

        // 2. Reconcile, pruning only what a non-empty successful source vouches for
        let options = ReconcileOptions::default()
            .scoped_to(covered)
            .with_prune_on_empty_scan(self.prune_on_empty_scan);
        report.reconcile = catalog.merge_scan(candidates, &options);

        // 3. Persist
        let records: Vec<_> = catalog.records().cloned().collect();
        if let Err(e) = self.repository.save(&records) {
            warn!("Failed to save catalog after refresh: {}", e);
            report.save_error = Some(e);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateways::{MemoryCatalogGateway, StaticScanGateway};
    use crate::domain::entities::{Record, ScannedProgram};
    use crate::domain::repositories::NullCatalogRepository;

    fn steam(titles: &[&str]) -> Box<dyn ScanSource> {
        Box::new(StaticScanGateway::new(
            "steam",
            Platform::Steam,
            titles
                .iter()
                .map(|t| ScannedProgram::new(*t, Platform::Steam))
                .collect(),
        ))
    }

    #[test]
    fn test_load_restores_records() {
        let repo = Arc::new(MemoryCatalogGateway::with_records(vec![
            Record::new("Doom", Platform::Steam).with_favourite(true),
            Record::new("Doom", Platform::Gog),
            Record::new("Quake", Platform::Gog),
        ]));
        let use_case = RefreshCatalogUseCase::new(repo);

        let mut catalog = Catalog::new();
        let skipped = use_case.load(&mut catalog).unwrap();

        assert_eq!(skipped, 1);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.record("Doom").unwrap().favourite);
    }

    #[test]
    fn test_refresh_adds_and_saves() {
        let repo = Arc::new(MemoryCatalogGateway::new());
        let use_case =
            RefreshCatalogUseCase::new(Arc::clone(&repo)).with_source(steam(&["Doom", "Quake"]));

        let mut catalog = Catalog::new();
        let report = use_case.execute(&mut catalog).unwrap();

        assert!(report.is_clean());
        assert_eq!(report.reconcile.added, 2);
        assert_eq!(repo.stored().len(), 2);
        assert_eq!(repo.save_count(), 1);
    }

    #[test]
    fn test_failed_source_does_not_prune_its_platform() {
        let mut catalog = Catalog::new();
        catalog.add_record(Record::new("Doom", Platform::Steam)).unwrap();
        catalog.add_record(Record::new("Quake", Platform::Gog)).unwrap();

        let use_case = RefreshCatalogUseCase::new(Arc::new(NullCatalogRepository))
            .with_source(steam(&["Portal"]))
            .with_source(Box::new(StaticScanGateway::failing(
                "gog",
                Platform::Gog,
                "database locked",
            )));

        let report = use_case.execute(&mut catalog).unwrap();

        assert_eq!(report.scan_failures.len(), 1);
        assert_eq!(report.scan_failures[0].source, "gog");
        assert_eq!(report.reconcile.added, 1);
        assert_eq!(report.reconcile.removed, 1);
        assert!(catalog.contains("Quake"));
        assert!(!catalog.contains("Doom"));
    }

    #[test]
    fn test_empty_source_keeps_its_platform() {
        let mut catalog = Catalog::new();
        catalog
            .add_record(Record::new("Doom", Platform::Steam).with_favourite(true))
            .unwrap();
        catalog.add_record(Record::new("Quake", Platform::Steam)).unwrap();
        catalog.add_record(Record::new("Braid", Platform::Gog)).unwrap();
        catalog.add_record(Record::new("Limbo", Platform::Gog)).unwrap();

        let gog = StaticScanGateway::new(
            "gog",
            Platform::Gog,
            vec![ScannedProgram::new("Braid", Platform::Gog)],
        );
        let use_case = RefreshCatalogUseCase::new(Arc::new(NullCatalogRepository))
            .with_source(steam(&[]))
            .with_source(Box::new(gog));

        let report = use_case.execute(&mut catalog).unwrap();

        assert_eq!(report.empty_sources, vec!["steam".to_string()]);
        assert_eq!(report.reconcile.removed, 1);
        assert!(catalog.contains("Doom"));
        assert!(catalog.record("Doom").unwrap().favourite);
        assert!(catalog.contains("Quake"));
        assert!(!catalog.contains("Limbo"));
    }

    #[test]
    fn test_empty_source_pruned_when_requested() {
        let mut catalog = Catalog::new();
        catalog.add_record(Record::new("Doom", Platform::Steam)).unwrap();
        catalog.add_record(Record::new("Braid", Platform::Gog)).unwrap();

        let gog = StaticScanGateway::new(
            "gog",
            Platform::Gog,
            vec![ScannedProgram::new("Braid", Platform::Gog)],
        );
        let use_case = RefreshCatalogUseCase::new(Arc::new(NullCatalogRepository))
            .with_source(steam(&[]))
            .with_source(Box::new(gog))
            .with_prune_on_empty_scan(true);

        let report = use_case.execute(&mut catalog).unwrap();

        assert!(report.empty_sources.is_empty());
        assert!(!catalog.contains("Doom"));
        assert!(catalog.contains("Braid"));
    }

    #[test]
    fn test_all_sources_failed() {
        let mut catalog = Catalog::new();
        catalog.add_record(Record::new("Doom", Platform::Steam)).unwrap();

        let repo = Arc::new(MemoryCatalogGateway::new());
        let use_case = RefreshCatalogUseCase::new(Arc::clone(&repo)).with_source(Box::new(
            StaticScanGateway::failing("steam", Platform::Steam, "offline"),
        ));

        let err = use_case.execute(&mut catalog).unwrap_err();
        assert!(matches!(err, RefreshError::AllSourcesFailed(ref f) if f.len() == 1));
        assert!(catalog.contains("Doom"));
        assert_eq!(repo.save_count(), 0);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let repo = Arc::new(MemoryCatalogGateway::new());
        repo.set_fail_saves(Some("read-only"));
        let use_case = RefreshCatalogUseCase::new(Arc::clone(&repo)).with_source(steam(&["Doom"]));

        let mut catalog = Catalog::new();
        let report = use_case.execute(&mut catalog).unwrap();

        assert_eq!(
            report.save_error,
            Some(CatalogError::Persistence("read-only".to_string()))
        );
        assert!(catalog.contains("Doom"));
        assert!(repo.stored().is_empty());
    }

    #[test]
    fn test_empty_scan_skips_prune() {
        let mut catalog = Catalog::new();
        catalog.add_record(Record::new("Doom", Platform::Steam)).unwrap();

        let use_case =
            RefreshCatalogUseCase::new(Arc::new(NullCatalogRepository)).with_source(steam(&[]));
        let report = use_case.execute(&mut catalog).unwrap();

        assert!(report.reconcile.prune_skipped);
        assert!(catalog.contains("Doom"));
    }

    #[test]
    fn test_no_sources_is_noop() {
        let repo = Arc::new(MemoryCatalogGateway::new());
        let use_case = RefreshCatalogUseCase::new(Arc::clone(&repo));

        let mut catalog = Catalog::new();
        let report = use_case.execute(&mut catalog).unwrap();

        assert_eq!(report, RefreshReport::default());
        assert_eq!(repo.save_count(), 0);
    }
}
