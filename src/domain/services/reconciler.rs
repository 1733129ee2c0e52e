//! Reconciler - merges a fresh scan into the catalog
//!
//! New titles are added as `is_new`; titles the scan no longer reports are
//! pruned, except user-curated `Custom` records. Records present on both sides
//! are not touched, so favourites, hidden flags, aliases and frequency survive
//! rescans.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::domain::entities::{Catalog, Platform, ScannedProgram};

/// Which platforms a prune pass may remove records from
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PruneScope {
    /// Every non-custom platform
    #[default]
    AllPlatforms,
    /// Only the platforms a scanner actually covered
    Platforms(BTreeSet<Platform>),
}

impl PruneScope {
    pub fn covers(&self, platform: &Platform) -> bool {
        match self {
            PruneScope::AllPlatforms => true,
            PruneScope::Platforms(set) => set.contains(platform),
        }
    }
}

/// Caller decisions for a reconcile pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Prune even when the scan found nothing. Off by default: an empty scan
    /// usually means discovery failed, not that everything was uninstalled.
    pub prune_on_empty_scan: bool,
    pub scope: PruneScope,
}

impl ReconcileOptions {
    /// Builder: restrict pruning to `platforms`
    pub fn scoped_to<I>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = Platform>,
    {
        self.scope = PruneScope::Platforms(platforms.into_iter().collect());
        self
    }

    /// Builder: prune on an empty scan
    pub fn with_prune_on_empty_scan(mut self, prune: bool) -> Self {
        self.prune_on_empty_scan = prune;
        self
    }
}

/// Counts from one reconcile pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub added: usize,
    pub removed: usize,
    /// Candidates rejected at ingestion (no title or platform)
    pub rejected: usize,
    /// Candidates dropped because an earlier candidate had the same title
    pub collisions: usize,
    /// The remove pass did not run because the scan was empty
    pub prune_skipped: bool,
}

/// Scan reconciliation service
#[derive(Clone, Debug, Default)]
pub struct Reconciler {
    options: ReconcileOptions,
}

impl Reconciler {
    pub fn new(options: ReconcileOptions) -> Self {
        Self { options }
    }

    /// Merge `candidates` into `catalog`: add the new, prune the vanished
    pub fn reconcile<I>(&self, catalog: &mut Catalog, candidates: I) -> ReconcileReport
    where
        I: IntoIterator<Item = ScannedProgram>,
    {
        let mut report = ReconcileReport::default();
        let mut scanned = BTreeSet::new();
        let mut to_add = Vec::new();

        for candidate in candidates {
            let record = match candidate.into_record() {
                Ok(record) => record,
                Err(err) => {
                    debug!("Rejected scan candidate: {}", err);
                    report.rejected += 1;
                    continue;
                }
            };
            if !scanned.insert(record.title.clone()) {
                debug!("Duplicate title '{}' in scan, keeping first", record.title);
                report.collisions += 1;
                continue;
            }
            if !catalog.contains(&record.title) {
                to_add.push(record);
            }
        }

        let to_remove: Vec<String> = if scanned.is_empty() && !self.options.prune_on_empty_scan {
            warn!("Scan returned no programs; skipping prune pass");
            report.prune_skipped = true;
            Vec::new()
        } else {
            catalog
                .records()
                .filter(|r| {
                    !r.platform.is_user_curated()
                        && self.options.scope.covers(&r.platform)
                        && !scanned.contains(&r.title)
                })
                .map(|r| r.title.clone())
                .collect()
        };

        for record in to_add {
            match catalog.add_record(record) {
                Ok(()) => report.added += 1,
                Err(err) => {
                    debug!("{}", err);
                    report.collisions += 1;
                }
            }
        }
        for title in to_remove {
            if catalog.remove_record(&title).is_some() {
                report.removed += 1;
            }
        }

        info!(
            "Reconciled scan: {} added, {} removed, {} rejected, {} collisions",
            report.added, report.removed, report.rejected, report.collisions
        );
        report
    }
}
