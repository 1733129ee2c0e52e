//! Catalog - the in-memory record store
//!
//! Records are owned once, keyed by title. Platform groups and the derived
//! views (`All`, `Favourites`, `New`, `Hidden`, `NotInstalled`) are eagerly
//! maintained title sets; every mutation keeps them in step with the record
//! flags before returning.
//!
//! Index-based access (`get_record`, the toggles) addresses the order a group
//! was last sorted into. Adding records does not re-sort anything, so callers
//! re-sort after structural changes.
//!
//! The catalog does no internal locking. Mutation requires `&mut Catalog`;
//! hosts sharing one across threads must serialize access themselves.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::entities::record::{Platform, Record, ScannedProgram};
use crate::domain::errors::CatalogError;
use crate::domain::services::frequency::FrequencyModel;
use crate::domain::services::reconciler::{ReconcileOptions, ReconcileReport, Reconciler};
use crate::domain::services::search_engine::{SearchEngine, SearchOutcome};
use crate::domain::services::sort_engine::SortEngine;
use crate::domain::value_objects::{Articles, Group, SearchQuery, SortSpec, ViewKind};

/// A broken index found by [`Catalog::check_invariants`]
#[derive(Error, Debug, Clone, PartialEq)]
#[error("catalog invariant violated: {0}")]
pub struct InvariantViolation(pub String);

/// Whether a record belongs to a flag-derived view
fn belongs(kind: ViewKind, record: &Record) -> bool {
    match kind {
        ViewKind::All => true,
        ViewKind::Favourites => record.favourite,
        ViewKind::New => record.is_new,
        ViewKind::Hidden => record.hidden,
        ViewKind::NotInstalled => !record.installed,
        ViewKind::SearchResults => false,
    }
}

/// Which flag a toggle flips
#[derive(Clone, Copy, Debug)]
enum Flag {
    Favourite,
    Hidden,
    New,
}

impl Flag {
    fn view(self) -> ViewKind {
        match self {
            Flag::Favourite => ViewKind::Favourites,
            Flag::Hidden => ViewKind::Hidden,
            Flag::New => ViewKind::New,
        }
    }

    fn flip(self, record: &mut Record) -> bool {
        let flag = match self {
            Flag::Favourite => &mut record.favourite,
            Flag::Hidden => &mut record.hidden,
            Flag::New => &mut record.is_new,
        };
        *flag = !*flag;
        *flag
    }
}

/// The program catalog
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: BTreeMap<String, Record>,
    platforms: BTreeMap<Platform, BTreeSet<String>>,
    views: BTreeMap<ViewKind, BTreeSet<String>>,
    /// Committed search results, rank order
    search_results: Vec<String>,
    /// Last sorted order per group, with the spec that produced it
    orders: BTreeMap<Group, (SortSpec, Vec<String>)>,
    sort_engine: SortEngine,
    sort_spec: SortSpec,
    frequency: FrequencyModel,
}

impl Catalog {
    /// Create an empty catalog with default articles, ordering and scoring
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the article list used for title comparison
    pub fn with_articles(mut self, articles: Articles) -> Self {
        self.sort_engine = SortEngine::new(articles);
        self.orders.clear();
        self
    }

    /// Builder: set the default ordering
    pub fn with_sort_spec(mut self, spec: SortSpec) -> Self {
        self.sort_spec = spec;
        self
    }

    /// Builder: set the frequency model
    pub fn with_frequency_model(mut self, model: FrequencyModel) -> Self {
        self.frequency = model;
        self
    }

    pub fn articles(&self) -> &Articles {
        self.sort_engine.articles()
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort_spec
    }

    /// Change the default ordering; cached orders are kept until re-sorted
    pub fn set_sort_spec(&mut self, spec: SortSpec) {
        self.sort_spec = spec;
    }

    pub fn frequency_model(&self) -> &FrequencyModel {
        &self.frequency
    }

    /// Rebuild indexes from persisted records, keeping their flags.
    ///
    /// Returns the number of records skipped because their title was already
    /// present.
    pub fn restore<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = Record>,
    {
        let mut skipped = 0;
        for record in records {
            if let Err(err) = self.add_record(record) {
                debug!("Skipping persisted record: {}", err);
                skipped += 1;
            }
        }
        info!(
            "Restored {} records ({} duplicates skipped)",
            self.records.len(),
            skipped
        );
        skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.records.contains_key(title)
    }

    /// Look up a record by title
    pub fn record(&self, title: &str) -> Option<&Record> {
        self.records.get(title)
    }

    /// All records in title order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Platforms that currently have at least one record
    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.keys()
    }

    /// Insert a record into its platform group, `All`, and the flag views.
    ///
    /// A record whose title is already cataloged is not inserted and the
    /// existing record is left untouched. A negative or non-finite frequency
    /// is reset to zero.
    pub fn add_record(&mut self, mut record: Record) -> Result<(), CatalogError> {
        if let Some(existing) = self.records.get(&record.title) {
            return Err(CatalogError::DuplicateTitle {
                title: record.title,
                existing: existing.platform.clone(),
            });
        }
        if !record.frequency.is_finite() || record.frequency < 0.0 {
            debug!(
                "Resetting frequency {} of '{}' to 0",
                record.frequency, record.title
            );
            record.frequency = 0.0;
        }

        let title = record.title.clone();
        self.platforms
            .entry(record.platform.clone())
            .or_default()
            .insert(title.clone());
        for kind in ViewKind::DERIVED {
            if belongs(kind, &record) {
                self.views.entry(kind).or_default().insert(title.clone());
            }
        }
        debug!("Added '{}' to {}", title, record.platform);
        self.records.insert(title, record);

        debug_assert!(self.check_invariants().is_ok());
        Ok(())
    }

    /// Remove a record from every group, view, cached order and the search results
    pub fn remove_record(&mut self, title: &str) -> Option<Record> {
        let record = self.records.remove(title)?;

        if let Some(group) = self.platforms.get_mut(&record.platform) {
            group.remove(title);
            if group.is_empty() {
                self.platforms.remove(&record.platform);
                self.orders.remove(&Group::Platform(record.platform.clone()));
            }
        }
        for view in self.views.values_mut() {
            view.remove(title);
        }
        self.search_results.retain(|t| t != title);
        for (_, order) in self.orders.values_mut() {
            order.retain(|t| t != title);
        }
        debug!("Removed '{}' from {}", title, record.platform);

        debug_assert!(self.check_invariants().is_ok());
        Some(record)
    }

    /// Members of a view, title order (search results in rank order)
    pub fn view(&self, kind: ViewKind) -> Vec<&Record> {
        if kind == ViewKind::SearchResults {
            return self
                .search_results
                .iter()
                .filter_map(|t| self.records.get(t))
                .collect();
        }
        self.titles_in(kind)
            .filter_map(|t| self.records.get(t))
            .collect()
    }

    fn titles_in(&self, kind: ViewKind) -> impl Iterator<Item = &String> {
        self.views.get(&kind).into_iter().flatten()
    }

    /// Members of a group, unordered by contract
    pub fn members(&self, group: &Group) -> Vec<&Record> {
        match group {
            Group::Platform(platform) => self
                .platforms
                .get(platform)
                .into_iter()
                .flatten()
                .filter_map(|t| self.records.get(t))
                .collect(),
            Group::View(kind) => self.view(*kind),
        }
    }

    /// Group members sorted by `spec`. Pure; nothing is cached.
    pub fn sorted(&self, group: &Group, spec: &SortSpec) -> Vec<&Record> {
        self.sort_engine.sort(self.members(group), spec)
    }

    /// Sort a group and remember the order for index-based access
    pub fn sort_group(&mut self, group: &Group, spec: &SortSpec) -> &[String] {
        let order: Vec<String> = self
            .sorted(group, spec)
            .into_iter()
            .map(|r| r.title.clone())
            .collect();
        self.orders.insert(group.clone(), (*spec, order));
        self.orders
            .get(group)
            .map(|(_, order)| order.as_slice())
            .unwrap_or(&[])
    }

    /// The spec a group was last sorted with, if it was sorted at all
    pub fn last_sort_spec(&self, group: &Group) -> Option<SortSpec> {
        self.orders.get(group).map(|(spec, _)| *spec)
    }

    /// Decorated display titles of a group after sorting it by `spec`
    pub fn display_titles(&mut self, group: &Group, spec: &SortSpec) -> Vec<String> {
        let order = self.sort_group(group, spec).to_vec();
        order
            .iter()
            .filter_map(|t| self.records.get(t))
            .map(Record::display_title)
            .collect()
    }

    /// Title at `index` in the group's last sorted order.
    ///
    /// A group that was never sorted uses the default ordering (search results
    /// use their rank order).
    fn title_at(&self, group: &Group, index: usize) -> Option<String> {
        if let Some((_, order)) = self.orders.get(group) {
            return order.get(index).cloned();
        }
        if *group == Group::View(ViewKind::SearchResults) {
            return self.search_results.get(index).cloned();
        }
        self.sorted(group, &self.sort_spec)
            .get(index)
            .map(|r| r.title.clone())
    }

    /// Record at `index` within a group's ordering, `None` when out of range
    pub fn get_record(&self, group: &Group, index: usize) -> Option<&Record> {
        let title = self.title_at(group, index)?;
        self.records.get(&title)
    }

    /// Flip `favourite` and re-sort the favourites view. Returns the new value.
    pub fn toggle_favourite(&mut self, group: &Group, index: usize) -> Option<bool> {
        self.toggle(group, index, Flag::Favourite)
    }

    /// Flip `hidden` and re-sort the hidden view. Returns the new value.
    pub fn toggle_hidden(&mut self, group: &Group, index: usize) -> Option<bool> {
        self.toggle(group, index, Flag::Hidden)
    }

    /// Flip `is_new` and re-sort the new view. Returns the new value.
    pub fn toggle_new(&mut self, group: &Group, index: usize) -> Option<bool> {
        self.toggle(group, index, Flag::New)
    }

    fn toggle(&mut self, group: &Group, index: usize, flag: Flag) -> Option<bool> {
        let title = self.title_at(group, index)?;
        let record = self.records.get_mut(&title)?;
        let value = flag.flip(record);

        let view = self.views.entry(flag.view()).or_default();
        if value {
            view.insert(title.clone());
        } else {
            view.remove(&title);
        }
        debug!("{:?} on '{}' is now {}", flag, title, value);

        let affected = Group::View(flag.view());
        let spec = self.last_sort_spec(&affected).unwrap_or(self.sort_spec);
        self.sort_group(&affected, &spec);

        debug_assert!(self.check_invariants().is_ok());
        Some(value)
    }

    /// Decay every record and bump `selected`. `None` if it is not cataloged.
    pub fn normalize(&mut self, selected: &str) -> Option<f64> {
        let model = self.frequency;
        model.normalize(self.records.values_mut(), selected)
    }

    /// Search all records, scanned in the default ordering
    pub fn search(&self, query: &SearchQuery) -> SearchOutcome {
        let engine = SearchEngine::new(self.articles().clone())
            .with_ignore_article(self.sort_spec.ignore_article);
        let scan_order = self.sorted(&Group::View(ViewKind::All), &self.sort_spec);
        engine.search(scan_order, query)
    }

    /// Replace the search results view with an outcome's hits
    pub fn commit_search(&mut self, outcome: &SearchOutcome) {
        self.search_results = outcome
            .view()
            .into_iter()
            .filter(|t| self.records.contains_key(t))
            .collect();
        self.orders.remove(&Group::View(ViewKind::SearchResults));
        debug!(
            "Committed {} search results for '{}'",
            self.search_results.len(),
            outcome.query
        );
    }

    /// Reconcile a fresh scan into the catalog
    pub fn merge_scan<I>(&mut self, candidates: I, options: &ReconcileOptions) -> ReconcileReport
    where
        I: IntoIterator<Item = ScannedProgram>,
    {
        Reconciler::new(options.clone()).reconcile(self, candidates)
    }

    /// Verify that every index agrees with the record flags
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut grouped = BTreeSet::new();
        for (platform, titles) in &self.platforms {
            if titles.is_empty() {
                return Err(InvariantViolation(format!("empty group {}", platform)));
            }
            for title in titles {
                let record = self.records.get(title).ok_or_else(|| {
                    InvariantViolation(format!("'{}' in {} but not stored", title, platform))
                })?;
                if record.platform != *platform {
                    return Err(InvariantViolation(format!(
                        "'{}' grouped under {} but belongs to {}",
                        title, platform, record.platform
                    )));
                }
                if !grouped.insert(title.as_str()) {
                    return Err(InvariantViolation(format!("'{}' in two groups", title)));
                }
            }
        }

        for kind in ViewKind::DERIVED {
            let members: BTreeSet<&str> = self.titles_in(kind).map(String::as_str).collect();
            let expected: BTreeSet<&str> = self
                .records
                .values()
                .filter(|r| belongs(kind, r) && grouped.contains(r.title.as_str()))
                .map(|r| r.title.as_str())
                .collect();
            if members != expected {
                return Err(InvariantViolation(format!(
                    "{:?} view out of step with record flags",
                    kind
                )));
            }
        }
        if grouped.len() != self.records.len() {
            return Err(InvariantViolation("record outside every group".to_string()));
        }

        if let Some(title) = self.search_results.iter().find(|t| !self.records.contains_key(*t)) {
            return Err(InvariantViolation(format!(
                "search results reference removed '{}'",
                title
            )));
        }

        for (group, (_, order)) in &self.orders {
            let members: BTreeSet<&str> =
                self.members(group).iter().map(|r| r.title.as_str()).collect();
            let mut seen = BTreeSet::new();
            for title in order {
                if !members.contains(title.as_str()) || !seen.insert(title.as_str()) {
                    return Err(InvariantViolation(format!(
                        "stale '{}' in cached order of {}",
                        title, group
                    )));
                }
            }
        }
        Ok(())
    }
}
