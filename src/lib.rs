//! Appshelf - in-memory catalog of installed programs
//!
//! Programs discovered across storefronts are kept in per-platform groups and
//! derived views (All, Favourites, New, Hidden, NotInstalled, SearchResults).
//! The catalog reconciles fresh scans without losing user metadata, sorts
//! groups by install state, favourites, launch frequency and title, and runs a
//! tiered fuzzy search.
//!
//! # Layers
//! - **domain**: the catalog, its records and the pure sort/search/reconcile
//!   services
//! - **application**: refresh, search and select use cases
//! - **adapters**: in-memory repository and static scan source
//! - **shared**: configuration and logging

pub mod adapters;
pub mod application;
pub mod domain;
pub mod shared;

pub use application::{
    RefreshCatalogUseCase, RefreshError, RefreshReport, ScanFailure, SearchProgramsUseCase,
    SelectProgramUseCase,
};
pub use domain::entities::{Catalog, Platform, Record, ScannedProgram};
pub use domain::errors::CatalogError;
pub use domain::services::{MatchResult, MatchTier, ReconcileOptions, ReconcileReport, SearchOutcome};
pub use domain::value_objects::{Group, SearchQuery, SortSpec, ViewKind};
pub use shared::{CatalogConfig, ConfigError};
