//! Domain Repository Interfaces
//!
//! These are trait definitions only - no implementations.
//! Implementations belong in the adapters/gateways layer.

pub mod catalog_repository;
pub mod scan_source;

pub use catalog_repository::{CatalogRepository, NullCatalogRepository};
pub use scan_source::{NullScanSource, ScanSource};
