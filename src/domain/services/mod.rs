//! Domain Services - Operations over many records
//!
//! Sorting, searching, reconciliation and frequency scoring all work across
//! the catalog rather than on a single record.

pub mod frequency;
pub mod normalize;
pub mod reconciler;
pub mod search_engine;
pub mod sort_engine;

pub use frequency::FrequencyModel;
pub use reconciler::{PruneScope, ReconcileOptions, ReconcileReport, Reconciler};
pub use search_engine::{MatchResult, MatchTier, SearchEngine, SearchOutcome};
pub use sort_engine::SortEngine;
