//! Domain Entities - Core business objects
//!
//! Entities are objects with a distinct identity that persists over time.
//! A record's identity is its title; the catalog is the aggregate that owns
//! every record and the indexes over them.

pub mod catalog;
pub mod record;

pub use catalog::{Catalog, InvariantViolation};
pub use record::{Platform, Record, ScannedProgram};
