//! Domain Layer - Pure catalog logic
//!
//! This layer contains:
//! - **Entities**: Records and the catalog that indexes them
//! - **Value Objects**: Sort specs, views, article lists, search queries
//! - **Repository Interfaces**: Persistence and scanner boundaries (no implementations)
//! - **Domain Services**: Sorting, searching, reconciliation, frequency scoring
//! - **Domain Errors**: Error types for catalog operations
//!
//! Nothing here performs I/O.

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use errors::CatalogError;
pub use value_objects::*;
