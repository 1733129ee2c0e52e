//! Application Use Cases - Single-purpose catalog operations

pub mod refresh_catalog;
pub mod search_programs;
pub mod select_program;

pub use refresh_catalog::{RefreshCatalogUseCase, RefreshError, RefreshReport, ScanFailure};
pub use search_programs::SearchProgramsUseCase;
pub use select_program::SelectProgramUseCase;
