//! Shared Utilities Module
//!
//! Configuration and logging used across layers.

pub mod config;
pub mod logging;

pub use config::{CatalogConfig, ConfigError, SearchSettings};
pub use logging::{default_log_path, init_logging, LoggingError};
