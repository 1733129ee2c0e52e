//! Application Layer - Use Cases
//!
//! Orchestrates the catalog with its collaborators: scan sources, the
//! persistence repository and configuration.
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer and shared configuration
//! - Collaborators are reached through domain repository traits

pub mod use_cases;

pub use use_cases::*;
