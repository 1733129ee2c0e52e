//! Interface Adapters Layer
//!
//! Implementations of the domain's collaborator interfaces.
//! It contains:
//! - **Gateways**: Repository and scan source implementations
//!
//! # Clean Architecture Rules
//! - Depends on the domain layer only
//! - Platform scanners and file-backed stores plug in here

pub mod gateways;

pub use gateways::*;
