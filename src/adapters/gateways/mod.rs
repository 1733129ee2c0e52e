//! Gateways - Repository implementations

pub mod memory_catalog_gateway;
pub mod static_scan_gateway;

pub use memory_catalog_gateway::MemoryCatalogGateway;
pub use static_scan_gateway::StaticScanGateway;
