//! Port definitions (interfaces) for the application layer
//!
//! Ports define the contracts that adapters must implement.

pub mod analysis_gateway;
pub mod progress;
