//! Infrastructure layer for chatlens
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod replay;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ENV_PREFIX, FileAnalysisConfig, FileConfig, FileEvidenceConfig,
    FileMetricsConfig, FileOutputConfig, FileSpeakersConfig,
};
pub use replay::ReplayAnalysisGateway;
