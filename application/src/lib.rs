//! Application layer for chatlens
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_VISIBLE_EVIDENCE, ReadingConfig};
pub use ports::{
    analysis_gateway::{AnalysisGateway, GatewayError},
    progress::{NoProgress, ReadingProgressNotifier},
};
pub use use_cases::interpret_analysis::{InterpretAnalysisInput, InterpretAnalysisUseCase};
pub use use_cases::prepare_analysis::{
    PrepareAnalysisInput, PrepareAnalysisUseCase, PreparedAnalysis,
};
pub use use_cases::run_reading::{RunReadingError, RunReadingInput, RunReadingUseCase};
