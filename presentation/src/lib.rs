//! Presentation layer for chatlens
//!
//! This crate contains CLI definitions, output formatters
//! and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, formatter_for};
pub use output::json::JsonFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
