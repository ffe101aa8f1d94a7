//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave.

pub mod reading_config;

pub use reading_config::{DEFAULT_VISIBLE_EVIDENCE, ReadingConfig};
