//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod interpret_analysis;
pub mod prepare_analysis;
pub mod run_reading;
