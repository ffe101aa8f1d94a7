//! Progress reporters for the reading pipeline

pub mod reporter;
