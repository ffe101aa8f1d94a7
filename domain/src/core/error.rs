//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The heuristics themselves never fail; these only cover parsing of
/// user-supplied names for domain enums (CLI flags, config values).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown valence: {0}. Valid: green, neutral, red")]
    UnknownValence(String),

    #[error("Unknown output format: {0}. Valid: text, json")]
    UnknownOutputFormat(String),
}

impl DomainError {
    /// The raw value that failed to parse
    pub fn value(&self) -> &str {
        match self {
            DomainError::UnknownValence(v)
            | DomainError::UnknownOutputFormat(v) => v,
        }
    }
}
