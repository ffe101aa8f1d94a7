//! Core domain concepts shared across all subdomains.
//!
//! - [`text::ConversationText`] : the raw pasted conversation, capped at the scan limit
//! - [`lenient`] : default-substituting readers for untrusted payload values
//! - [`error::DomainError`] : domain-level errors

pub mod error;
pub mod lenient;
pub mod text;
