//! Error types for vocab-core.

use crate::types::Language;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by dictionary store operations. All are recoverable: a
/// failed operation leaves the profile untouched and the message is meant
/// for inline display.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },

    #[error("a {source_language} / {target_language} dictionary already exists")]
    DuplicatePair {
        source_language: Language,
        target_language: Language,
    },

    #[error("invalid language pair: {source_language} -> {target_language}")]
    InvalidPair {
        source_language: Language,
        target_language: Language,
    },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },
}
