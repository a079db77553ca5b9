//! Error types for portfolio-term
//!
//! These never reach the user through the interpreter: `process` always
//! answers with a `Response`. They cover startup and the side-effect backends.

use thiserror::Error;

/// Result type alias for portfolio-term
pub type Result<T> = std::result::Result<T, TerminalError>;

/// Main error type for portfolio-term
#[derive(Error, Debug)]
pub enum TerminalError {
    /// IO-related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two catalog entries share an id
    #[error("Duplicate {kind} id: {id}")]
    DuplicateEntity { kind: String, id: String },

    /// An id no typed input can match: input is trimmed and lower-cased
    #[error("{kind} id {id:?} can never be opened: ids must be lowercase, non-empty and without surrounding spaces")]
    UnreachableEntityId { kind: String, id: String },

    /// A side-effect backend could not carry out its request
    #[error("{action} failed: {reason}")]
    Effect { action: String, reason: String },
}

impl TerminalError {
    /// Build an `Effect` error
    pub fn effect(action: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Effect {
            action: action.into(),
            reason: reason.to_string(),
        }
    }
}
