//! Error types for LexRAG.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application: configuration, I/O, LLM transport, serialization and
//! the user-facing assistant failure.

use thiserror::Error;

/// User-facing message for any failure while consulting the assistant.
pub const ASSISTANT_UNAVAILABLE_MESSAGE: &str = "Failed to consult the legal archives.";

/// Unified error type for LexRAG.
///
/// All functions in the application return `Result<T, AppError>`.
/// We never panic; errors must be represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// LLM provider errors (transport, upstream status, malformed body)
    #[error("LLM error: {0}")]
    Llm(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The assistant could not produce an answer.
    ///
    /// The underlying cause is logged, never carried.
    #[error("Failed to consult the legal archives.")]
    AssistantUnavailable,

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
