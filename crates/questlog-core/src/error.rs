//! Error types for the questlog library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible questlog operation.
///
/// Only the plan-fetch boundary and the intake checks can fail during normal
/// use. Store and engine operations are total.
#[derive(Error, Debug)]
pub enum QuestError {
    /// The external planner call failed or answered with a non-success status
    #[error("Plan fetch failed: {message}")]
    PlanFetch { message: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> QuestError {
        QuestError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl QuestError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a plan fetch error carrying a human-readable message.
    pub fn plan_fetch(message: impl Into<String>) -> Self {
        Self::PlanFetch {
            message: message.into(),
        }
    }

    /// Whether this error came from the external planner boundary.
    pub fn is_plan_fetch(&self) -> bool {
        matches!(self, Self::PlanFetch { .. })
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to QuestError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| QuestError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Extension trait mapping reqwest failures onto the plan fetch boundary.
pub trait FetchResultExt<T> {
    /// Map transport or decoding errors to [`QuestError::PlanFetch`].
    fn fetch_context(self, message: &str) -> Result<T>;
}

impl<T> FetchResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn fetch_context(self, message: &str) -> Result<T> {
        self.map_err(|e| QuestError::plan_fetch(format!("{message}: {e}")))
    }
}

/// Result type alias for questlog operations
pub type Result<T> = std::result::Result<T, QuestError>;
