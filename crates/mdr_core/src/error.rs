//! Linter error types.

use thiserror::Error;

/// Errors that can occur around a lint run.
///
/// Lint findings are never errors; these only cover acquiring the document
/// bytes and loading configuration.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LinterError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
