//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input or table file not found or inaccessible
    FileNotFound(String),
    /// Separator string with an unsupported escape sequence
    InvalidSeparator(String),
    /// Malformed rule table or tag map
    TableError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidSeparator(sep) => write!(f, "Invalid separator: {sep}"),
            CliError::TableError(msg) => write!(f, "Table error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
