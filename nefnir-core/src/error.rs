//! Construction-time error types
//!
//! Lemmatization itself never fails: every runtime condition (unknown
//! tag, missing rule, empty rewrite result) falls back to a best-effort
//! lemma. Errors only occur while loading the rule table or tag map.

use thiserror::Error;

/// Errors raised while loading the rule table or tag map
#[derive(Error, Debug)]
pub enum LexiconError {
    /// I/O error while reading a table file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed table JSON, including rewrite pairs of the wrong shape
    #[error("malformed table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for table loading operations
pub type Result<T> = std::result::Result<T, LexiconError>;
