//! Nefnir CLI library
//!
//! This library provides the command-line batch driver for the Nefnir
//! lemmatizer: it feeds (form, tag) pairs from tagged input lines to
//! the core and writes the lemmatized lines back out.

pub mod error;
pub mod input;
pub mod process;

pub use error::{CliError, CliResult};
