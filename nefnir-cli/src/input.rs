//! Tagged-input reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a tagged input file as UTF-8 lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    Ok(content.lines().map(str::to_string).collect())
}

/// Split a line into its form and tag fields. Returns `None` unless
/// the separator occurs exactly once.
pub fn split_line<'a>(line: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    let mut fields = line.split(separator);
    let form = fields.next()?;
    let tag = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some((form, tag))
}

/// Decode backslash escapes in a separator argument, so that a shell
/// `-s '\t'` means a tab. Supports `\t`, `\n`, `\r`, `\0` and `\\`.
pub fn unescape_separator(separator: &str) -> Result<String> {
    let mut out = String::with_capacity(separator.len());
    let mut chars = separator.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            _ => return Err(CliError::InvalidSeparator(separator.to_string()).into()),
        }
    }

    Ok(out)
}
