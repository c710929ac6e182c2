//! Error types for entry and address parsing.

use thiserror::Error;

/// Errors from parsing apropos lines and `man:` addresses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    /// The line lacks a parseable `name (section)` structure.
    #[error("malformed entry line: {0:?}")]
    MalformedEntry(String),
}
