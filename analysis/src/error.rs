//! Error types for page-structure analysis.

use thiserror::Error;

/// Errors from analyzing rendered page text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The page does not have the heading/footer shape folding relies on.
    ///
    /// Recoverable: callers disable folding for this page only.
    #[error("invalid page structure: {0}")]
    InvalidPageStructure(String),
}
