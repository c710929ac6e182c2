//! Data model for navigable man pages.
//!
//! All values here are transient: they are recomputed from the rendered page
//! text on every request and carry no identity beyond their fields.

use serde::{Deserialize, Serialize};

/// A manual page identified by name and section.
///
/// `name` is non-empty and contains no parenthesis; `section` is the exact
/// text that appeared between the first `(` and the following `)` on the
/// source line. Two entries with equal fields are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManEntry {
    pub name: String,
    pub section: String,
}

impl ManEntry {
    pub fn new(name: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            section: section.into(),
        }
    }
}

impl std::fmt::Display for ManEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.section)
    }
}

/// A contiguous run of characters on one line of rendered text.
///
/// `line` and `start_column` are zero-based; `start_column` and `length`
/// count **characters**, not bytes, so spans address the text the way an
/// editor does. Spans never cross a line boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub line: usize,
    pub start_column: usize,
    pub length: usize,
}

impl TextSpan {
    /// Column one past the final character of the span.
    pub fn end_column(&self) -> usize {
        self.start_column + self.length
    }
}

/// One collapsible section of a rendered page, as an inclusive line range.
///
/// The full region set for a page is ordered, non-overlapping, and
/// contiguous: each region starts on the line after its predecessor ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldRegion {
    pub start_line: usize,
    pub end_line: usize,
}

impl FoldRegion {
    /// Number of lines covered, counting both endpoints.
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}
