//! Structure recovery for rendered man-page text.
//!
//! The input here is post-formatting plain text with no markup: headings are
//! distinguishable only by their character content, and cross-references
//! only by a narrow lexical pattern. Two independent, read-only scans
//! recover the structure an editor needs:
//!
//! - [`cross_references`] — every `name(section)` reference with its exact
//!   line/column span.
//! - [`fold_regions`] — a heading-delimited partition of the page body,
//!   suitable for code folding.
//!
//! Both scans are pure and idempotent: they borrow the text, allocate their
//! own output, and hold no state between calls.
//!
//! # Example
//!
//! ```
//! use man_nav_analysis::cross_references;
//!
//! let line = "See git-annotate(1) and ls(1) for details";
//! let refs: Vec<_> = cross_references(line).collect();
//! assert_eq!(refs.len(), 2);
//! assert_eq!(refs[0].entry.name, "git-annotate");
//! assert_eq!(refs[0].span.start_column, 4);
//! ```

mod error;
mod folding;
mod util;
mod xref;

pub use error::AnalysisError;
pub use folding::{fold_regions, is_heading_line};
pub use xref::{CrossReference, cross_references};
