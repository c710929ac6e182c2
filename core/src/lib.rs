//! Core types and entry parsing for man page navigation.
//!
//! This crate defines the foundational types shared by the analyzers and the
//! renderer glue:
//!
//! - [`ManEntry`] — a manual page identified by name and section.
//! - [`TextSpan`] — a one-line character run inside rendered page text.
//! - [`FoldRegion`] — an inclusive line range for one collapsible section.
//!
//! It also implements the two entry-parsing operations that share a single
//! splitting rule:
//!
//! - [`parse_entry_line`] — one line of `man -k` (apropos) output.
//! - [`parse_address`] — a `man:<name> (<section>)` address string.
//!
//! # Example
//!
//! ```
//! use man_nav_core::{parse_address, parse_entry_line};
//!
//! let entry = parse_entry_line("git-annotate (1) - annotate file lines").unwrap();
//! assert_eq!(entry.name, "git-annotate");
//! assert_eq!(entry.section, "1");
//!
//! // Addresses round-trip through the same splitting rule.
//! assert_eq!(parse_address(&entry.address()).unwrap(), entry);
//! ```

mod entry;
mod error;
mod types;

pub use entry::{ADDRESS_SCHEME, parse_address, parse_entry_line, parse_listing};
pub use error::EntryError;
pub use types::{FoldRegion, ManEntry, TextSpan};
