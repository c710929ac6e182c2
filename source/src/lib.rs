//! Subprocess-backed manual page source.
//!
//! [`ManualSource`] is the seam between the analyzers and the external
//! manual renderer: given a page name and section (or an apropos query) it
//! returns rendered plain text. [`ManRunner`] implements it over the `man`
//! binary, with pager hygiene, a probe timeout, and output normalization so
//! downstream spans address exactly the text returned here.
//!
//! # Example
//!
//! ```no_run
//! use man_nav_source::{ManRunner, ManualSource};
//!
//! let runner = ManRunner::default();
//! let page = runner.fetch_page("ls", "1")?;
//! println!("{} lines rendered", page.lines().count());
//! # Ok::<(), man_nav_source::SourceError>(())
//! ```

mod error;
mod normalize;
mod runner;

pub use error::SourceError;
pub use normalize::normalize_rendered;
pub use runner::{ManRunner, ManualSource};
