//! Entry parsing for apropos lines and `man:` addresses.
//!
//! Both formats share one splitting rule: the text before the first `(` is
//! the page name (surrounding whitespace stripped) and the text between that
//! `(` and the following `)` is the section. Apropos output from `man -k`
//! looks like:
//!
//! ```text
//! git-annotate (1)     - annotate file lines with commit information
//! ```
//!
//! and addresses look like `man:git-annotate (1)`.

use crate::error::EntryError;
use crate::types::ManEntry;

/// Scheme prefix for page addresses.
pub const ADDRESS_SCHEME: &str = "man:";

impl ManEntry {
    /// Formats this entry as a `man:<name> (<section>)` address.
    ///
    /// [`parse_address`] inverts this losslessly for any entry whose name
    /// contains no parenthesis.
    pub fn address(&self) -> String {
        format!("{ADDRESS_SCHEME}{} ({})", self.name, self.section)
    }
}

/// Parses one line of apropos (`man -k`) output into a [`ManEntry`].
///
/// Fails with [`EntryError::MalformedEntry`] when the line has no `(`, no
/// closing `)` after it, or an empty name. Blank lines in a listing land in
/// the no-parenthesis case, so callers need no separate guard.
pub fn parse_entry_line(line: &str) -> Result<ManEntry, EntryError> {
    let malformed = || EntryError::MalformedEntry(line.to_string());

    let (head, tail) = line.split_once('(').ok_or_else(malformed)?;
    let (section, _) = tail.split_once(')').ok_or_else(malformed)?;

    let name = head.trim();
    if name.is_empty() {
        return Err(malformed());
    }

    Ok(ManEntry::new(name, section))
}

/// Parses a `man:<name> (<section>)` address into a [`ManEntry`].
pub fn parse_address(address: &str) -> Result<ManEntry, EntryError> {
    let rest = address
        .strip_prefix(ADDRESS_SCHEME)
        .ok_or_else(|| EntryError::MalformedEntry(address.to_string()))?;
    parse_entry_line(rest)
}

/// Parses an apropos listing, skipping lines that fail to parse.
///
/// Listing output routinely contains blank or otherwise malformed lines; one
/// bad line must never abort the listing, so failures are dropped rather
/// than propagated.
pub fn parse_listing<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<ManEntry> {
    lines
        .into_iter()
        .filter_map(|line| parse_entry_line(line).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_apropos_line_with_description() {
        let entry = parse_entry_line("foo-bar (3) some description").unwrap();
        assert_eq!(entry, ManEntry::new("foo-bar", "3"));
    }

    #[test]
    fn strips_whitespace_around_name() {
        let entry = parse_entry_line("  ls   (1) - list directory contents").unwrap();
        assert_eq!(entry, ManEntry::new("ls", "1"));
    }

    #[test]
    fn section_is_exact_text_between_parens() {
        let entry = parse_entry_line("openssl-req (1ssl) - certificate request tool").unwrap();
        assert_eq!(entry.section, "1ssl");
    }

    #[test]
    fn line_without_open_paren_is_malformed() {
        let err = parse_entry_line("no parenthesis here").unwrap_err();
        assert_eq!(
            err,
            EntryError::MalformedEntry("no parenthesis here".to_string())
        );
    }

    #[test]
    fn blank_line_is_malformed_not_a_panic() {
        assert!(parse_entry_line("").is_err());
    }

    #[test]
    fn unclosed_section_is_malformed() {
        assert!(parse_entry_line("ls (1 - truncated").is_err());
    }

    #[test]
    fn empty_name_is_malformed() {
        assert!(parse_entry_line("  (1) - nameless").is_err());
    }

    #[test]
    fn address_round_trips() {
        let entry = ManEntry::new("git-annotate", "1");
        assert_eq!(entry.address(), "man:git-annotate (1)");
        assert_eq!(parse_address(&entry.address()).unwrap(), entry);
    }

    #[test]
    fn address_without_scheme_is_malformed() {
        assert!(parse_address("ls (1)").is_err());
    }

    #[test]
    fn listing_skips_malformed_lines() {
        let listing = [
            "ls (1) - list directory contents",
            "",
            "garbage without parens",
            "tar (1) - an archiving utility",
        ];
        let entries = parse_listing(listing);
        assert_eq!(
            entries,
            vec![ManEntry::new("ls", "1"), ManEntry::new("tar", "1")]
        );
    }
}
