//! Rendered-output normalization.
//!
//! `man` output on real systems carries backspace overstrike for bold and
//! underline (`c\x08c`, `_\x08c`) and, routed through some pagers, ANSI
//! escape sequences. Both would corrupt character columns downstream, so
//! they are stripped before any analysis sees the text.
//!
//! Normalization must never re-wrap, trim, or drop lines: the analyzers
//! report spans against this exact text.

use std::sync::LazyLock;

use regex::Regex;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").expect("static regex must compile"));
static OVERSTRIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".\x08").expect("static regex must compile"));

/// Strips ANSI escapes and backspace overstrike, and normalizes line
/// endings to `\n`. Line structure is otherwise untouched.
pub fn normalize_rendered(raw: &str) -> String {
    let stripped = ANSI_RE.replace_all(raw, "");
    let mut cleaned = stripped.into_owned();
    // Nested overstrike (e.g. bold-underline `_\x08c\x08c`) needs repeated
    // passes until no pair remains.
    while OVERSTRIKE_RE.is_match(&cleaned) {
        cleaned = OVERSTRIKE_RE.replace_all(&cleaned, "").into_owned();
    }
    cleaned.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overstrike_bold_collapses_to_plain_text() {
        assert_eq!(normalize_rendered("b\x08bo\x08ol\x08ld\x08d"), "bold");
    }

    #[test]
    fn overstrike_underline_collapses_to_plain_text() {
        assert_eq!(normalize_rendered("_\x08n_\x08a_\x08m_\x08e"), "name");
    }

    #[test]
    fn nested_overstrike_needs_repeated_passes() {
        assert_eq!(normalize_rendered("_\x08b\x08b"), "b");
    }

    #[test]
    fn ansi_sequences_are_removed() {
        assert_eq!(normalize_rendered("\x1b[1mNAME\x1b[0m"), "NAME");
    }

    #[test]
    fn line_structure_is_untouched() {
        let raw = "NAME\r\n       ls - list\r\n";
        assert_eq!(normalize_rendered(raw), "NAME\n       ls - list\n");
    }

    #[test]
    fn plain_text_passes_through() {
        let raw = "SYNOPSIS\n       ls [OPTION]...\n";
        assert_eq!(normalize_rendered(raw), raw);
    }
}
