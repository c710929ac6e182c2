//! Cross-reference detection in rendered man-page prose.

use std::sync::LazyLock;

use man_nav_core::{ManEntry, TextSpan};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::util;

/// Lexical shape of a cross-reference: a lowercase letter, one or more word
/// characters or hyphens, then a single-digit section in parentheses.
///
/// The pattern is deliberately narrow. Rendered prose is full of
/// parenthetical asides that are not references, and single-digit sections
/// cover the overwhelming majority of real manuals, so requiring exactly one
/// digit trades a little recall for much better precision.
static XREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z][\w-]+\(\d\)").expect("static regex must compile"));

/// One detected cross-reference: the target page plus the exact span of the
/// reference text, so a consumer can build both the clickable region and its
/// address from a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReference {
    pub entry: ManEntry,
    pub span: TextSpan,
}

/// Scans rendered page text for `name(section)` cross-references.
///
/// The scan is lazy and line-based: spans are emitted in line order and,
/// within a line, left to right. Spans never cross a line boundary, so a
/// reference broken across a line-wrap is invisible — an accepted limitation
/// of analyzing text after `man` has already wrapped it.
pub fn cross_references(text: &str) -> impl Iterator<Item = CrossReference> + '_ {
    text.lines().enumerate().flat_map(|(line_index, line)| {
        XREF_RE.find_iter(line).filter_map(move |found| {
            let (name, rest) = found.as_str().split_once('(')?;
            let (section, _) = rest.split_once(')')?;
            Some(CrossReference {
                entry: ManEntry::new(name, section),
                span: TextSpan {
                    line: line_index,
                    start_column: util::char_column(line, found.start()),
                    length: util::char_length(found.as_str()),
                },
            })
        })
    })
}
