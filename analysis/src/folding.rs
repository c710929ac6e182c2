//! Section-folding analysis for rendered man-page text.
//!
//! A rendered page has a fixed frame: the title banner on line 0, a blank
//! separator on line 1, and a trailing footer block assumed to occupy the
//! last four lines. Everything between is body text partitioned by section
//! headings, and each heading-delimited run becomes one fold region.

use std::sync::LazyLock;

use man_nav_core::FoldRegion;
use regex::Regex;

use crate::error::AnalysisError;

/// Character shape of a rendered section heading.
///
/// Headings start in column 0 and are set entirely in uppercase, with a
/// small set of punctuation tolerated for unconventional headings such as
/// quoted compound names in auto-generated manuals. Unicode uppercase is
/// accepted so non-English manuals classify correctly.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[\p{Lu}"_.:'][\p{Lu}"_.:' ,-]*$"#).expect("static regex must compile")
});

/// Returns `true` when `line` is classified as a section heading.
pub fn is_heading_line(line: &str) -> bool {
    HEADING_RE.is_match(line)
}

/// Partitions a rendered page into heading-delimited fold regions.
///
/// The scan starts at line 3 (the title occupies line 0, a blank separator
/// line 1, and a first heading is assumed to start no earlier than line 2)
/// and stops at the footer boundary, a fixed `total - 4` heuristic that
/// matches how `man` renders its trailing block. Each heading closes the
/// region above it; the final region runs to the footer boundary.
///
/// Fails with [`AnalysisError::InvalidPageStructure`] when the page is too
/// short to carry the frame or contains no heading-classified line; callers
/// surface that as "folding unavailable", never as a crash.
pub fn fold_regions(text: &str) -> Result<Vec<FoldRegion>, AnalysisError> {
    let lines: Vec<&str> = text.lines().collect();

    let footer_line = match lines.len().checked_sub(4) {
        Some(footer) if footer > 2 => footer,
        _ => {
            return Err(AnalysisError::InvalidPageStructure(format!(
                "footer boundary precedes the first foldable line ({} lines total)",
                lines.len()
            )));
        }
    };

    let mut regions = Vec::new();
    let mut fold_start = 2usize;
    for (index, line) in lines.iter().enumerate().take(footer_line).skip(3) {
        if is_heading_line(line) {
            regions.push(FoldRegion {
                start_line: fold_start,
                end_line: index - 1,
            });
            fold_start = index;
        }
    }

    if regions.is_empty() {
        return Err(AnalysisError::InvalidPageStructure(
            "no section headings found".to_string(),
        ));
    }

    regions.push(FoldRegion {
        start_line: fold_start,
        end_line: footer_line,
    });
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a page of `total` lines with headings at the given indices.
    fn synthetic_page(total: usize, headings: &[usize]) -> String {
        (0..total)
            .map(|index| {
                if headings.contains(&index) {
                    "SECTION HEADING".to_string()
                } else {
                    format!("       body text {index}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn classifies_conventional_headings() {
        assert!(is_heading_line("NAME"));
        assert!(is_heading_line("SEE ALSO"));
        assert!(is_heading_line("EXIT STATUS"));
    }

    #[test]
    fn classifies_unconventional_headings() {
        assert!(is_heading_line("\"COMPOUND NAME\""));
        assert!(is_heading_line("DON'T PANIC"));
        assert!(is_heading_line("FLAGS, OPTIONS"));
        assert!(is_heading_line("NON-STANDARD USAGE"));
        assert!(is_heading_line(".SECTION:"));
        assert!(is_heading_line("ÜBERSICHT"));
    }

    #[test]
    fn rejects_body_lines() {
        assert!(!is_heading_line(""));
        assert!(!is_heading_line("   indented body text"));
        assert!(!is_heading_line("Mixed Case Line"));
        assert!(!is_heading_line("NAME(1)"));
        assert!(!is_heading_line(" SEE ALSO"));
    }

    #[test]
    fn partitions_page_with_two_headings() {
        let total = 16;
        let page = synthetic_page(total, &[3, 7]);
        let regions = fold_regions(&page).unwrap();
        assert_eq!(
            regions,
            vec![
                FoldRegion {
                    start_line: 2,
                    end_line: 2
                },
                FoldRegion {
                    start_line: 3,
                    end_line: 6
                },
                FoldRegion {
                    start_line: 7,
                    end_line: total - 4
                },
            ]
        );
    }

    #[test]
    fn regions_are_contiguous_and_non_overlapping() {
        let page = synthetic_page(40, &[4, 9, 17, 25]);
        let regions = fold_regions(&page).unwrap();
        assert_eq!(regions[0].start_line, 2);
        assert_eq!(regions.last().unwrap().end_line, 36);
        for pair in regions.windows(2) {
            assert_eq!(pair[1].start_line, pair[0].end_line + 1);
        }
        for region in &regions {
            assert!(region.start_line <= region.end_line);
        }
    }

    #[test]
    fn adjacent_headings_produce_single_line_regions() {
        let page = synthetic_page(14, &[4, 5]);
        let regions = fold_regions(&page).unwrap();
        assert_eq!(
            regions[1],
            FoldRegion {
                start_line: 4,
                end_line: 4
            }
        );
    }

    #[test]
    fn page_without_headings_is_invalid() {
        let page = synthetic_page(20, &[]);
        assert_eq!(
            fold_regions(&page).unwrap_err(),
            AnalysisError::InvalidPageStructure("no section headings found".to_string())
        );
    }

    #[test]
    fn truncated_page_is_invalid() {
        let page = synthetic_page(5, &[3]);
        assert!(matches!(
            fold_regions(&page),
            Err(AnalysisError::InvalidPageStructure(_))
        ));
    }

    #[test]
    fn headings_in_the_footer_block_are_ignored() {
        // A heading-shaped line inside the last four lines must not open a
        // region past the footer boundary.
        let mut page = synthetic_page(16, &[3]);
        page = page.replace("       body text 13", "FOOTER SHAPED LINE");
        let regions = fold_regions(&page).unwrap();
        assert_eq!(regions.last().unwrap().end_line, 12);
        assert_eq!(regions.len(), 2);
    }

    #[test]
    fn rerunning_on_identical_input_is_identical() {
        let page = synthetic_page(20, &[3, 8]);
        assert_eq!(fold_regions(&page).unwrap(), fold_regions(&page).unwrap());
    }
}
