//! Shared text-scanning helpers.
//!
//! Spans handed to consumers are addressed in zero-based **character**
//! coordinates, while the regex engine reports byte offsets; these helpers
//! do the conversion so multi-byte lines keep correct columns.

/// Converts a byte offset inside `line` to a character column.
pub(crate) fn char_column(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count()
}

/// Character length of a matched slice.
pub(crate) fn char_length(text: &str) -> usize {
    text.chars().count()
}
