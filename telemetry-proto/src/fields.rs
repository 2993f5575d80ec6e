//! Delimiter-based field extraction.
//!
//! A telemetry line is a flat sequence of fields split by a single
//! separator byte. Extraction is positional and total: any combination of
//! line, separator and index produces a defined result.

/// Extract the `index`-th separator-delimited field of `line` (0-based).
///
/// The separator and the end of the line both act as field boundaries, so
/// content after the last separator counts as the final field even without
/// a trailing separator. A line with fewer than `index + 1` fields yields
/// the empty slice rather than an error.
///
/// Single linear scan per call; calling it repeatedly on the same line
/// redoes the scan.
///
/// # Example
///
/// ```
/// use telemetry_proto::field;
///
/// assert_eq!(field(b"2.53;0;1", b';', 0), b"2.53");
/// assert_eq!(field(b"2.53;0;1", b';', 2), b"1");
/// assert_eq!(field(b"2.53;0;1", b';', 3), b"");
/// ```
#[inline]
#[must_use]
pub fn field(line: &[u8], separator: u8, index: usize) -> &[u8] {
    line.split(|&b| b == separator).nth(index).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use super::*;

    #[test]
    fn test_fields_in_order() {
        let line = b"2.53;0;1";
        assert_eq!(field(line, b';', 0), b"2.53");
        assert_eq!(field(line, b';', 1), b"0");
        assert_eq!(field(line, b';', 2), b"1");
    }

    #[test]
    fn test_index_past_last_field_is_empty() {
        let line = b"2.53;0;1";
        for index in 3..10 {
            assert_eq!(field(line, b';', index), b"");
        }
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(field(b"", b';', 0), b"");
        assert_eq!(field(b"", b';', 1), b"");
        assert_eq!(field(b"", b';', 7), b"");
    }

    #[test]
    fn test_no_separator_present() {
        assert_eq!(field(b"abc", b';', 0), b"abc");
        assert_eq!(field(b"abc", b';', 1), b"");
    }

    #[test]
    fn test_trailing_separator_yields_empty_final_field() {
        assert_eq!(field(b"1;2;", b';', 2), b"");
    }

    #[test]
    fn test_adjacent_separators_yield_empty_fields() {
        let line = b";;";
        assert_eq!(field(line, b';', 0), b"");
        assert_eq!(field(line, b';', 1), b"");
        assert_eq!(field(line, b';', 2), b"");
        assert_eq!(field(line, b';', 3), b"");
    }

    #[test]
    fn test_single_character_fields() {
        let line = b"a;b;c";
        assert_eq!(field(line, b';', 1), b"b");
        assert_eq!(field(line, b';', 2), b"c");
    }

    #[test]
    fn test_reconstruction() {
        // Extracting fields 0.. in order and re-joining them with the
        // separator reproduces the original line.
        let line = b"12.5;0;1;extra;;tail";
        let expected_count = line.iter().filter(|&&b| b == b';').count() + 1;

        let mut joined: Vec<u8> = Vec::new();
        for index in 0..expected_count {
            if index > 0 {
                joined.push(b';');
            }
            joined.extend_from_slice(field(line, b';', index));
        }
        assert_eq!(joined, line);
    }

    #[test]
    fn test_idempotent() {
        let line = b"2.53;0;1";
        assert_eq!(field(line, b';', 1), field(line, b';', 1));
    }

    #[test]
    fn test_alternate_separator() {
        let line = b"a,b,c";
        assert_eq!(field(line, b',', 2), b"c");
        // The configured separator is the only boundary.
        assert_eq!(field(line, b';', 0), b"a,b,c");
    }
}
