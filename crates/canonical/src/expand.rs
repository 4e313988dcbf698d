//! Expansion back to eight groups.
//!
//! The inverse of canonicalization: accepts either a fully expanded address
//! or one with a single `::` standing for one or more zero groups, and
//! produces all eight groups. Feeding the expanded text back through
//! [`canonicalize`](crate::canonicalize) reproduces the canonical form.
//!
//! ```rust
//! use canonical::{canonicalize, expand};
//!
//! let full = expand("2001:db8::1").unwrap();
//! assert_eq!(full, "2001:0db8:0000:0000:0000:0000:0000:0001");
//! assert_eq!(canonicalize(&full).unwrap(), "2001:db8::1");
//! ```

use crate::error::{MalformedReason, ValidationError};
use crate::validate::{parse_group, validate, GROUP_COUNT};

/// Parses a full or `::`-abbreviated address into its eight group values.
pub fn parse_segments(text: &str) -> Result<[u16; GROUP_COUNT], ValidationError> {
    let malformed = |reason| ValidationError::malformed(text, reason);

    let mut halves = text.split("::");
    let head = halves.next().unwrap_or_default();
    let Some(tail) = halves.next() else {
        return validate(text).map(|groups| groups.segments());
    };
    if halves.next().is_some() {
        return Err(malformed(MalformedReason::MultipleCompressions));
    }

    let head = parse_half(head, 0).map_err(malformed)?;
    let tail = parse_half(tail, head.len()).map_err(malformed)?;

    // "::" has to stand for at least one group.
    let explicit = head.len() + tail.len();
    if explicit >= GROUP_COUNT {
        return Err(malformed(MalformedReason::WrongGroupCount(explicit)));
    }

    let mut segments = [0u16; GROUP_COUNT];
    segments[..head.len()].copy_from_slice(&head);
    segments[GROUP_COUNT - tail.len()..].copy_from_slice(&tail);
    Ok(segments)
}

/// Expands an address to eight zero-padded lowercase groups.
pub fn expand(text: &str) -> Result<String, ValidationError> {
    let segments = parse_segments(text)?;
    let mut out = String::with_capacity(GROUP_COUNT * 5 - 1);
    for (i, value) in segments.iter().enumerate() {
        if i > 0 {
            out.push(':');
        }
        out.push_str(&format!("{value:04x}"));
    }
    Ok(out)
}

/// Parses the groups on one side of a `::`. `offset` keeps reported
/// indices relative to the whole listing.
fn parse_half(half: &str, offset: usize) -> Result<Vec<u16>, MalformedReason> {
    if half.is_empty() {
        return Ok(Vec::new());
    }
    half.split(':')
        .enumerate()
        .map(|(i, field)| parse_group(offset + i, field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_compressed_forms() {
        assert_eq!(
            expand("::").unwrap(),
            "0000:0000:0000:0000:0000:0000:0000:0000"
        );
        assert_eq!(
            expand("::1").unwrap(),
            "0000:0000:0000:0000:0000:0000:0000:0001"
        );
        assert_eq!(
            expand("1111:2222:0:0:5555::").unwrap(),
            "1111:2222:0000:0000:5555:0000:0000:0000"
        );
        assert_eq!(
            expand("::3333:4444:5555:6666:7777:8888").unwrap(),
            "0000:0000:3333:4444:5555:6666:7777:8888"
        );
    }

    #[test]
    fn expands_full_form_and_lowercases() {
        assert_eq!(
            expand("1:2:3:4:5:6:7:ABC").unwrap(),
            "0001:0002:0003:0004:0005:0006:0007:0abc"
        );
    }

    #[test]
    fn single_group_compression_is_accepted() {
        assert_eq!(
            parse_segments("1:2:3::5:6:7:8").unwrap(),
            [1, 2, 3, 0, 5, 6, 7, 8]
        );
    }

    #[test]
    fn rejects_second_marker() {
        let err = parse_segments("1::2::3").unwrap_err();
        assert_eq!(err.reason(), MalformedReason::MultipleCompressions);
    }

    #[test]
    fn rejects_marker_with_eight_explicit_groups() {
        let err = parse_segments("1:2:3:4::5:6:7:8").unwrap_err();
        assert_eq!(err.reason(), MalformedReason::WrongGroupCount(8));
    }

    #[test]
    fn rejects_triple_colon() {
        let err = parse_segments(":::1").unwrap_err();
        assert_eq!(err.reason(), MalformedReason::EmptyGroup { index: 0 });
    }

    #[test]
    fn reports_index_across_marker() {
        let err = parse_segments("1:2::zz").unwrap_err();
        assert_eq!(
            err.reason(),
            MalformedReason::NonHexDigit { index: 2, ch: 'z' }
        );
    }

    #[test]
    fn stray_single_colon_is_rejected() {
        let err = parse_segments(":1:2:3:4:5:6:7").unwrap_err();
        assert_eq!(err.reason(), MalformedReason::EmptyGroup { index: 0 });
    }
}
