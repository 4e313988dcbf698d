//! Input validation.
//!
//! [`validate`] is the only entry into the pipeline. It accepts exactly
//! eight colon-separated groups of one to four hex digits, in either case,
//! and rejects everything else before any transformation runs. Abbreviated
//! input such as `2001:db8::1` is rejected here; see
//! [`parse_segments`](crate::parse_segments) for the lenient direction.

use crate::error::{MalformedReason, ValidationError};

/// Number of 16-bit groups in an IPv6 address.
pub const GROUP_COUNT: usize = 8;

/// Maximum number of hex digits in a single group.
pub const MAX_GROUP_DIGITS: usize = 4;

/// The eight validated groups of an address, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSequence<'a> {
    fields: [&'a str; GROUP_COUNT],
    values: [u16; GROUP_COUNT],
}

impl<'a> GroupSequence<'a> {
    /// Raw group text exactly as it appeared in the input.
    pub fn fields(&self) -> &[&'a str; GROUP_COUNT] {
        &self.fields
    }

    /// Numeric value of each group.
    pub fn segments(&self) -> [u16; GROUP_COUNT] {
        self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fields.iter().copied()
    }
}

/// Splits `raw` on `:` and checks every group.
///
/// Checks run in order: group count, then each group left to right for
/// emptiness, length, and characters. The first failure is reported.
pub fn validate(raw: &str) -> Result<GroupSequence<'_>, ValidationError> {
    let fields: Vec<&str> = raw.split(':').collect();
    let fields: [&str; GROUP_COUNT] = fields.try_into().map_err(|fields: Vec<&str>| {
        ValidationError::malformed(raw, MalformedReason::WrongGroupCount(fields.len()))
    })?;

    let mut values = [0u16; GROUP_COUNT];
    for (index, field) in fields.iter().enumerate() {
        values[index] =
            parse_group(index, field).map_err(|reason| ValidationError::malformed(raw, reason))?;
    }

    Ok(GroupSequence { fields, values })
}

/// Parses one group of 1-4 hex digits into its value.
pub(crate) fn parse_group(index: usize, field: &str) -> Result<u16, MalformedReason> {
    if field.is_empty() {
        return Err(MalformedReason::EmptyGroup { index });
    }
    let len = field.chars().count();
    if len > MAX_GROUP_DIGITS {
        return Err(MalformedReason::GroupTooLong { index, len });
    }

    let mut value: u16 = 0;
    for ch in field.chars() {
        let digit = ch
            .to_digit(16)
            .ok_or(MalformedReason::NonHexDigit { index, ch })?;
        value = (value << 4) | digit as u16;
    }
    Ok(value)
}
