use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validate::{GroupSequence, GROUP_COUNT};

/// One group with leading zeros suppressed.
///
/// Always non-empty: an all-zero group normalizes to `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedGroup(String);

impl NormalizedGroup {
    /// Lowercase hex rendering of `value` without padding.
    pub fn from_value(value: u16) -> Self {
        NormalizedGroup(format!("{value:x}"))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }
}

impl AsRef<str> for NormalizedGroup {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NormalizedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes every group, lowercasing the result.
pub fn normalize(groups: &GroupSequence<'_>) -> [NormalizedGroup; GROUP_COUNT] {
    normalize_with(groups, true)
}

/// Normalizes every group independently, preserving order.
pub fn normalize_with(groups: &GroupSequence<'_>, lowercase: bool) -> [NormalizedGroup; GROUP_COUNT] {
    let fields = groups.fields();
    std::array::from_fn(|i| normalize_group(fields[i], lowercase))
}

/// Strips leading `0`s from a single group while keeping at least one
/// character.
pub fn normalize_group(field: &str, lowercase: bool) -> NormalizedGroup {
    let stripped = field.trim_start_matches('0');
    let kept = if stripped.is_empty() {
        // Only zeros (or nothing) were present.
        "0"
    } else {
        stripped
    };
    if lowercase {
        NormalizedGroup(kept.to_ascii_lowercase())
    } else {
        NormalizedGroup(kept.to_string())
    }
}
