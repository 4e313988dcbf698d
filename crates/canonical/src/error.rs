//! Error types produced by the canonical crate.
//!
//! There is exactly one failure kind, [`ValidationError::MalformedAddress`].
//! It carries the offending input and a [`MalformedReason`] describing the
//! first problem found. The reason is diagnostic detail; callers that only
//! care about pass/fail can match on the variant alone.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{canonicalize, MalformedReason, ValidationError};
//!
//! let err = canonicalize("1111:2222:3333:4444:5555:6666:7777").unwrap_err();
//! assert!(matches!(
//!     err,
//!     ValidationError::MalformedAddress {
//!         reason: MalformedReason::WrongGroupCount(7),
//!         ..
//!     }
//! ));
//! assert_eq!(err.address(), "1111:2222:3333:4444:5555:6666:7777");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while validating an address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("malformed IPv6 address {address:?}: {reason}")]
    MalformedAddress {
        address: String,
        reason: MalformedReason,
    },
}

impl ValidationError {
    pub(crate) fn malformed(address: &str, reason: MalformedReason) -> Self {
        ValidationError::MalformedAddress {
            address: address.to_string(),
            reason,
        }
    }

    /// The input that was rejected.
    pub fn address(&self) -> &str {
        match self {
            ValidationError::MalformedAddress { address, .. } => address,
        }
    }

    /// Why the input was rejected.
    pub fn reason(&self) -> MalformedReason {
        match self {
            ValidationError::MalformedAddress { reason, .. } => *reason,
        }
    }
}

/// First problem found in a malformed address.
///
/// Group indices are zero-based positions in the colon-separated listing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedReason {
    #[error("expected 8 groups, found {0}")]
    WrongGroupCount(usize),
    #[error("group {index} is empty")]
    EmptyGroup { index: usize },
    #[error("group {index} has {len} characters, at most 4 allowed")]
    GroupTooLong { index: usize, len: usize },
    #[error("group {index} contains non-hex character {ch:?}")]
    NonHexDigit { index: usize, ch: char },
    #[error("more than one `::` marker")]
    MultipleCompressions,
}
