//! Canonical text form for IPv6 addresses.
//!
//! Takes a fully expanded address (eight colon-separated groups of one to
//! four hex digits) and produces its shortest valid representation, in the
//! style of RFC 5952.
//!
//! ## What we do
//!
//! - Validation: exactly eight groups, each 1-4 hex digits, either case
//! - Leading-zero suppression per group, lowercase output
//! - The longest run of two or more zero groups becomes `::`, leftmost on ties
//!
//! ## Pipeline
//!
//! ```text
//! raw text ──validate──▶ GroupSequence ──normalize──▶ [NormalizedGroup; 8]
//!          ──find_compression_run──▶ CompressionChoice ──serialize──▶ text
//! ```
//!
//! Every stage is a pure function. No state survives a call, so the same
//! input always gives the same output and calls can run on any number of
//! threads at once.
//!
//! ## Quick start
//!
//! ```rust
//! use canonical::canonicalize;
//!
//! assert_eq!(
//!     canonicalize("1111:2222:0000:0000:0000:0000:7777:8888").unwrap(),
//!     "1111:2222::7777:8888"
//! );
//! assert!(canonicalize("1111::8888").is_err());
//! ```

mod address;
mod config;
mod error;
mod expand;
mod normalize;
mod pipeline;
mod serialize;
mod validate;
mod zero_run;

pub use crate::address::CanonicalAddress;
pub use crate::config::CanonicalizeConfig;
pub use crate::error::{MalformedReason, ValidationError};
pub use crate::expand::{expand, parse_segments};
pub use crate::normalize::{normalize, normalize_group, normalize_with, NormalizedGroup};
pub use crate::pipeline::{
    canonicalize, canonicalize_address, canonicalize_ipv6, canonicalize_with_config,
};
pub use crate::serialize::serialize;
pub use crate::validate::{validate, GroupSequence, GROUP_COUNT, MAX_GROUP_DIGITS};
pub use crate::zero_run::{
    find_compression_run, zero_runs, CompressionChoice, ZeroRun, MIN_COMPRESSED_RUN,
};
