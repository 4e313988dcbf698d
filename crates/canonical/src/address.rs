//! The full record of one canonicalization.
//!
//! [`canonicalize`](crate::canonicalize) only returns the canonical text.
//! Callers that want to see how it was derived (the normalized groups, the
//! chosen zero run) use [`canonicalize_address`](crate::canonicalize_address)
//! and get a [`CanonicalAddress`].
//!
//! # Examples
//!
//! ```rust
//! use canonical::{canonicalize_address, CanonicalizeConfig, ZeroRun};
//!
//! let cfg = CanonicalizeConfig::default();
//! let addr = canonicalize_address("1111:2222:0000:0000:0000:0000:7777:8888", &cfg).unwrap();
//!
//! assert_eq!(addr.canonical, "1111:2222::7777:8888");
//! assert_eq!(addr.compression.run(), Some(ZeroRun { start: 2, end: 6 }));
//! assert_eq!(addr.segments[6], 0x7777);
//! ```

use std::fmt;
use std::net::Ipv6Addr;

use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedGroup;
use crate::validate::GROUP_COUNT;
use crate::zero_run::CompressionChoice;

/// A canonicalized IPv6 address together with its intermediate forms.
///
/// ```text
/// CanonicalAddress
/// ├── original: String                 # input exactly as given
/// ├── segments: [u16; 8]               # numeric group values
/// ├── groups: [NormalizedGroup; 8]     # leading zeros suppressed
/// ├── compression: CompressionChoice   # run rendered as "::", if any
/// └── canonical: String                # final text
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalAddress {
    pub original: String,
    pub segments: [u16; GROUP_COUNT],
    pub groups: [NormalizedGroup; GROUP_COUNT],
    pub compression: CompressionChoice,
    pub canonical: String,
}

impl CanonicalAddress {
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// The same address as the standard library type.
    pub fn to_ipv6_addr(&self) -> Ipv6Addr {
        let [a, b, c, d, e, f, g, h] = self.segments;
        Ipv6Addr::new(a, b, c, d, e, f, g, h)
    }

    /// True when the input was already in canonical form.
    pub fn is_unchanged(&self) -> bool {
        self.original == self.canonical
    }
}

impl fmt::Display for CanonicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl From<CanonicalAddress> for String {
    fn from(value: CanonicalAddress) -> Self {
        value.canonical
    }
}
