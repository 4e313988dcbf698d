//! Configuration types for the address canonicalization pipeline.
//!
//! This module defines [`CanonicalizeConfig`], which controls the two
//! optional knobs of the pipeline. The defaults reproduce the RFC 5952
//! style canonical form exactly; callers only reach for the other settings
//! when they need a legacy rendering.
//!
//! # Examples
//!
//! ## Default Configuration
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert!(config.lowercase);
//! assert!(config.compress_zero_runs);
//! ```
//!
//! ## Leading-Zero Suppression Only
//!
//! ```rust
//! use canonical::{canonicalize_with_config, CanonicalizeConfig};
//!
//! let config = CanonicalizeConfig {
//!     compress_zero_runs: false,
//!     ..Default::default()
//! };
//! let out = canonicalize_with_config("2001:0db8:0000:0000:0000:0000:0002:0001", &config).unwrap();
//! assert_eq!(out, "2001:db8:0:0:0:0:2:1");
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the canonical address pipeline.
///
/// `CanonicalizeConfig` is cheap to copy and serializable so it can be
/// embedded in file-based configuration:
///
/// ```json
/// {
///   "lowercase": true,
///   "compress_zero_runs": true
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CanonicalizeConfig {
    /// If true, hex digits are lowercased after leading zeros are stripped.
    ///
    /// RFC 5952 section 4.3 requires lowercase. Disabling this keeps the
    /// digit case of the input, which only matters for inputs that use
    /// `A`-`F`.
    ///
    /// ```text
    /// "0ABC" -> "abc"   (lowercase: true)
    /// "0ABC" -> "ABC"   (lowercase: false)
    /// ```
    ///
    /// # Default
    ///
    /// `true`
    pub lowercase: bool,

    /// If true, the longest run of two or more zero groups is replaced
    /// by `::`.
    ///
    /// When disabled every group is still rendered, only with leading
    /// zeros suppressed. This is the "preferred form" of RFC 4291
    /// section 2.2, useful for column-aligned listings.
    ///
    /// # Default
    ///
    /// `true`
    pub compress_zero_runs: bool,
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            compress_zero_runs: true,
        }
    }
}
