use std::net::Ipv6Addr;

use crate::address::CanonicalAddress;
use crate::config::CanonicalizeConfig;
use crate::error::ValidationError;
use crate::normalize::{normalize_with, NormalizedGroup};
use crate::serialize::serialize;
use crate::validate::validate;
use crate::zero_run::{find_compression_run, CompressionChoice};

/// Main entry point. Returns the canonical text of a fully expanded
/// address using the default configuration.
pub fn canonicalize(address: &str) -> Result<String, ValidationError> {
    canonicalize_with_config(address, &CanonicalizeConfig::default())
}

/// Same as [`canonicalize`] with an explicit configuration.
pub fn canonicalize_with_config(
    address: &str,
    cfg: &CanonicalizeConfig,
) -> Result<String, ValidationError> {
    canonicalize_address(address, cfg).map(String::from)
}

/// Runs the whole pipeline and keeps every intermediate form.
///
/// Validation happens first and is all-or-nothing; nothing is normalized
/// for an input that fails it.
pub fn canonicalize_address(
    address: &str,
    cfg: &CanonicalizeConfig,
) -> Result<CanonicalAddress, ValidationError> {
    let sequence = validate(address)?;
    let groups = normalize_with(&sequence, cfg.lowercase);

    let compression = if cfg.compress_zero_runs {
        find_compression_run(&groups)
    } else {
        CompressionChoice::None
    };
    let canonical = serialize(&groups, compression);

    Ok(CanonicalAddress {
        original: address.to_string(),
        segments: sequence.segments(),
        groups,
        compression,
        canonical,
    })
}

/// Canonical text of a typed address. Infallible, since every
/// [`Ipv6Addr`] has exactly eight valid groups.
///
/// This agrees with the standard library's `Display` except for
/// IPv4-mapped addresses, which std renders with a dotted IPv4 tail.
pub fn canonicalize_ipv6(addr: &Ipv6Addr) -> String {
    let groups = addr.segments().map(NormalizedGroup::from_value);
    serialize(&groups, find_compression_run(&groups))
}
