//! Reverse-lookup (`ip6.arpa`) names

use crate::codec::parse_address;
use crate::constants::{is_nibble_aligned, ARPA_SUFFIX, MAX_PREFIX_LEN, NIBBLE_BITS, NIBBLE_COUNT};
use crate::error::AddrError;
use crate::types::Address128;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::warn;

/// Build the reverse-lookup name of `addr` relative to a zone of `prefix_len` bits
///
/// With a zone context of 0 the fully qualified name ending in
/// `.ip6.arpa.` is returned. Otherwise only the host-part labels below the
/// zone are returned (no suffix), ready to be used as an owner name inside
/// that zone's file; `/128` leaves nothing and yields an empty string.
///
/// A zone that is not nibble aligned is truncated to the enclosing nibble
/// and logged as a warning.
pub fn reverse_dns(addr: &Address128, prefix_len: i32) -> Result<String, AddrError> {
    let prefix_len = u8::try_from(prefix_len)
        .ok()
        .filter(|len| *len <= MAX_PREFIX_LEN)
        .ok_or_else(|| AddrError::InvalidPrefixLength(format!("{prefix_len}")))?;

    if !is_nibble_aligned(prefix_len) {
        #[cfg(feature = "logging")]
        warn!("Prefix length /{} is not on a nibble boundary", prefix_len);
    }

    let reversed: Vec<String> = addr.nibbles().chars().rev().map(String::from).collect();

    if prefix_len == 0 {
        return Ok(format!("{}.{}", reversed.join("."), ARPA_SUFFIX));
    }

    let keep = NIBBLE_COUNT - usize::from(prefix_len / NIBBLE_BITS);
    Ok(reversed[..keep].join("."))
}

/// [`reverse_dns`] on a textual address
pub fn reverse_dns_str(addr: &str, prefix_len: i32) -> Result<String, AddrError> {
    reverse_dns(&parse_address(addr)?, prefix_len)
}
