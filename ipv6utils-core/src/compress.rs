//! Enumeration of every valid `::` abbreviation of an address
//!
//! RFC 5952 picks one canonical form, but RFC 4291 accepts `::` over any
//! run of two or more zero groups. This module lists them all, which is
//! handy when matching addresses as written by other tools.

use crate::constants::GROUP_COUNT;
use crate::format::join_around_gap;
use crate::types::Address128;
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashSet;

#[cfg(feature = "logging")]
use tracing::debug;

/// Every textual variant that replaces a window of two or more consecutive
/// zero groups with `::`
///
/// Windows are visited by start group, then by end group, and each distinct
/// rendering is kept once in discovery order. No zero run of length two or
/// more yields an empty list.
pub fn compression_variants(groups: &[u16; GROUP_COUNT]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut variants = Vec::new();

    for start in 0..GROUP_COUNT {
        if groups[start] != 0 {
            continue;
        }
        for end in start + 2..=GROUP_COUNT {
            if groups[end - 1] != 0 {
                break;
            }
            let rendered = join_around_gap(groups, start, end);
            if seen.insert(rendered.clone()) {
                variants.push(rendered);
            }
        }
    }

    #[cfg(feature = "logging")]
    debug!("Found {} compression variants", variants.len());

    variants
}

/// [`compression_variants`] over the groups of `addr`
pub fn address_variants(addr: &Address128) -> Vec<String> {
    compression_variants(&addr.segments())
}
