//! One-shot report combining every rendering of an address

use crate::arpa::reverse_dns;
use crate::classify::classify;
use crate::codec::parse_with_prefix;
use crate::compress::address_variants;
use crate::error::AddrError;
use crate::format;
use crate::types::{Address128, ClassificationLabel};
use alloc::string::String;
use alloc::vec::Vec;
use serde::Serialize;

/// Everything known about a single address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressReport {
    /// The parsed address
    pub address: Address128,

    /// Prefix length given with the input, if any
    pub prefix_len: Option<u8>,

    /// Zero-padded form, with `/len` when a prefix was given
    pub expanded: String,

    /// RFC 5952 form, with `/len` when a prefix was given
    pub compressed: String,

    /// Compressed form, upper case
    pub uppercase: String,

    /// Compressed form in brackets
    pub url: String,

    /// Nibble-dotted form
    pub dotted: String,

    /// Binary groups
    pub binary: String,

    /// Fully qualified `ip6.arpa.` name
    pub reverse_dns: String,

    /// Special-purpose registry entry
    pub classification: ClassificationLabel,

    /// Every valid `::` abbreviation
    pub compression_variants: Vec<String>,
}

/// Parse `input` (`addr` or `addr/len`) and describe it
pub fn describe(input: &str) -> Result<AddressReport, AddrError> {
    let (address, prefix_len) = parse_with_prefix(input)?;
    describe_address(&address, prefix_len)
}

/// Describe an already parsed address
pub fn describe_address(
    address: &Address128,
    prefix_len: Option<u8>,
) -> Result<AddressReport, AddrError> {
    Ok(AddressReport {
        address: *address,
        prefix_len,
        expanded: format::with_suffix(&format::expanded(address), prefix_len),
        compressed: format::with_suffix(&format::compressed(address), prefix_len),
        uppercase: format::uppercase(address),
        url: format::url(address),
        dotted: format::dotted(address),
        binary: format::binary(address),
        reverse_dns: reverse_dns(address, 0)?,
        classification: classify(address),
        compression_variants: address_variants(address),
    })
}
