//! # ipv6utils Core
//!
//! IPv6 address algorithms: subnet enumeration, RFC 6052 synthesis,
//! EUI-64/SLAAC MAC recovery, `ip6.arpa` names, textual renderings and
//! special-purpose classification.
//!
//! ## Modules
//!
//! - `constants`: Address sizes, well-known prefixes and bit masks
//! - `types`: Core value types (Address128, Prefix, MacAddress, SubnetBlock)
//! - `codec`: Parsing of addresses, CIDR blocks and prefix lengths
//! - `format`: Expanded, compressed, dotted and binary renderings
//! - `classify`: IANA special-purpose registry lookup
//! - `compress`: Every valid `::` abbreviation of an address
//! - `arpa`: Reverse-lookup names
//! - `eui64`: MAC to link-local and back
//! - `translate`: RFC 6052 IPv4-embedded addresses
//! - `subnet`: Subdivision of a CIDR block
//! - `describe`: All of the above for one address

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod arpa;
pub mod classify;
pub mod codec;
pub mod compress;
pub mod constants;
pub mod describe;
pub mod error;
pub mod eui64;
pub mod format;
pub mod subnet;
pub mod translate;
pub mod types;

// Re-export commonly used types
pub use error::AddrError;
pub use types::{
    Address128, ClassificationLabel, MacAddress, MulticastScope, Prefix, SubnetBlock, SubnetCount,
};

/// Result type alias for address operations
pub type Result<T> = core::result::Result<T, AddrError>;
