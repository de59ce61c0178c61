//! Error types for address operations

use alloc::string::String;

/// Errors returned by the address algorithms
///
/// All variants are local validation failures. None of them is worth
/// retrying: every operation is a pure function of its input.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddrError {
    /// Nothing to parse
    #[cfg_attr(feature = "std", error("empty input"))]
    EmptyInput,

    /// Input is not a usable address of the expected family
    #[cfg_attr(feature = "std", error("invalid address: {0}"))]
    InvalidAddress(String),

    /// Prefix length is not an integer in 0..=128
    #[cfg_attr(feature = "std", error("invalid prefix length: {0}"))]
    InvalidPrefixLength(String),

    /// Target prefix length does not subdivide the base prefix
    #[cfg_attr(
        feature = "std",
        error("new prefix length /{target} must be larger than the current prefix length /{current}")
    )]
    PrefixTooSmall {
        /// Prefix length of the base block.
        current: u8,
        /// Requested prefix length.
        target: u8,
    },

    /// MAC address is not six colon-separated hex octets
    #[cfg_attr(feature = "std", error("invalid MAC address format: {0}"))]
    InvalidMacFormat(String),

    /// Interface identifier lacks the FF:FE marker
    #[cfg_attr(feature = "std", error("not a valid EUI-64 address (missing FFFE)"))]
    NotEui64,
}
