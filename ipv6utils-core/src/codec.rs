//! Parsing of textual addresses and prefix lengths

use crate::constants::MAX_PREFIX_LEN;
use crate::error::AddrError;
use crate::types::{Address128, Prefix};
use alloc::format;
use alloc::string::ToString;
use core::net::{Ipv4Addr, Ipv6Addr};

/// Parse `<addr>` or `<addr>/<len>`
///
/// The prefix length is `None` when no `/` is present; `/0` yields
/// `Some(0)`. The address must be IPv6 in any of its textual forms,
/// including a trailing dotted quad such as `::ffff:192.168.1.1`.
pub fn parse_with_prefix(input: &str) -> Result<(Address128, Option<u8>), AddrError> {
    if input.is_empty() {
        return Err(AddrError::EmptyInput);
    }

    let (addr, prefix_len) = match input.rfind('/') {
        Some(idx) => (&input[..idx], Some(parse_prefix_len(&input[idx + 1..])?)),
        None => (input, None),
    };

    Ok((parse_address(addr)?, prefix_len))
}

/// Parse a bare IPv6 address (no prefix suffix)
pub fn parse_address(input: &str) -> Result<Address128, AddrError> {
    if input.is_empty() {
        return Err(AddrError::EmptyInput);
    }

    if !input.contains(':') {
        return Err(AddrError::InvalidAddress(format!("not an IPv6 address: {input}")));
    }

    input
        .parse::<Ipv6Addr>()
        .map(Address128::from)
        .map_err(|_| AddrError::InvalidAddress(input.to_string()))
}

/// Parse a CIDR block; unlike [`parse_with_prefix`] the length is mandatory
///
/// Host bits are kept as given. Use [`Prefix::network`] to clear them.
pub fn parse_cidr(input: &str) -> Result<Prefix, AddrError> {
    match parse_with_prefix(input)? {
        (address, Some(len)) => Ok(Prefix { address, len }),
        (_, None) => Err(AddrError::InvalidPrefixLength(format!(
            "missing prefix length in {input}"
        ))),
    }
}

/// Parse a decimal prefix length in 0..=128
pub fn parse_prefix_len(input: &str) -> Result<u8, AddrError> {
    let value: u32 = input
        .parse()
        .map_err(|_| AddrError::InvalidPrefixLength(input.to_string()))?;

    if value > u32::from(MAX_PREFIX_LEN) {
        return Err(AddrError::InvalidPrefixLength(format!(
            "prefix length must be between 0 and {MAX_PREFIX_LEN}, got {value}"
        )));
    }

    Ok(value as u8)
}

/// Parse a dotted-quad IPv4 address
pub fn parse_ipv4(input: &str) -> Result<Ipv4Addr, AddrError> {
    if input.is_empty() {
        return Err(AddrError::EmptyInput);
    }

    input
        .parse::<Ipv4Addr>()
        .map_err(|_| AddrError::InvalidAddress(format!("not an IPv4 address: {input}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_prefix() {
        let (addr, len) = parse_with_prefix("2001:db8::1").unwrap();
        assert_eq!(addr, Address128::from_segments([0x2001, 0xdb8, 0, 0, 0, 0, 0, 1]));
        assert_eq!(len, None);
    }

    #[test]
    fn test_parse_with_prefix() {
        let (addr, len) = parse_with_prefix("2001:db8::/48").unwrap();
        assert_eq!(addr, Address128::from_segments([0x2001, 0xdb8, 0, 0, 0, 0, 0, 0]));
        assert_eq!(len, Some(48));

        let (_, zero) = parse_with_prefix("::/0").unwrap();
        assert_eq!(zero, Some(0));
    }

    #[test]
    fn test_parse_expanded_and_embedded_ipv4() {
        let expanded = parse_address("2001:0db8:0000:0000:0000:0000:0000:0001").unwrap();
        assert_eq!(expanded, parse_address("2001:db8::1").unwrap());

        let mapped = parse_address("::ffff:192.168.1.1").unwrap();
        assert_eq!(
            mapped.octets(),
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 192, 168, 1, 1]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_with_prefix(""), Err(AddrError::EmptyInput));
        assert!(matches!(
            parse_with_prefix("2001:db8::/129"),
            Err(AddrError::InvalidPrefixLength(_))
        ));
        assert!(matches!(
            parse_with_prefix("2001:db8::/-1"),
            Err(AddrError::InvalidPrefixLength(_))
        ));
        assert!(matches!(
            parse_with_prefix("2001:db8::/abc"),
            Err(AddrError::InvalidPrefixLength(_))
        ));
        assert!(matches!(
            parse_with_prefix("192.168.1.1"),
            Err(AddrError::InvalidAddress(_))
        ));
        assert!(matches!(
            parse_with_prefix("2001:db8::g"),
            Err(AddrError::InvalidAddress(_))
        ));
        assert!(matches!(
            parse_with_prefix("1:2:3:4:5:6:7:8:9"),
            Err(AddrError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_parse_cidr_requires_length() {
        let prefix = parse_cidr("64:ff9b::/96").unwrap();
        assert_eq!(prefix.len, 96);
        assert!(matches!(
            parse_cidr("64:ff9b::"),
            Err(AddrError::InvalidPrefixLength(_))
        ));
    }

    #[test]
    fn test_parse_ipv4() {
        assert_eq!(parse_ipv4("192.0.2.33").unwrap(), Ipv4Addr::new(192, 0, 2, 33));
        assert!(matches!(parse_ipv4("2001:db8::1"), Err(AddrError::InvalidAddress(_))));
        assert!(matches!(parse_ipv4("256.1.1.1"), Err(AddrError::InvalidAddress(_))));
    }
}
