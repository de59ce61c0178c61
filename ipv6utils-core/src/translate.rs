//! RFC 6052 IPv4-embedded IPv6 addresses (NAT64/DNS64)
//!
//! Only the `/96` layout is handled: the IPv4 address occupies the last 32
//! bits. The prefix is taken as given; it is not checked against known
//! NAT64 prefixes.

use crate::codec::{parse_address, parse_ipv4};
use crate::constants::{IPV4_EMBED_OFFSET, IPV4_LEN};
use crate::error::AddrError;
use crate::types::Address128;
use alloc::format;
use core::net::Ipv4Addr;

/// Embed `ipv4` into the low 32 bits of `prefix`
pub fn synthesize(ipv4: Ipv4Addr, prefix: &Address128) -> Address128 {
    let mut octets = prefix.octets();
    octets[IPV4_EMBED_OFFSET..].copy_from_slice(&ipv4.octets());
    Address128::new(octets)
}

/// The IPv4 address held in the low 32 bits of `addr`
pub fn extract_ipv4(addr: &Address128) -> Result<Ipv4Addr, AddrError> {
    let octets = addr.octets();
    let embedded: [u8; IPV4_LEN] = octets[IPV4_EMBED_OFFSET..].try_into().map_err(|_| {
        AddrError::InvalidAddress(format!("no IPv4 address embedded in {addr}"))
    })?;
    Ok(Ipv4Addr::from(embedded))
}

/// Synthesize an IPv6 address from textual IPv4 and prefix
pub fn ipv4_to_synthesized(ipv4: &str, prefix: &str) -> Result<Address128, AddrError> {
    let ipv4 = parse_ipv4(ipv4)?;
    let prefix = parse_address(prefix)?;
    Ok(synthesize(ipv4, &prefix))
}

/// Extract the IPv4 address from a textual synthesized address
pub fn synthesized_to_ipv4(addr: &str) -> Result<Ipv4Addr, AddrError> {
    extract_ipv4(&parse_address(addr)?)
}
