//! Modified EUI-64 interface identifiers (RFC 4291 appendix A)
//!
//! A 48-bit MAC becomes a 64-bit interface identifier by inserting `ff:fe`
//! between its third and fourth octet and flipping the universal/local bit.
//! SLAAC hosts without privacy extensions append that identifier to the
//! advertised prefix, which makes the MAC recoverable from the address.

use crate::codec::parse_address;
use crate::constants::{
    ADDRESS_LEN, EUI64_MARKER, INTERFACE_ID_OFFSET, LINK_LOCAL_PREFIX, MAC_LEN,
    UNIVERSAL_LOCAL_BIT,
};
use crate::error::AddrError;
use crate::types::{Address128, MacAddress};
use alloc::format;

/// `fe80::` followed by the modified EUI-64 identifier of `mac`
pub fn link_local_from_mac(mac: &MacAddress) -> Address128 {
    let [a, b, c, d, e, f] = mac.octets();
    let mut octets = [0u8; ADDRESS_LEN];
    octets[..2].copy_from_slice(&LINK_LOCAL_PREFIX);
    octets[INTERFACE_ID_OFFSET..].copy_from_slice(&[
        a ^ UNIVERSAL_LOCAL_BIT,
        b,
        c,
        EUI64_MARKER[0],
        EUI64_MARKER[1],
        d,
        e,
        f,
    ]);
    Address128::new(octets)
}

/// Recover the MAC from the interface identifier of any address
///
/// Fails with [`AddrError::NotEui64`] unless the identifier carries the
/// `ff:fe` marker.
pub fn mac_from_interface_id(addr: &Address128) -> Result<MacAddress, AddrError> {
    let octets = addr.octets();
    let iid = &octets[INTERFACE_ID_OFFSET..];
    if iid[3..5] != EUI64_MARKER {
        return Err(AddrError::NotEui64);
    }

    let mut mac = [0u8; MAC_LEN];
    mac[..3].copy_from_slice(&iid[..3]);
    mac[3..].copy_from_slice(&iid[5..]);
    mac[0] ^= UNIVERSAL_LOCAL_BIT;
    Ok(MacAddress::new(mac))
}

/// Whether `addr` starts with the `fe80` link-local group
pub fn is_eui64_link_local(addr: &Address128) -> bool {
    addr.octets()[..2] == LINK_LOCAL_PREFIX
}

/// Convert a textual MAC into its EUI-64 link-local address
pub fn mac_to_link_local(mac: &str) -> Result<Address128, AddrError> {
    let mac: MacAddress = mac.parse()?;
    Ok(link_local_from_mac(&mac))
}

/// Recover the MAC from a textual `fe80` link-local address
pub fn link_local_to_mac(addr: &str) -> Result<MacAddress, AddrError> {
    let parsed = parse_address(addr)?;
    if !is_eui64_link_local(&parsed) {
        return Err(AddrError::InvalidAddress(format!("not a link-local address: {addr}")));
    }
    mac_from_interface_id(&parsed)
}

/// Recover the MAC from any textual SLAAC address, link-local or global
pub fn decode_mac_from_slaac(addr: &str) -> Result<MacAddress, AddrError> {
    mac_from_interface_id(&parse_address(addr)?)
}
