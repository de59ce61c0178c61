use anyhow::{Context, Result};
use ipv6utils_core::{
    codec::parse_address,
    eui64::{decode_mac_from_slaac, is_eui64_link_local, link_local_to_mac, mac_to_link_local},
    Address128, MacAddress,
};
use std::fmt;

/// Result of the bidirectional link-local conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkLocalConversion {
    /// MAC input turned into its EUI-64 link-local address
    LinkLocal(Address128),
    /// `fe80` input turned back into a MAC
    Mac(MacAddress),
}

impl fmt::Display for LinkLocalConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkLocalConversion::LinkLocal(addr) => write!(f, "Link-local address: {}", addr),
            LinkLocalConversion::Mac(mac) => write!(f, "MAC from link-local: {}", mac),
        }
    }
}

/// Convert a MAC to its link-local address, or an `fe80` address to its MAC
pub fn local(input: &str) -> Result<LinkLocalConversion> {
    let is_link_local = parse_address(input)
        .map(|addr| is_eui64_link_local(&addr))
        .unwrap_or(false);

    if is_link_local {
        let mac = link_local_to_mac(input)
            .with_context(|| format!("Cannot recover MAC from {}", input))?;
        Ok(LinkLocalConversion::Mac(mac))
    } else {
        let addr = mac_to_link_local(input)
            .with_context(|| format!("Not a MAC or link-local address: {}", input))?;
        Ok(LinkLocalConversion::LinkLocal(addr))
    }
}

/// Recover the MAC behind a SLAAC address
pub fn slaac(input: &str) -> Result<MacAddress> {
    decode_mac_from_slaac(input).with_context(|| format!("Cannot decode MAC from {}", input))
}

pub fn execute_local(input: &str) -> Result<()> {
    println!("{}", local(input)?);
    Ok(())
}

pub fn execute_slaac(input: &str) -> Result<()> {
    println!("Decoded MAC address: {}", slaac(input)?);
    Ok(())
}
