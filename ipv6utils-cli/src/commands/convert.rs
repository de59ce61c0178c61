use anyhow::{Context, Result};
use ipv6utils_core::{
    codec::parse_ipv4,
    translate::{ipv4_to_synthesized, synthesized_to_ipv4},
    Address128,
};
use std::fmt;
use std::net::Ipv4Addr;
use tracing::debug;

/// Result of an RFC 6052 conversion in either direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// IPv4 source embedded into the NAT64 prefix
    Synthesized(Address128),
    /// IPv4 address recovered from a synthesized IPv6 source
    Extracted(Ipv4Addr),
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Synthesized(addr) => {
                write!(f, "Converted IPv4 to synthesized IPv6: {}", addr)
            }
            Conversion::Extracted(ipv4) => {
                write!(f, "Converted synthesized IPv6 to IPv4: {}", ipv4)
            }
        }
    }
}

/// Pick the direction from the family of `source`
pub fn convert(source: &str, nat64_prefix: &str) -> Result<Conversion> {
    if parse_ipv4(source).is_ok() {
        debug!("Synthesizing {} with prefix {}", source, nat64_prefix);
        let addr = ipv4_to_synthesized(source, nat64_prefix)
            .with_context(|| format!("Invalid NAT64 prefix: {}", nat64_prefix))?;
        return Ok(Conversion::Synthesized(addr));
    }

    debug!("Extracting IPv4 from {}", source);
    let ipv4 =
        synthesized_to_ipv4(source).with_context(|| format!("Invalid IP address: {}", source))?;
    Ok(Conversion::Extracted(ipv4))
}

pub fn execute(source: &str, nat64_prefix: &str) -> Result<()> {
    println!("{}", convert(source, nat64_prefix)?);
    Ok(())
}
