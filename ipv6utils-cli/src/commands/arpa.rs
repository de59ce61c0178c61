use anyhow::{Context, Result};
use ipv6utils_core::arpa::reverse_dns_str;
use tracing::debug;

pub fn execute(address: &str, zone_prefix_length: i32) -> Result<()> {
    debug!("Reverse name of {} in a /{} zone", address, zone_prefix_length);

    let name = reverse_dns_str(address, zone_prefix_length)
        .with_context(|| format!("Failed to build ip6.arpa name for {}", address))?;

    println!("{}", name);
    Ok(())
}
