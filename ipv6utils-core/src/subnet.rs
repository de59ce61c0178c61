//! Subdivision of a CIDR block into longer prefixes

use crate::codec::parse_cidr;
use crate::constants::{is_nibble_aligned, MAX_PREFIX_LEN};
use crate::error::AddrError;
use crate::types::{Address128, Prefix, SubnetBlock, SubnetCount};
use alloc::format;
use alloc::vec::Vec;
use core::iter::FusedIterator;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Lazy, ascending walk over the `/target` blocks of a base prefix
///
/// The walk stops after the last block inside the base prefix, so it is
/// safe to create for any prefix delta; bound it with [`Iterator::take`]
/// when the delta is large.
#[derive(Debug, Clone)]
pub struct SubnetIter {
    next: Option<Address128>,
    last: Address128,
    step: Address128,
    target: u8,
    total: SubnetCount,
}

impl SubnetIter {
    /// Number of blocks in the full walk, regardless of how far it has advanced
    pub fn total(&self) -> SubnetCount {
        self.total
    }
}

impl Iterator for SubnetIter {
    type Item = SubnetBlock;

    fn next(&mut self) -> Option<SubnetBlock> {
        let current = self.next?;
        self.next = if current == self.last {
            None
        } else {
            current.checked_add(&self.step)
        };
        Some(SubnetBlock::new(current, self.target))
    }
}

impl FusedIterator for SubnetIter {}

/// Check that `target` subdivides `base` and return the prefix delta
fn validate(base: &Prefix, target: u8) -> Result<u8, AddrError> {
    if target > MAX_PREFIX_LEN {
        return Err(AddrError::InvalidPrefixLength(format!(
            "prefix length must be between 0 and {MAX_PREFIX_LEN}, got {target}"
        )));
    }
    if target <= base.len {
        return Err(AddrError::PrefixTooSmall {
            current: base.len,
            target,
        });
    }
    if !is_nibble_aligned(target) {
        #[cfg(feature = "logging")]
        warn!("New prefix length /{} is not on a nibble boundary", target);
    }
    Ok(target - base.len)
}

/// Iterate over the `/target` blocks of `base`
///
/// Host bits of `base` are cleared first.
pub fn subnets(base: &Prefix, target: u8) -> Result<SubnetIter, AddrError> {
    let delta = validate(base, target)?;

    let network = base.network();
    // target > base.len >= 0, so the block size always fits in 128 bits
    let step = Address128::block_size(target).ok_or_else(|| {
        AddrError::InvalidPrefixLength(format!("no block size for /{target}"))
    })?;
    let last = network.address.broadcast(network.len).mask(target);

    #[cfg(feature = "logging")]
    debug!("Walking /{} blocks from {} to {}", target, network, last);

    Ok(SubnetIter {
        next: Some(network.address),
        last,
        step,
        target,
        total: SubnetCount::from_delta(delta),
    })
}

/// Count the `/target` blocks of `base` without producing them
pub fn count(base: &Prefix, target: u8) -> Result<SubnetCount, AddrError> {
    validate(base, target).map(SubnetCount::from_delta)
}

/// Produce up to `limit` `/target` blocks of the CIDR block `cidr`
///
/// A `limit` of 0 means no limit. The result holds
/// `min(limit, 2^(target - current))` blocks in ascending address order.
///
/// All blocks are held in memory, so an unlimited call is only practical for
/// small deltas. Walk [`subnets`] instead to stream them.
pub fn generate_subnets(
    cidr: &str,
    target: u8,
    limit: usize,
) -> Result<Vec<SubnetBlock>, AddrError> {
    let base = parse_cidr(cidr)?;
    let iter = subnets(&base, target)?;

    let mut blocks: Vec<SubnetBlock> = if limit > 0 {
        iter.take(limit).collect()
    } else {
        iter.collect()
    };
    blocks.sort_unstable();

    #[cfg(feature = "logging")]
    debug!("Generated {} subnets of {}", blocks.len(), base.network());

    Ok(blocks)
}

/// Number of `/target` blocks in the CIDR block `cidr`
pub fn count_subnets(cidr: &str, target: u8) -> Result<SubnetCount, AddrError> {
    count(&parse_cidr(cidr)?, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    fn render(blocks: &[SubnetBlock]) -> Vec<String> {
        blocks.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_generate_nibble_aligned() {
        let blocks = generate_subnets("2001:db8::/32", 36, 0).unwrap();
        assert_eq!(blocks.len(), 16);
        assert_eq!(blocks[0].to_string(), "2001:db8::/36");
        assert_eq!(blocks[1].to_string(), "2001:db8:1000::/36");
        assert_eq!(blocks[15].to_string(), "2001:db8:f000::/36");
    }

    #[test]
    fn test_generate_masks_host_bits() {
        let blocks = generate_subnets("2001:db8:abcd:1234::1/48", 50, 0).unwrap();
        assert_eq!(
            render(&blocks),
            vec![
                "2001:db8:abcd::/50",
                "2001:db8:abcd:4000::/50",
                "2001:db8:abcd:8000::/50",
                "2001:db8:abcd:c000::/50",
            ]
        );
    }

    #[test]
    fn test_generate_with_limit() {
        let blocks = generate_subnets("64:ff9b::/96", 104, 3).unwrap();
        assert_eq!(
            render(&blocks),
            vec!["64:ff9b::/104", "64:ff9b::100:0/104", "64:ff9b::200:0/104"]
        );

        // a limit above the count returns the whole set
        assert_eq!(generate_subnets("2001:db8::/126", 128, 10).unwrap().len(), 4);
    }

    #[test]
    fn test_generate_ipv4_mapped_range() {
        let blocks = generate_subnets("::ffff:0:0/96", 104, 2).unwrap();
        assert_eq!(
            render(&blocks),
            vec!["::ffff:0.0.0.0/104", "::ffff:1.0.0.0/104"]
        );
    }

    #[test]
    fn test_generate_carries_across_groups() {
        let blocks = generate_subnets("2001:db8:0:ffff::/63", 64, 0).unwrap();
        assert_eq!(
            render(&blocks),
            vec!["2001:db8:0:fffe::/64", "2001:db8:0:ffff::/64"]
        );

        let blocks = generate_subnets("2001:db8::ff00:0/104", 105, 0).unwrap();
        assert_eq!(
            render(&blocks),
            vec!["2001:db8::ff00:0/105", "2001:db8::ff80:0/105"]
        );
    }

    #[test]
    fn test_huge_delta_is_bounded_by_limit() {
        let blocks = generate_subnets("::/0", 128, 5).unwrap();
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[4].to_string(), "::4/128");

        let top = generate_subnets("ffff:ffff:ffff:ffff:ffff:ffff:ffff:fff0/124", 128, 0).unwrap();
        assert_eq!(top.len(), 16);
        assert_eq!(top[15].to_string(), "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff/128");
    }

    #[test]
    fn test_prefix_too_small() {
        assert_eq!(
            generate_subnets("2001:db8::/48", 48, 0),
            Err(AddrError::PrefixTooSmall {
                current: 48,
                target: 48
            })
        );
        assert_eq!(
            count_subnets("2001:db8::/48", 32),
            Err(AddrError::PrefixTooSmall {
                current: 48,
                target: 32
            })
        );
        assert!(matches!(
            generate_subnets("2001:db8::/48", 129, 0),
            Err(AddrError::InvalidPrefixLength(_))
        ));
    }

    #[test]
    fn test_count() {
        assert_eq!(count_subnets("2001:db8::/32", 48).unwrap().exact(), Some(65536));
        assert_eq!(count_subnets("::/0", 128).unwrap().exact(), None);
        assert_eq!(count_subnets("::/0", 128).unwrap().to_string(), "2^128");
        assert_eq!(count_subnets("2001:db8::/32", 33).unwrap().to_string(), "2");
    }

    #[test]
    fn test_iterator_total_matches_count() {
        let base = parse_cidr("2001:db8::/32").unwrap();
        let mut iter = subnets(&base, 50).unwrap();
        assert_eq!(iter.total(), count(&base, 50).unwrap());
        assert_eq!(iter.total().exact(), Some(1 << 18));

        iter.next();
        assert_eq!(iter.total().exact(), Some(1 << 18));
    }

    #[test]
    fn test_iterator_is_fused_at_block_end() {
        let base = parse_cidr("2001:db8::/127").unwrap();
        let mut iter = subnets(&base, 128).unwrap();
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
