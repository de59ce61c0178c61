//! Textual renderings of an address

use crate::constants::GROUP_COUNT;
use crate::types::Address128;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::net::Ipv4Addr;

/// Eight zero-padded groups, no compression
///
/// `::1` renders as `0000:0000:0000:0000:0000:0000:0000:0001`.
pub fn expanded(addr: &Address128) -> String {
    addr.segments()
        .iter()
        .map(|group| format!("{group:04x}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// RFC 5952 canonical form
///
/// Lowercase hex without leading zeros. The longest run of two or more zero
/// groups is replaced by `::`, the leftmost one when runs tie. A single zero
/// group is never compressed. IPv4-mapped addresses (`::ffff:0:0/96`) keep
/// their IPv4 part as a dotted quad, e.g. `::ffff:192.168.1.1`.
pub fn compressed(addr: &Address128) -> String {
    if let Some(ipv4) = ipv4_mapped(addr) {
        return format!("::ffff:{ipv4}");
    }

    let groups = addr.segments();
    match longest_zero_run(&groups) {
        Some((start, end)) => join_around_gap(&groups, start, end),
        None => join_groups(&groups),
    }
}

/// Compressed form with hex digits upper-cased
pub fn uppercase(addr: &Address128) -> String {
    compressed(addr).to_uppercase()
}

/// Compressed form in URL bracket notation
pub fn url(addr: &Address128) -> String {
    format!("[{}]", compressed(addr))
}

/// Every nibble separated by dots, most significant first
pub fn dotted(addr: &Address128) -> String {
    join_chars(addr.nibbles().chars(), ".")
}

/// Eight 16-bit binary groups
pub fn binary(addr: &Address128) -> String {
    addr.segments()
        .iter()
        .map(|group| format!("{group:016b}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// Append `/len` when a prefix length is present
pub fn with_suffix(rendered: &str, prefix_len: Option<u8>) -> String {
    match prefix_len {
        Some(len) => format!("{rendered}/{len}"),
        None => rendered.to_string(),
    }
}

fn ipv4_mapped(addr: &Address128) -> Option<Ipv4Addr> {
    match addr.octets() {
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d] => {
            Some(Ipv4Addr::new(a, b, c, d))
        }
        _ => None,
    }
}

/// Leftmost longest run of at least two zero groups, as `[start, end)`
fn longest_zero_run(groups: &[u16; GROUP_COUNT]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut i = 0;
    while i < GROUP_COUNT {
        if groups[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < GROUP_COUNT && groups[i] == 0 {
            i += 1;
        }
        let len = i - start;
        let best_len = best.map_or(1, |(s, e)| e - s);
        if len > best_len {
            best = Some((start, i));
        }
    }
    best
}

/// Render groups with `[start, end)` replaced by `::`
pub(crate) fn join_around_gap(groups: &[u16; GROUP_COUNT], start: usize, end: usize) -> String {
    let left = join_groups(&groups[..start]);
    let right = join_groups(&groups[end..]);
    format!("{left}::{right}")
}

/// Lowercase unpadded hex groups joined with `:`
fn join_groups(groups: &[u16]) -> String {
    groups
        .iter()
        .map(|group| format!("{group:x}"))
        .collect::<Vec<_>>()
        .join(":")
}

fn join_chars(chars: impl Iterator<Item = char>, sep: &str) -> String {
    chars.map(String::from).collect::<Vec<_>>().join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse_address;

    fn addr(s: &str) -> Address128 {
        parse_address(s).unwrap()
    }

    #[test]
    fn test_expanded() {
        assert_eq!(expanded(&addr("::1")), "0000:0000:0000:0000:0000:0000:0000:0001");
        assert_eq!(
            expanded(&addr("2001:db8:abcd::211:22ff:fe33:4455")),
            "2001:0db8:abcd:0000:0211:22ff:fe33:4455"
        );
    }

    #[test]
    fn test_compressed_canonical_form() {
        assert_eq!(compressed(&Address128::UNSPECIFIED), "::");
        assert_eq!(compressed(&Address128::LOOPBACK), "::1");
        assert_eq!(compressed(&addr("2001:0DB8:0000:0000:0000:0000:0000:0001")), "2001:db8::1");
        assert_eq!(compressed(&addr("2001:db8:0:0:1:0:0:1")), "2001:db8::1:0:0:1");
        assert_eq!(compressed(&addr("2001:0:0:1:0:0:0:1")), "2001:0:0:1::1");
        assert_eq!(compressed(&addr("2001:db8:0:1:1:1:1:1")), "2001:db8:0:1:1:1:1:1");
        assert_eq!(compressed(&addr("fe80::")), "fe80::");
    }

    #[test]
    fn test_compressed_ipv4_mapped() {
        let mapped = addr("::ffff:c0a8:101");
        assert_eq!(compressed(&mapped), "::ffff:192.168.1.1");
        assert_eq!(uppercase(&mapped), "::FFFF:192.168.1.1");
        assert_eq!(url(&mapped), "[::ffff:192.168.1.1]");
        assert_eq!(compressed(&addr("::ffff:0:0")), "::ffff:0.0.0.0");

        // only the mapped range gets a dotted tail
        assert_eq!(compressed(&addr("::c0a8:101")), "::c0a8:101");
        assert_eq!(compressed(&addr("64:ff9b::c000:201")), "64:ff9b::c000:201");
        assert_eq!(compressed(&addr("::1:ffff:c0a8:101")), "::1:ffff:c0a8:101");
    }

    #[test]
    fn test_other_renderings() {
        let a = addr("2001:db8::a");
        assert_eq!(uppercase(&a), "2001:DB8::A");
        assert_eq!(url(&a), "[2001:db8::a]");
        assert_eq!(
            dotted(&a),
            "2.0.0.1.0.d.b.8.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.a"
        );
        assert_eq!(
            binary(&addr("8000::1")),
            "1000000000000000:0000000000000000:0000000000000000:0000000000000000:\
             0000000000000000:0000000000000000:0000000000000000:0000000000000001"
        );
    }

    #[test]
    fn test_with_suffix() {
        assert_eq!(with_suffix("2001:db8::", Some(32)), "2001:db8::/32");
        assert_eq!(with_suffix("2001:db8::", Some(0)), "2001:db8::/0");
        assert_eq!(with_suffix("2001:db8::", None), "2001:db8::");
    }
}
