//! Constants and limits for IPv6 address handling

/// Size of an IPv6 address in bytes
pub const ADDRESS_LEN: usize = 16;

/// Size of an IPv4 address in bytes
pub const IPV4_LEN: usize = 4;

/// Size of a 48-bit MAC address in bytes
pub const MAC_LEN: usize = 6;

/// Number of 16-bit groups in the textual form of an IPv6 address
pub const GROUP_COUNT: usize = 8;

/// Number of hex nibbles in an IPv6 address
pub const NIBBLE_COUNT: usize = ADDRESS_LEN * 2;

/// Longest valid prefix length
pub const MAX_PREFIX_LEN: u8 = 128;

/// Bits per nibble; prefix lengths that are a multiple of this are nibble aligned
pub const NIBBLE_BITS: u8 = 4;

/// Suffix of fully qualified reverse-lookup names
pub const ARPA_SUFFIX: &str = "ip6.arpa.";

/// Well-known NAT64 prefix (RFC 6052), used when no other prefix is given
pub const NAT64_WELL_KNOWN_PREFIX: &str = "64:ff9b::";

/// Offset of the embedded IPv4 address in a synthesized address
pub const IPV4_EMBED_OFFSET: usize = ADDRESS_LEN - IPV4_LEN;

/// First two bytes of an `fe80::/10` address as produced by EUI-64 derivation
pub const LINK_LOCAL_PREFIX: [u8; 2] = [0xfe, 0x80];

/// Offset of the 64-bit interface identifier
pub const INTERFACE_ID_OFFSET: usize = 8;

/// Bytes inserted in the middle of a MAC to form an EUI-64 interface identifier
pub const EUI64_MARKER: [u8; 2] = [0xff, 0xfe];

/// Universal/local bit, flipped between MAC and modified EUI-64 form
pub const UNIVERSAL_LOCAL_BIT: u8 = 0x02;

/// Returns true when `prefix_len` falls on a nibble boundary
pub const fn is_nibble_aligned(prefix_len: u8) -> bool {
    prefix_len % NIBBLE_BITS == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble_alignment() {
        assert!(is_nibble_aligned(0));
        assert!(is_nibble_aligned(48));
        assert!(is_nibble_aligned(128));
        assert!(!is_nibble_aligned(63));
        assert!(!is_nibble_aligned(122));
    }
}
