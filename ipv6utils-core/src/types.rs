//! Core value types shared by every address algorithm

use crate::constants::{ADDRESS_LEN, GROUP_COUNT, MAC_LEN, MAX_PREFIX_LEN};
use crate::error::AddrError;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::net::Ipv6Addr;
use core::str::FromStr;
use serde::{Serialize, Serializer};

/// A single IPv6 address as 16 network-order bytes
///
/// Ordering is the numeric order of the 128-bit value, so sorting a slice of
/// addresses sorts them the way routers and zone files do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address128([u8; ADDRESS_LEN]);

impl Address128 {
    /// The unspecified address `::`
    pub const UNSPECIFIED: Self = Self([0u8; ADDRESS_LEN]);

    /// The loopback address `::1`
    pub const LOOPBACK: Self = Self::from_segments([0, 0, 0, 0, 0, 0, 0, 1]);

    /// Create an address from raw bytes
    pub const fn new(octets: [u8; ADDRESS_LEN]) -> Self {
        Self(octets)
    }

    /// Create an address from eight 16-bit groups
    pub const fn from_segments(segments: [u16; GROUP_COUNT]) -> Self {
        let mut octets = [0u8; ADDRESS_LEN];
        let mut i = 0;
        while i < GROUP_COUNT {
            let [hi, lo] = segments[i].to_be_bytes();
            octets[i * 2] = hi;
            octets[i * 2 + 1] = lo;
            i += 1;
        }
        Self(octets)
    }

    /// Raw bytes, most significant first
    pub const fn octets(&self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// The eight 16-bit groups of the textual form
    pub fn segments(&self) -> [u16; GROUP_COUNT] {
        let mut groups = [0u16; GROUP_COUNT];
        for (group, pair) in groups.iter_mut().zip(self.0.chunks_exact(2)) {
            *group = u16::from_be_bytes([pair[0], pair[1]]);
        }
        groups
    }

    /// All 32 hex nibbles, lowercase, most significant first
    pub fn nibbles(&self) -> String {
        hex::encode(self.0)
    }

    /// Clear every bit below `prefix_len`
    pub fn mask(&self, prefix_len: u8) -> Self {
        let mut octets = self.0;
        for (i, byte) in octets.iter_mut().enumerate() {
            *byte &= prefix_byte_mask(prefix_len, i);
        }
        Self(octets)
    }

    /// Set every bit below `prefix_len`
    pub fn broadcast(&self, prefix_len: u8) -> Self {
        let mut octets = self.0;
        for (i, byte) in octets.iter_mut().enumerate() {
            *byte |= !prefix_byte_mask(prefix_len, i);
        }
        Self(octets)
    }

    /// Whether the first `prefix_len` bits equal those of `network`
    pub fn has_prefix(&self, network: &Self, prefix_len: u8) -> bool {
        self.mask(prefix_len) == network.mask(prefix_len)
    }

    /// Add two addresses as 128-bit unsigned integers
    ///
    /// The carry is propagated through all 16 bytes; `None` on overflow past
    /// `ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff`.
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let mut octets = [0u8; ADDRESS_LEN];
        let mut carry = 0u16;
        for i in (0..ADDRESS_LEN).rev() {
            let sum = u16::from(self.0[i]) + u16::from(rhs.0[i]) + carry;
            octets[i] = sum as u8;
            carry = sum >> 8;
        }
        (carry == 0).then_some(Self(octets))
    }

    /// Number of addresses covered by one `/prefix_len` block, i.e. 2^(128 - prefix_len)
    ///
    /// `None` for `/0`, whose size does not fit in 128 bits.
    pub fn block_size(prefix_len: u8) -> Option<Self> {
        if prefix_len == 0 || prefix_len > MAX_PREFIX_LEN {
            return None;
        }
        let bit = usize::from(MAX_PREFIX_LEN - prefix_len);
        let mut octets = [0u8; ADDRESS_LEN];
        octets[ADDRESS_LEN - 1 - bit / 8] = 1 << (bit % 8);
        Some(Self(octets))
    }
}

/// Mask byte `index` of a `/prefix_len` netmask
fn prefix_byte_mask(prefix_len: u8, index: usize) -> u8 {
    let len = usize::from(prefix_len);
    let bits_before = index * 8;
    if len >= bits_before + 8 {
        0xff
    } else if len <= bits_before {
        0x00
    } else {
        0xff << (8 - (len - bits_before))
    }
}

impl From<[u8; ADDRESS_LEN]> for Address128 {
    fn from(octets: [u8; ADDRESS_LEN]) -> Self {
        Self(octets)
    }
}

impl From<Ipv6Addr> for Address128 {
    fn from(addr: Ipv6Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<Address128> for Ipv6Addr {
    fn from(addr: Address128) -> Self {
        Ipv6Addr::from(addr.0)
    }
}

impl FromStr for Address128 {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::parse_address(s)
    }
}

impl fmt::Display for Address128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::compressed(self))
    }
}

impl Serialize for Address128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An address together with a prefix length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    /// Address part; may carry host bits unless built with [`Prefix::network`]
    pub address: Address128,

    /// Prefix length in bits (0..=128)
    pub len: u8,
}

impl Prefix {
    /// Create a prefix, rejecting lengths above 128
    pub fn new(address: Address128, len: u8) -> Result<Self, AddrError> {
        if len > MAX_PREFIX_LEN {
            return Err(AddrError::InvalidPrefixLength(len.to_string()));
        }
        Ok(Self { address, len })
    }

    /// The same prefix with host bits cleared
    pub fn network(&self) -> Self {
        Self {
            address: self.address.mask(self.len),
            len: self.len,
        }
    }

    /// Whether host bits are already clear
    pub fn is_network(&self) -> bool {
        self.address == self.address.mask(self.len)
    }

    /// Whether `addr` falls inside this prefix
    pub fn contains(&self, addr: &Address128) -> bool {
        addr.has_prefix(&self.address, self.len)
    }
}

impl FromStr for Prefix {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::parse_cidr(s)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.len)
    }
}

/// A 48-bit IEEE MAC address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; MAC_LEN]);

impl MacAddress {
    /// Create a MAC address from raw octets
    pub const fn new(octets: [u8; MAC_LEN]) -> Self {
        Self(octets)
    }

    /// Raw octets
    pub const fn octets(&self) -> [u8; MAC_LEN] {
        self.0
    }
}

impl FromStr for MacAddress {
    type Err = AddrError;

    /// Parse six colon-separated hex octets of one or two digits each
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AddrError::InvalidMacFormat(s.to_string());

        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != MAC_LEN {
            return Err(invalid());
        }

        let mut octets = [0u8; MAC_LEN];
        for (octet, part) in octets.iter_mut().zip(&parts) {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }

        Ok(Self(octets))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One sub-prefix produced by subnet enumeration
///
/// Renders as `address/prefix_len` with the address in compressed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubnetBlock {
    /// Network address of the block
    pub address: Address128,

    /// Prefix length of the block
    pub prefix_len: u8,
}

impl SubnetBlock {
    /// Create a block
    pub const fn new(address: Address128, prefix_len: u8) -> Self {
        Self {
            address,
            prefix_len,
        }
    }
}

impl fmt::Display for SubnetBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}

impl Serialize for SubnetBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Number of `/target` blocks inside a `/current` block: 2^(target - current)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetCount {
    delta: u8,
}

impl SubnetCount {
    /// Count for a prefix delta of `delta` bits
    pub const fn from_delta(delta: u8) -> Self {
        Self { delta }
    }

    /// Difference between target and current prefix length
    pub const fn delta(&self) -> u8 {
        self.delta
    }

    /// Exact count, or `None` when it is 2^128
    pub fn exact(&self) -> Option<u128> {
        1u128.checked_shl(u32::from(self.delta))
    }
}

impl fmt::Display for SubnetCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exact() {
            Some(count) => write!(f, "{count}"),
            None => write!(f, "2^{}", self.delta),
        }
    }
}

/// Multicast scope, taken from the low nibble of the second address byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MulticastScope {
    /// 0x1
    InterfaceLocal,
    /// 0x2
    LinkLocal,
    /// 0x4
    AdminLocal,
    /// 0x5
    SiteLocal,
    /// 0x8
    OrganizationLocal,
    /// 0xe
    Global,
    /// Any other scope value
    Unknown(u8),
}

impl MulticastScope {
    /// Decode a scope nibble; only the low four bits are considered
    pub const fn from_nibble(nibble: u8) -> Self {
        match nibble & 0x0f {
            0x1 => Self::InterfaceLocal,
            0x2 => Self::LinkLocal,
            0x4 => Self::AdminLocal,
            0x5 => Self::SiteLocal,
            0x8 => Self::OrganizationLocal,
            0xe => Self::Global,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for MulticastScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InterfaceLocal => f.write_str("Interface-Local"),
            Self::LinkLocal => f.write_str("Link-Local"),
            Self::AdminLocal => f.write_str("Admin-Local"),
            Self::SiteLocal => f.write_str("Site-Local"),
            Self::OrganizationLocal => f.write_str("Organization-Local"),
            Self::Global => f.write_str("Global"),
            Self::Unknown(scope) => write!(f, "Unknown (0x{scope:02x})"),
        }
    }
}

/// Entry of the IANA special-purpose registry an address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationLabel {
    /// `::`
    Unspecified,
    /// `::1`
    Loopback,
    /// `::ffff:0:0/96`
    Ipv4Mapped,
    /// `64:ff9b::/96`
    Nat64WellKnown,
    /// `64:ff9b:1::/48`
    Nat64NetworkSpecific,
    /// `100::/64`
    DiscardOnly,
    /// `2001:0000::/32`
    Teredo,
    /// `2001:db8::/32`
    Documentation,
    /// `2002::/16`
    SixToFour,
    /// `3fff::/20` (RFC 9637)
    DocumentationExtended,
    /// `fc00::/7`
    UniqueLocal,
    /// `fe80::/10`
    LinkLocal,
    /// `ff00::/8`
    Multicast(MulticastScope),
    /// `2000::/3`
    GlobalUnicast,
    /// Anything else
    Reserved,
}

impl fmt::Display for ClassificationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unspecified => "Unspecified (::)",
            Self::Loopback => "Loopback (::1)",
            Self::Ipv4Mapped => "IPv4-Mapped (::ffff:0:0/96)",
            Self::Nat64WellKnown => "NAT64 Well-Known Prefix (64:ff9b::/96)",
            Self::Nat64NetworkSpecific => "NAT64 Network-Specific (64:ff9b:1::/48)",
            Self::DiscardOnly => "Discard-Only (100::/64)",
            Self::Teredo => "Teredo (2001:0000::/32)",
            Self::Documentation => "Documentation (2001:db8::/32)",
            Self::SixToFour => "6to4 (2002::/16)",
            Self::DocumentationExtended => "Documentation (3fff::/20)",
            Self::UniqueLocal => "Unique Local Address (ULA, fc00::/7)",
            Self::LinkLocal => "Link-Local (fe80::/10)",
            Self::Multicast(scope) => return write!(f, "Multicast (ff00::/8), Scope: {scope}"),
            Self::GlobalUnicast => "Global Unicast (2000::/3)",
            Self::Reserved => "Reserved / Unknown",
        };
        f.write_str(label)
    }
}

impl Serialize for ClassificationLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
