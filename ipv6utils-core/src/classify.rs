//! Classification against the IANA IPv6 special-purpose registry
//!
//! The registry ranges nest inside each other (Teredo and documentation
//! space sit inside `2000::/3`, the NAT64 prefixes overlap at different
//! lengths), so classification is an ordered rule table evaluated
//! first-match. Order in [`RULES`] is part of the contract.

use crate::types::{Address128, ClassificationLabel, MulticastScope};

/// One registry entry: an address range and how to label a match
struct Rule {
    network: Address128,
    prefix_len: u8,
    label: fn(&Address128) -> ClassificationLabel,
}

const fn net(segments: [u16; 8]) -> Address128 {
    Address128::from_segments(segments)
}

/// Registry entries, most specific first
const RULES: &[Rule] = &[
    Rule {
        network: net([0, 0, 0, 0, 0, 0, 0, 0]),
        prefix_len: 128,
        label: |_| ClassificationLabel::Unspecified,
    },
    Rule {
        network: net([0, 0, 0, 0, 0, 0, 0, 1]),
        prefix_len: 128,
        label: |_| ClassificationLabel::Loopback,
    },
    Rule {
        network: net([0, 0, 0, 0, 0, 0xffff, 0, 0]),
        prefix_len: 96,
        label: |_| ClassificationLabel::Ipv4Mapped,
    },
    Rule {
        network: net([0x64, 0xff9b, 0, 0, 0, 0, 0, 0]),
        prefix_len: 96,
        label: |_| ClassificationLabel::Nat64WellKnown,
    },
    Rule {
        network: net([0x64, 0xff9b, 1, 0, 0, 0, 0, 0]),
        prefix_len: 48,
        label: |_| ClassificationLabel::Nat64NetworkSpecific,
    },
    Rule {
        network: net([0x100, 0, 0, 0, 0, 0, 0, 0]),
        prefix_len: 64,
        label: |_| ClassificationLabel::DiscardOnly,
    },
    Rule {
        network: net([0x2001, 0, 0, 0, 0, 0, 0, 0]),
        prefix_len: 32,
        label: |_| ClassificationLabel::Teredo,
    },
    Rule {
        network: net([0x2001, 0xdb8, 0, 0, 0, 0, 0, 0]),
        prefix_len: 32,
        label: |_| ClassificationLabel::Documentation,
    },
    Rule {
        network: net([0x2002, 0, 0, 0, 0, 0, 0, 0]),
        prefix_len: 16,
        label: |_| ClassificationLabel::SixToFour,
    },
    Rule {
        network: net([0x3fff, 0, 0, 0, 0, 0, 0, 0]),
        prefix_len: 20,
        label: |_| ClassificationLabel::DocumentationExtended,
    },
    Rule {
        network: net([0xfc00, 0, 0, 0, 0, 0, 0, 0]),
        prefix_len: 7,
        label: |_| ClassificationLabel::UniqueLocal,
    },
    Rule {
        network: net([0xfe80, 0, 0, 0, 0, 0, 0, 0]),
        prefix_len: 10,
        label: |_| ClassificationLabel::LinkLocal,
    },
    Rule {
        network: net([0xff00, 0, 0, 0, 0, 0, 0, 0]),
        prefix_len: 8,
        label: |addr| ClassificationLabel::Multicast(MulticastScope::from_nibble(addr.octets()[1])),
    },
    Rule {
        network: net([0x2000, 0, 0, 0, 0, 0, 0, 0]),
        prefix_len: 3,
        label: |_| ClassificationLabel::GlobalUnicast,
    },
];

/// Classify an address; the first matching registry entry wins
pub fn classify(addr: &Address128) -> ClassificationLabel {
    RULES
        .iter()
        .find(|rule| addr.has_prefix(&rule.network, rule.prefix_len))
        .map_or(ClassificationLabel::Reserved, |rule| (rule.label)(addr))
}
