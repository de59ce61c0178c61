//! Fuzzing entry points for ipv6utils-core parsers
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_describe

pub fn fuzz_parse(data: &[u8]) {
    use ipv6utils_core::codec::{parse_cidr, parse_with_prefix};

    let Ok(input) = core::str::from_utf8(data) else {
        return;
    };

    // Parsing should never panic
    let _ = parse_with_prefix(input);
    let _ = parse_cidr(input);
}

pub fn fuzz_mac(data: &[u8]) {
    use ipv6utils_core::eui64::{link_local_to_mac, mac_to_link_local};

    let Ok(input) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(addr) = mac_to_link_local(input) {
        // Every link-local built from a MAC must decode again
        assert!(link_local_to_mac(&addr.to_string()).is_ok());
    }
}

pub fn fuzz_describe(data: &[u8]) {
    use ipv6utils_core::{arpa::reverse_dns, describe::describe};

    let Ok(input) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(report) = describe(input) {
        let len = report.prefix_len.map_or(0, i32::from);
        let _ = reverse_dns(&report.address, len);
    }
}
