use ipv6utils_cli::commands::format::{execute, render_json, render_table};
use ipv6utils_cli::ReportFormat;
use ipv6utils_core::describe::describe;

#[test]
fn table_lists_every_rendering() {
    let report = describe("2001:db8::1").unwrap();
    let table = render_table(&report, false);

    assert!(table.contains("Expanded:       2001:0db8:0000:0000:0000:0000:0000:0001\n"));
    assert!(table.contains("Compressed:     2001:db8::1\n"));
    assert!(table.contains("Uppercase:      2001:DB8::1\n"));
    assert!(table.contains("URL format:     [2001:db8::1]\n"));
    assert!(table.contains("Address Type:   Documentation (2001:db8::/32)\n"));
    assert!(table.contains(
        "Reverse DNS:    1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa.\n"
    ));
    assert!(table.contains("\nCompression permutations:\n  2001:db8::0:0:0:1\n"));
    assert!(table.contains("  2001:db8::1\n"));
}

#[test]
fn table_keeps_prefix_suffix() {
    let report = describe("2001:db8::/48").unwrap();
    let table = render_table(&report, false);

    assert!(table.contains("Expanded:       2001:0db8:0000:0000:0000:0000:0000:0000/48\n"));
    assert!(table.contains("Compressed:     2001:db8::/48\n"));
}

#[test]
fn table_without_zero_groups_has_no_permutations() {
    let report = describe("2001:db8:1:2:3:4:5:6").unwrap();
    let table = render_table(&report, false);

    assert!(!table.contains("Compression permutations"));
}

#[test]
fn json_report_fields() {
    let report = describe("fe80::1").unwrap();
    let json = render_json("fe80::1", &report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["input"], "fe80::1");
    assert_eq!(value["address"], "fe80::1");
    assert_eq!(value["compressed"], "fe80::1");
    assert_eq!(value["classification"], "Link-Local (fe80::/10)");
    assert!(value["prefix_len"].is_null());
    assert!(value["compression_variants"].is_array());
}

#[test]
fn execute_rejects_invalid_input() {
    assert!(execute("192.0.2.1", ReportFormat::Table).is_err());
    assert!(execute("2001:db8::/129", ReportFormat::Json).is_err());
    assert!(execute("2001:db8::1", ReportFormat::Json).is_ok());
}

#[test]
fn table_shows_ipv4_mapped_tail() {
    let report = describe("::ffff:c0a8:101").unwrap();
    let table = render_table(&report, false);

    assert!(table.contains("Compressed:     ::ffff:192.168.1.1\n"));
    assert!(table.contains("Uppercase:      ::FFFF:192.168.1.1\n"));
    assert!(table.contains("URL format:     [::ffff:192.168.1.1]\n"));
    assert!(table.contains("\n  ::ffff:c0a8:101\n"));
}
