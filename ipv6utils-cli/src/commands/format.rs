use crate::ReportFormat;
use anyhow::{Context, Result};
use colored::*;
use ipv6utils_core::describe::{describe, AddressReport};
use serde::Serialize;

#[derive(Serialize)]
struct FormatOutput<'a> {
    input: &'a str,
    #[serde(flatten)]
    report: &'a AddressReport,
}

/// Aligned `Label:  value` table, followed by the compression permutations
pub fn render_table(report: &AddressReport, colorize: bool) -> String {
    let classification = report.classification.to_string();
    let classification = if colorize {
        classification.cyan().to_string()
    } else {
        classification
    };

    let rows = [
        ("Expanded:", report.expanded.as_str()),
        ("Compressed:", report.compressed.as_str()),
        ("Uppercase:", report.uppercase.as_str()),
        ("URL format:", report.url.as_str()),
        ("Dotted:", report.dotted.as_str()),
        ("Binary:", report.binary.as_str()),
        ("Reverse DNS:", report.reverse_dns.as_str()),
        ("Address Type:", classification.as_str()),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{:<16}{}\n", label, value));
    }

    if !report.compression_variants.is_empty() {
        out.push_str("\nCompression permutations:\n");
        for variant in &report.compression_variants {
            out.push_str(&format!("  {}\n", variant));
        }
    }

    out
}

/// Pretty JSON with the original input alongside the report fields
pub fn render_json(input: &str, report: &AddressReport) -> Result<String> {
    serde_json::to_string_pretty(&FormatOutput { input, report })
        .with_context(|| "Failed to serialize address report")
}

pub fn execute(input: &str, format: ReportFormat) -> Result<()> {
    let report = describe(input).with_context(|| format!("Invalid address: {}", input))?;

    match format {
        ReportFormat::Table => print!("{}", render_table(&report, true)),
        ReportFormat::Json => println!("{}", render_json(input, &report)?),
    }

    Ok(())
}
