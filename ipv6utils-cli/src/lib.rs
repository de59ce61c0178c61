//! Library entry for ipv6utils-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

/// Output style of the format command
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Aligned human-readable table
    Table,
    /// Pretty-printed JSON object
    Json,
}
