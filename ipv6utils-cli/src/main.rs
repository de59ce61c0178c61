use anyhow::Result;
use clap::{Parser, Subcommand};
use ipv6utils_cli::{commands, ReportFormat};
use ipv6utils_core::constants::NAT64_WELL_KNOWN_PREFIX;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "ipv6utils")]
#[command(about = "ipv6utils - IPv6 subnetting, NAT64, EUI-64 and address formatting", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a prefix into longer subnets
    Subnets {
        /// Base prefix in CIDR notation
        #[arg(short, long)]
        prefix: String,

        /// New prefix length for subnet allocation
        #[arg(short = 'n', long, default_value = "40", value_parser = clap::value_parser!(u8).range(0..=128))]
        new_prefix_length: u8,

        /// Limit the number of subnets (0 = no limit)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// File to save the subnets to
        #[arg(short, long)]
        output: Option<String>,

        /// Only display the number of prefixes
        #[arg(short, long)]
        count: bool,

        /// Show a progress bar while writing the output file
        #[arg(long)]
        progress: bool,
    },

    /// Convert between IPv4 and RFC 6052 synthesized IPv6
    Convert {
        /// IPv4 address to synthesize, or synthesized IPv6 address to extract
        source: String,

        /// NAT64 prefix used for synthesis
        #[arg(short = 'k', long, default_value = NAT64_WELL_KNOWN_PREFIX)]
        nat64_prefix: String,
    },

    /// Decode the MAC address from a SLAAC address
    Slaac {
        /// SLAAC IPv6 address
        address: String,
    },

    /// Convert a MAC to its link-local address or a link-local address to its MAC
    Local {
        /// MAC address or fe80 link-local address
        input: String,
    },

    /// Build the ip6.arpa name of an address
    Arpa {
        /// IPv6 address
        address: String,

        /// Zone prefix length (0 = fully qualified name)
        #[arg(short = 'n', long, default_value = "0", allow_negative_numbers = true)]
        new_prefix_length: i32,
    },

    /// Show every representation of an address
    Format {
        /// IPv6 address, optionally with /prefix-length
        address: String,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        output_format: ReportFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Subnets {
            prefix,
            new_prefix_length,
            limit,
            output,
            count,
            progress,
        } => commands::subnets::execute_ext(
            &prefix,
            new_prefix_length,
            limit,
            output.as_deref(),
            count,
            progress,
        ),

        Commands::Convert {
            source,
            nat64_prefix,
        } => commands::convert::execute(&source, &nat64_prefix),

        Commands::Slaac { address } => commands::mac::execute_slaac(&address),

        Commands::Local { input } => commands::mac::execute_local(&input),

        Commands::Arpa {
            address,
            new_prefix_length,
        } => commands::arpa::execute(&address, new_prefix_length),

        Commands::Format {
            address,
            output_format,
        } => commands::format::execute(&address, output_format),
    }
}
