use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use ipv6utils_core::{codec::parse_cidr, subnet, SubnetBlock, SubnetCount};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

pub fn execute(
    prefix: &str,
    new_prefix_length: u8,
    limit: usize,
    output: Option<&str>,
    count_only: bool,
) -> Result<()> {
    execute_ext(prefix, new_prefix_length, limit, output, count_only, false)
}

/// Blocks are written as they are produced, so memory stays flat for any
/// delta; a `limit` of 0 walks the whole block.
pub fn execute_ext(
    prefix: &str,
    new_prefix_length: u8,
    limit: usize,
    output: Option<&str>,
    count_only: bool,
    progress: bool,
) -> Result<()> {
    let base = parse_cidr(prefix).with_context(|| format!("Invalid prefix: {}", prefix))?;
    let iter = subnet::subnets(&base, new_prefix_length)
        .with_context(|| format!("Cannot split {} into /{}", prefix, new_prefix_length))?;
    let count = iter.total();

    if count_only {
        println!("Number of prefixes: {}", count);
        return Ok(());
    }

    info!("Generating {} prefixes...", count);

    let blocks: Box<dyn Iterator<Item = SubnetBlock>> = if limit > 0 {
        Box::new(iter.take(limit))
    } else {
        Box::new(iter)
    };

    let written = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            let bar = progress_bar(expected_len(&count, limit), progress)?;

            let written = write_blocks(BufWriter::new(file), blocks, &bar)
                .with_context(|| format!("Failed to write output file: {}", path))?;

            bar.finish_and_clear();
            println!("Subnets saved to {}", path);
            written
        }
        None => {
            let stdout = io::stdout();
            write_blocks(stdout.lock(), blocks, &ProgressBar::hidden())?
        }
    };

    info!("Wrote {} subnets", written);

    Ok(())
}

/// One `address/len` line per block; returns the number of lines written
fn write_blocks<W, I>(mut writer: W, blocks: I, bar: &ProgressBar) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = SubnetBlock>,
{
    let mut written = 0u64;
    for block in blocks {
        writeln!(writer, "{}", block)?;
        bar.inc(1);
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Number of lines the bar should expect, when it fits in a `u64`
fn expected_len(count: &SubnetCount, limit: usize) -> Option<u64> {
    let total = count.exact()?;
    let total = if limit > 0 {
        total.min(limit as u128)
    } else {
        total
    };
    u64::try_from(total).ok()
}

fn progress_bar(len: Option<u64>, enabled: bool) -> Result<ProgressBar> {
    if !enabled {
        return Ok(ProgressBar::hidden());
    }
    let bar = match len {
        Some(len) => {
            let bar = ProgressBar::new(len);
            bar.set_style(ProgressStyle::with_template(
                "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} subnets",
            )?);
            bar
        }
        None => {
            let bar = ProgressBar::new_spinner();
            bar.set_style(ProgressStyle::with_template(
                "{spinner} [{elapsed_precise}] {pos} subnets",
            )?);
            bar
        }
    };
    Ok(bar)
}
