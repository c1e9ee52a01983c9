//! Requote CLI - rewrite a CSV file with its text columns quoted

use anyhow::{Context, Result};
use clap::Parser;
use requote::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Default output file, written to the working directory
const DEFAULT_OUTPUT: &str = "olist_order_reviews_clean.csv";

#[derive(Parser, Debug)]
#[command(name = "requote")]
#[command(
    author,
    version,
    about = "Load a CSV file and save it with every text column quoted"
)]
struct Cli {
    /// Input CSV file (must have a header row)
    input: PathBuf,

    /// Output CSV file, created or overwritten
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Log progress to stderr (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    run(&cli.input, &cli.output)?;
    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(input: &Path, output: &Path) -> Result<RequoteSummary> {
    let summary = requote_file(input, output).with_context(|| {
        format!(
            "Failed to requote '{}' into '{}'",
            input.display(),
            output.display()
        )
    })?;

    for column in &summary.columns {
        tracing::info!(
            column = %column.name,
            column_type = %column.column_type,
            quoted = column.quoted,
            missing = column.missing,
            "column written"
        );
    }

    Ok(summary)
}
