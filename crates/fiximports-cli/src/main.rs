//! fiximports CLI
//!
//! Fixes import grouping of the Go source files given on the command line.
//!
//! # Usage
//!
//! ```bash
//! fiximports [--verbose] <FILES>...
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Overrides log filtering (default: `info` with `--verbose`, `warn` otherwise)
//! - `FIXIMPORTS_GO`, `FIXIMPORTS_GOIMPORTS`, `FIXIMPORTS_LOCAL`: see `--help`

mod cli;
mod error;

use std::io::IsTerminal;

use clap::Parser;
use fiximports_core::ImportFixer;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "fiximports=info,fiximports_core=info,fiximports_fs=info"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut fixer = ImportFixer::from_config(&cli.tool_config());
    let summary = fixer.run(&cli.files).await?;

    tracing::info!(
        fixed = summary.fixed,
        unchanged = summary.unchanged,
        skipped_generated = summary.skipped_generated,
        "Done"
    );
    Ok(())
}
