//! CLI for the patfetch document fetcher.

mod commands;

use anyhow::Result;
use clap::Parser;
use patfetch_core::config;
use std::path::PathBuf;

use commands::run_fetch;

/// Fetch a random patent and save its document pages as PDF files.
#[derive(Debug, Parser)]
#[command(name = "patfetch")]
#[command(about = "Fetch a random patent's document pages", long_about = None)]
pub struct Cli {
    /// One output file per document page, assigned in argument order
    /// starting from the first image page.
    #[arg(value_name = "FILE")]
    pub outputs: Vec<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        run_fetch(&cfg, &cli.outputs)
    }
}
