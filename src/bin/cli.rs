// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};

use kerala_scrape::{cli, log};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();
    let _guard = log::init(&args.log_options()).map_err(|e| eyre!("logging setup failed: {e}"))?;
    if args.log_file {
        tracing::debug!(path = %log::log_path().display(), "file logging enabled");
    }

    cli::run(&args).wrap_err("scrape failed")?;
    Ok(())
}
