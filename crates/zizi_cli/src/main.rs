//! Zizi CLI
//!
//! Inspect the built-in look-and-feel themes:
//! - `zizi themes` lists the variants
//! - `zizi dump --theme twilight --filter Button.` prints resolved defaults
//! - `zizi get --theme daylight Button.margin` prints one value
//! - `zizi scale --font-size 18 --os linux 10` previews HiDPI scaling
//! - `zizi info` prints the detected platform

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::Command;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zizi_laf::ZiziConfig;

/// Theme inspector for the Zizi look and feel
#[derive(Parser, Debug)]
#[command(name = "zizi")]
#[command(about = "Build and inspect Zizi look-and-feel themes")]
#[command(version)]
struct Cli {
    /// Configuration file (zizi.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ZiziConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    config.apply_env();
    tracing::debug!("configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &config, &mut out)
}
