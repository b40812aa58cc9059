//! Command-line interface for dataset-health
//!
//! Lists the files of a directory tree, or with `--health` scores it by its
//! share of zero-byte files.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::scan::resolve_root;

mod health;
mod list;
mod utils;

pub use list::FilterArgs;

/// List repository files and score dataset completeness
#[derive(Parser, Debug)]
#[command(name = "dataset-health")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to repository root
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Compute health for PATH and print summary instead of listing files
    #[arg(long)]
    pub health: bool,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let root = resolve_root(&cli.path)?;

    if cli.health {
        health::run(&root, cli.json)
    } else {
        list::run(&root, &cli.filters, cli.json)
    }
}
