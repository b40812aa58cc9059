//! Listing mode

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Args};
use std::path::Path;

use super::utils::parse_csv;
use crate::domain::FilterConfig;
use crate::render::{render_listing, render_listing_json};
use crate::scan::FileScanner;

/// Filter options for the file listing. Ignored in `--health` mode.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// List only paths matching these globs (comma-separated, repeatable)
    #[arg(short = 'i', long, value_name = "GLOBS", env = "DATASET_HEALTH_INCLUDE")]
    pub include: Vec<String>,

    /// Drop paths matching these globs; `dir/**` skips the whole directory
    #[arg(short = 'e', long, value_name = "GLOBS", env = "DATASET_HEALTH_EXCLUDE")]
    pub exclude: Vec<String>,

    /// Do not enter directories deeper than N levels below PATH (0 = top level only)
    #[arg(short = 'd', long, value_name = "N", env = "DATASET_HEALTH_MAX_DEPTH")]
    pub max_depth: Option<usize>,

    /// Include files and directories whose name starts with '.'
    #[arg(
        short = 'a',
        long,
        env = "DATASET_HEALTH_HIDDEN",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub hidden: bool,

    /// Follow symbolic links to directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Skip symbolic links that resolve outside PATH
    #[arg(long)]
    pub exclude_external_symlinks: bool,
}

impl FilterArgs {
    pub fn to_config(&self) -> FilterConfig {
        FilterConfig::new()
            .include(parse_csv(&self.include))
            .exclude(parse_csv(&self.exclude))
            .max_depth(self.max_depth)
            .include_hidden(self.hidden)
            .follow_symlinks(self.follow_symlinks)
            .exclude_external_symlinks(self.exclude_external_symlinks)
    }
}

pub fn run(root: &Path, args: &FilterArgs, json: bool) -> Result<()> {
    let config = args.to_config();
    let mut scanner = FileScanner::new(root).config(config.clone());
    let files = scanner.scan()?;

    let stats = scanner.stats();
    if stats.entries_failed > 0 {
        tracing::info!("{} entries could not be read and were skipped", stats.entries_failed);
    }

    if json {
        println!("{}", render_listing_json(root, &config, &files)?);
    } else {
        print!("{}", render_listing(root, &files));
    }

    Ok(())
}
