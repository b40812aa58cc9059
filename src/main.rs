//! dataset-health: list repository files and score dataset completeness
//!
//! Prints an enumerated file listing for a directory tree, or with `--health`
//! a summary of how many files are empty.

use anyhow::Result;

fn main() -> Result<()> {
    dataset_health::cli::run()
}
