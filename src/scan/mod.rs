//! Directory traversal and filtering

use crate::domain::{FilterConfig, ScanError};
use std::fs;
use std::path::{Path, PathBuf};

pub mod patterns;
pub mod rules;
pub mod scanner;

pub use patterns::{matches, PatternSet};
pub use scanner::{FileScanner, ScannedFile};

/// List files under `root` that pass `config`, sorted ascending.
///
/// Never fails: a missing root gives an empty listing, and an invalid
/// pattern is logged and also gives an empty listing.
pub fn scan<P: AsRef<Path>>(root: P, config: &FilterConfig) -> Vec<String> {
    let mut scanner = FileScanner::new(root.as_ref()).config(config.clone());
    match scanner.scan() {
        Ok(files) => files,
        Err(err) => {
            tracing::warn!("{}", err);
            Vec::new()
        }
    }
}

/// Validate a user-supplied root and return its canonical form.
pub fn resolve_root(path: &Path) -> Result<PathBuf, ScanError> {
    let metadata = fs::metadata(path).map_err(|e| ScanError::io(path, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory { path: path.to_path_buf() });
    }
    fs::read_dir(path)
        .map_err(|source| ScanError::InaccessiblePath { path: path.to_path_buf(), source })?;
    path.canonicalize().map_err(|e| ScanError::io(path, e))
}
