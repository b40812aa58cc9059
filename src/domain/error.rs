//! Fatal scan errors and per-entry warnings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a scan before it starts.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Root path does not exist.
    #[error("Path does not exist: {}", path.display())]
    PathNotFound { path: PathBuf },

    /// Root path exists but cannot be opened.
    #[error("Cannot access path {}: {source}", path.display())]
    InaccessiblePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Root path is a file or some other non-directory.
    #[error("Path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// An include or exclude glob failed to compile.
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

impl ScanError {
    /// Classify an I/O error hit while resolving the root.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::PathNotFound { path },
            _ => Self::InaccessiblePath { path, source },
        }
    }
}

/// Kind of per-entry problem absorbed during a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    PermissionDenied,
    /// Directory listing or entry read failed.
    ReadError,
    SymlinkLoop,
    /// Symlink target resolves outside the scan root.
    OutsideRoot,
}

/// Non-fatal problem with a single entry; the entry was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    pub path: PathBuf,
    pub message: String,
    pub kind: WarningKind,
}

impl ScanWarning {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self { path: path.into(), message: message.into(), kind }
    }

    /// Build a warning from a walk error, keeping loop and permission cases distinct.
    pub fn from_walk_error(err: &walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        if let Some(ancestor) = err.loop_ancestor() {
            return Self::new(
                path,
                format!("Symlink loop back to {}", ancestor.display()),
                WarningKind::SymlinkLoop,
            );
        }
        let kind = match err.io_error().map(|e| e.kind()) {
            Some(std::io::ErrorKind::PermissionDenied) => WarningKind::PermissionDenied,
            _ => WarningKind::ReadError,
        };
        Self::new(path, err.to_string(), kind)
    }
}
