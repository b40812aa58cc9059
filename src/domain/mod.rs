//! Core types shared by the scanner, the health evaluator and the CLI.

mod config;
mod error;
mod report;

pub use config::{FilterConfig, GIT_DIR};
pub use error::{ScanError, ScanWarning, WarningKind};
pub use report::{HealthReport, ScanStats};
