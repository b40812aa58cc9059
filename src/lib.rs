//! dataset-health: list repository files and score dataset completeness
//!
//! The scanner walks a root directory under include/exclude globs, a depth
//! limit and hidden-file rules, and returns a sorted list of root-relative
//! paths. The health evaluator censuses the same tree and scores it by the
//! share of zero-byte files, which often mark truncated or placeholder
//! content in a dataset or repository mirror.

pub mod cli;
pub mod domain;
pub mod health;
pub mod render;
pub mod scan;
pub mod utils;

pub use domain::{FilterConfig, HealthReport, ScanError, ScanStats, ScanWarning, WarningKind};
pub use health::{evaluate_files, evaluate_health, health_score};
pub use scan::{matches, resolve_root, scan, FileScanner, PatternSet, ScannedFile};
