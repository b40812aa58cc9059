//! Scan statistics and the health report.

use serde::{Deserialize, Serialize};

use super::ScanWarning;

/// Counters collected during one walk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    /// Files reached by the walk (after directory pruning).
    pub files_seen: usize,
    pub files_included: usize,
    pub files_skipped_hidden: usize,
    pub files_skipped_include: usize,
    /// Files matching an exclude pattern.
    pub files_skipped_exclude: usize,
    /// Files named `.git` or below a `.git` directory.
    pub files_skipped_git: usize,
    /// Files deeper than `max_depth`.
    pub files_skipped_depth: usize,
    pub files_skipped_symlink: usize,
    /// Directories not entered because of depth, hidden, `.git` or exclude rules.
    pub dirs_pruned: usize,
    pub entries_failed: usize,
    pub warnings: Vec<ScanWarning>,
}

impl ScanStats {
    pub(crate) fn record_warning(&mut self, warning: ScanWarning) {
        tracing::warn!("Skipping {}: {}", warning.path.display(), warning.message);
        self.entries_failed += 1;
        self.warnings.push(warning);
    }
}

/// Zero-byte census of a root directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Files whose size could be read.
    pub total_files: usize,
    /// Sorted relative paths of files with size 0.
    pub zero_byte_files: Vec<String>,
    /// Files skipped from both counters because `stat` failed.
    pub unreadable_files: usize,
    /// Percentage of non-empty files, 0 when there are no files.
    pub score: u8,
}

impl HealthReport {
    pub fn zero_byte_count(&self) -> usize {
        self.zero_byte_files.len()
    }
}
