//! Zero-byte health scoring.
//!
//! The health census counts every regular file under the root except those
//! inside `.git`; include, exclude, hidden and depth filters do not apply.
//! Files whose size cannot be read are left out of both counters.

use crate::domain::{FilterConfig, HealthReport};
use crate::scan::rules::has_git_segment;
use crate::scan::{FileScanner, ScannedFile};
use std::fs;
use std::path::Path;

/// Census `root` and score it.
///
/// A missing root scores like an empty one: zero files, score 0.
pub fn evaluate_health<P: AsRef<Path>>(root: P) -> HealthReport {
    let root = root.as_ref();
    let mut scanner = FileScanner::new(root).config(FilterConfig::census());
    let files = match scanner.scan_files() {
        Ok(files) => files,
        Err(err) => {
            tracing::warn!("Census of {} failed: {}", root.display(), err);
            Vec::new()
        }
    };
    tally(root, &files)
}

/// Score a precomputed list of root-relative paths.
///
/// Paths with a `.git` segment are ignored and repeated paths count once.
pub fn evaluate_files<S: AsRef<str>>(root: &Path, files: &[S]) -> HealthReport {
    let mut rels: Vec<&str> = files
        .iter()
        .map(|rel| rel.as_ref())
        .filter(|rel| !rel.is_empty() && !has_git_segment(rel))
        .collect();
    rels.sort_unstable();
    rels.dedup();

    let files: Vec<ScannedFile> = rels
        .into_iter()
        .map(|rel| ScannedFile { path: root.join(rel), relative_path: rel.to_string() })
        .collect();
    tally(root, &files)
}

/// Stat each file through its real path and count the empty ones.
fn tally(root: &Path, files: &[ScannedFile]) -> HealthReport {
    let mut total_files = 0usize;
    let mut unreadable_files = 0usize;
    let mut zero_byte_files = Vec::new();

    for file in files {
        match fs::metadata(&file.path) {
            Ok(meta) => {
                total_files += 1;
                if meta.len() == 0 {
                    zero_byte_files.push(file.relative_path.clone());
                }
            }
            Err(e) => {
                tracing::warn!("Could not stat file {}: {}", file.relative_path, e);
                unreadable_files += 1;
            }
        }
    }

    zero_byte_files.sort();

    let score = health_score(zero_byte_files.len(), total_files);
    tracing::debug!(
        "Health of {}: {} files, {} zero-byte, {} unreadable, score {}",
        root.display(),
        total_files,
        zero_byte_files.len(),
        unreadable_files,
        score
    );

    HealthReport { total_files, zero_byte_files, unreadable_files, score }
}

/// Percentage of non-empty files, rounded half-to-even; 0 when `total` is 0.
pub fn health_score(zero: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let zero = zero.min(total) as u128;
    let total = total as u128;

    let scaled = 100 * zero;
    let mut empty_pct = scaled / total;
    let twice_rem = 2 * (scaled % total);
    if twice_rem > total || (twice_rem == total && empty_pct % 2 == 1) {
        empty_pct += 1;
    }
    100u128.saturating_sub(empty_pct).min(100) as u8
}
