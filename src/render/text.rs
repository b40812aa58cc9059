//! Plain-text rendering for terminal output.

use crate::domain::HealthReport;
use std::path::Path;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Enumerated file listing, numbered from 1.
pub fn render_listing(root: &Path, files: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Listing files in repository: {}\n", root.display()));
    out.push_str(&format!("{}\n", rule()));

    if files.is_empty() {
        out.push_str("No files found in the repository.\n");
        return out;
    }

    for (i, file) in files.iter().enumerate() {
        out.push_str(&format!("{:2}. {}\n", i + 1, file));
    }
    out.push_str(&format!("\nTotal files: {}\n", files.len()));
    out
}

/// Health summary with the zero-byte list when there is one.
pub fn render_health(root: &Path, report: &HealthReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Health for: {}\n", root.display()));
    out.push_str(&format!("{}\n", rule()));
    out.push_str(&format!("Total files: {}\n", report.total_files));
    out.push_str(&format!("Zero-byte files: {}\n", report.zero_byte_count()));
    if !report.zero_byte_files.is_empty() {
        out.push_str("Zero-byte list:\n");
        for rel in &report.zero_byte_files {
            out.push_str(&format!(" - {}\n", rel));
        }
    }
    if report.unreadable_files > 0 {
        out.push_str(&format!("Unreadable files (not scored): {}\n", report.unreadable_files));
    }
    out.push_str(&format!("Score: {}\n", report.score));
    out
}
