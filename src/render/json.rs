//! JSON rendering for machine consumers.

use crate::domain::{FilterConfig, HealthReport};
use anyhow::Result;
use serde_json::json;
use std::path::Path;

pub fn render_listing_json(root: &Path, config: &FilterConfig, files: &[String]) -> Result<String> {
    let value = json!({
        "root": root.display().to_string(),
        "config": config,
        "files": files,
        "total_files": files.len(),
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn render_health_json(root: &Path, report: &HealthReport) -> Result<String> {
    let value = json!({
        "root": root.display().to_string(),
        "total_files": report.total_files,
        "zero_byte_files": report.zero_byte_files,
        "unreadable_files": report.unreadable_files,
        "score": report.score,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
