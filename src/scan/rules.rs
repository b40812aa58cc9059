//! Pure keep/skip decisions for directories and files.
//!
//! The walker asks [`EntryRules::check_dir`] before entering a directory and
//! [`EntryRules::check_file`] for each file; neither touches the filesystem.

use crate::domain::{FilterConfig, ScanError, GIT_DIR};

use super::patterns::PatternSet;

/// Outcome of a rule check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    /// Inside or named `.git`.
    Git,
    TooDeep,
    Hidden,
    /// Include patterns are configured and none matched.
    NotIncluded,
    Excluded,
}

impl Verdict {
    pub fn is_keep(self) -> bool {
        self == Verdict::Keep
    }
}

/// Compiled form of a [`FilterConfig`].
#[derive(Debug, Clone)]
pub struct EntryRules {
    include: PatternSet,
    exclude: PatternSet,
    max_depth: Option<usize>,
    include_hidden: bool,
}

impl EntryRules {
    pub fn from_config(config: &FilterConfig) -> Result<Self, ScanError> {
        Ok(Self {
            include: PatternSet::new(&config.include)?,
            exclude: PatternSet::new(&config.exclude)?,
            max_depth: config.max_depth,
            include_hidden: config.include_hidden,
        })
    }

    /// Decide whether to enter the directory at `rel_dir`, `depth` levels below root.
    pub fn check_dir(&self, rel_dir: &str, depth: usize) -> Verdict {
        let name = file_name(rel_dir);
        if name == GIT_DIR {
            return Verdict::Git;
        }
        if self.max_depth.is_some_and(|max| depth > max) {
            return Verdict::TooDeep;
        }
        if !self.include_hidden && is_hidden_name(name) {
            return Verdict::Hidden;
        }
        if self.exclude.covers_subtree(rel_dir) {
            return Verdict::Excluded;
        }
        Verdict::Keep
    }

    /// Decide whether a file at `rel_path` belongs in the listing.
    ///
    /// Exclusion always wins over inclusion.
    pub fn check_file(&self, rel_path: &str) -> Verdict {
        if has_git_segment(rel_path) {
            return Verdict::Git;
        }
        if self.max_depth.is_some_and(|max| separator_count(rel_path) > max) {
            return Verdict::TooDeep;
        }
        if !self.include_hidden && is_hidden_path(rel_path) {
            return Verdict::Hidden;
        }
        if !self.include.is_empty() && !self.include.is_match(rel_path) {
            return Verdict::NotIncluded;
        }
        if self.exclude.is_match(rel_path) {
            return Verdict::Excluded;
        }
        Verdict::Keep
    }
}

pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// True if any segment of a relative path starts with `.`.
pub fn is_hidden_path(rel_path: &str) -> bool {
    rel_path.split('/').any(is_hidden_name)
}

pub fn has_git_segment(rel_path: &str) -> bool {
    rel_path.split('/').any(|segment| segment == GIT_DIR)
}

fn separator_count(rel_path: &str) -> usize {
    rel_path.matches('/').count()
}

fn file_name(rel_path: &str) -> &str {
    rel_path.rsplit('/').next().unwrap_or(rel_path)
}
