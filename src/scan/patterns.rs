//! Glob matching against root-relative, forward-slash paths.
//!
//! All patterns are compiled with `literal_separator`, so `*` and `?` stay
//! within one path segment and only `**` crosses `/`. Two forms get extra
//! meaning on top of plain globs:
//!
//! - `dir/**` matches everything below `dir`, and marks the subtree under
//!   any directory matching `dir` as covered, so the walk can skip it. A
//!   plain file named `dir` is not matched.
//! - `**/name` matches `name` at any depth, including the root level.

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::domain::ScanError;

const SUBTREE_SUFFIX: &str = "/**";

/// A compiled list of glob patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
    paths: GlobSet,
    subtrees: GlobSet,
    len: usize,
}

impl PatternSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ScanError> {
        let mut paths = GlobSetBuilder::new();
        let mut subtrees = GlobSetBuilder::new();
        let mut len = 0usize;

        for raw in patterns {
            let Some(pattern) = normalize_pattern(raw.as_ref()) else {
                continue;
            };
            paths.add(compile(&pattern)?);
            if let Some(prefix) = subtree_prefix(&pattern) {
                subtrees.add(compile(prefix)?);
            } else if pattern == "**" {
                subtrees.add(compile(&pattern)?);
            }
            len += 1;
        }

        Ok(Self {
            paths: paths.build().map_err(|source| invalid("<set>", source))?,
            subtrees: subtrees.build().map_err(|source| invalid("<set>", source))?,
            len,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// True if any pattern matches the relative path.
    pub fn is_match(&self, rel_path: &str) -> bool {
        self.paths.is_match(rel_path)
    }

    /// True if everything below `rel_dir` is matched by some `dir/**` pattern.
    pub fn covers_subtree(&self, rel_dir: &str) -> bool {
        self.subtrees.is_match(rel_dir)
    }
}

/// Match one relative path against one pattern.
///
/// Invalid patterns match nothing.
pub fn matches(path: &str, pattern: &str) -> bool {
    match PatternSet::new(&[pattern]) {
        Ok(set) => set.is_match(path),
        Err(err) => {
            tracing::debug!("{}", err);
            false
        }
    }
}

/// Trim whitespace and a leading `./`; a trailing `/` means "this directory".
fn normalize_pattern(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix("./").unwrap_or(trimmed);
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.ends_with('/') {
        return Some(format!("{}**", trimmed));
    }
    Some(trimmed.to_string())
}

fn subtree_prefix(pattern: &str) -> Option<&str> {
    pattern.strip_suffix(SUBTREE_SUFFIX).filter(|prefix| !prefix.is_empty())
}

fn compile(pattern: &str) -> Result<Glob, ScanError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map_err(|source| invalid(pattern, source))
}

fn invalid(pattern: &str, source: globset::Error) -> ScanError {
    ScanError::InvalidPattern { pattern: pattern.to_string(), source }
}
