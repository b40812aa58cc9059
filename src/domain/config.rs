//! Filter configuration for a single scan.

use serde::{Deserialize, Serialize};

/// Name of the version-control directory that is never entered.
pub const GIT_DIR: &str = ".git";

/// Inclusion rules applied while walking a root directory.
///
/// The implicit `.git/**` exclusion is not stored here; the scanner always
/// applies it on top of `exclude`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Glob patterns a file must match (any of). Empty matches everything.
    #[serde(default)]
    pub include: Vec<String>,

    /// Glob patterns removing files, or whole subtrees for `dir/**` forms.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Deepest directory level entered (root = 0). `None` = unlimited.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Keep entries whose name starts with `.`.
    #[serde(default)]
    pub include_hidden: bool,

    /// Descend into symlinked directories.
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Drop symlinks whose target resolves outside the root.
    #[serde(default)]
    pub exclude_external_symlinks: bool,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for the health census: every file except `.git`.
    pub fn census() -> Self {
        Self { include_hidden: true, ..Self::default() }
    }

    pub fn include(mut self, patterns: Vec<String>) -> Self {
        self.include = patterns;
        self
    }

    pub fn exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn exclude_external_symlinks(mut self, exclude: bool) -> Self {
        self.exclude_external_symlinks = exclude;
        self
    }
}
