//! File scanner implementation with glob, depth and hidden-file filtering

use crate::domain::{FilterConfig, ScanError, ScanStats, ScanWarning, WarningKind};
use crate::utils::{relative_posix, resolves_inside};
use std::cell::RefCell;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::rules::{EntryRules, Verdict};

/// A file that passed the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Path as walked, joined onto the scan root. Use this for filesystem access.
    pub path: PathBuf,
    /// Forward-slash relative path for display and matching. Lossy for
    /// names that are not valid UTF-8.
    pub relative_path: String,
}

/// File scanner that lists files under a root directory.
pub struct FileScanner {
    root_path: PathBuf,
    config: FilterConfig,
    stats: ScanStats,
}

impl FileScanner {
    /// Create a new FileScanner with the default filter configuration.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            config: FilterConfig::default(),
            stats: ScanStats::default(),
        }
    }

    /// Replace the filter configuration
    pub fn config(mut self, config: FilterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Scan the root and return sorted relative paths.
    ///
    /// See [`FileScanner::scan_files`].
    pub fn scan(&mut self) -> Result<Vec<String>, ScanError> {
        Ok(self.scan_files()?.into_iter().map(|f| f.relative_path).collect())
    }

    /// Scan the root and return the surviving files, sorted by relative path.
    ///
    /// Files are deduplicated on their real path, so two names that only
    /// differ in invalid UTF-8 bytes are both kept. A root that does not exist or is not a directory yields an empty
    /// listing. Only invalid glob patterns are reported as errors; per-entry
    /// failures are recorded in [`FileScanner::stats`] and skipped.
    pub fn scan_files(&mut self) -> Result<Vec<ScannedFile>, ScanError> {
        self.stats = ScanStats::default();
        let rules = EntryRules::from_config(&self.config)?;

        if !self.root_path.is_dir() {
            tracing::debug!(
                "Root {} is not a directory; nothing to scan",
                self.root_path.display()
            );
            return Ok(Vec::new());
        }

        let canonical_root = if self.config.exclude_external_symlinks {
            match self.root_path.canonicalize() {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::debug!("Cannot resolve root {}: {}", self.root_path.display(), e);
                    return Ok(Vec::new());
                }
            }
        } else {
            None
        };

        let root = self.root_path.as_path();
        let stats = RefCell::new(ScanStats::default());

        // Directory predicate: consulted before the walker enters a directory.
        let dir_filter = |entry: &DirEntry| -> bool {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            if let Some(canonical_root) = canonical_root.as_deref() {
                if entry.path_is_symlink() && !resolves_inside(entry.path(), canonical_root) {
                    tracing::debug!("Not entering external symlink {}", entry.path().display());
                    stats.borrow_mut().dirs_pruned += 1;
                    return false;
                }
            }
            let Some(rel_dir) = relative_posix(entry.path(), root) else {
                return true;
            };
            let verdict = rules.check_dir(&rel_dir, entry.depth());
            if !verdict.is_keep() {
                tracing::trace!("Pruning {} ({:?})", rel_dir, verdict);
                stats.borrow_mut().dirs_pruned += 1;
            }
            verdict.is_keep()
        };

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.config.follow_symlinks)
            .into_iter()
            .filter_entry(dir_filter);

        let mut files: Vec<ScannedFile> = Vec::new();

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    stats.borrow_mut().record_warning(ScanWarning::from_walk_error(&err));
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            // Unfollowed links to directories are neither entered nor listed.
            if entry.path_is_symlink() && !self.config.follow_symlinks && entry.path().is_dir() {
                continue;
            }

            let mut stats = stats.borrow_mut();
            stats.files_seen += 1;

            let Some(rel_path) = relative_posix(entry.path(), root) else {
                continue;
            };

            if let Some(canonical_root) = canonical_root.as_deref() {
                if entry.path_is_symlink() && !resolves_inside(entry.path(), canonical_root) {
                    tracing::debug!("Skipping external symlink {}", rel_path);
                    stats.files_skipped_symlink += 1;
                    stats.warnings.push(ScanWarning::new(
                        entry.path(),
                        "Symlink target resolves outside the root",
                        WarningKind::OutsideRoot,
                    ));
                    continue;
                }
            }

            match rules.check_file(&rel_path) {
                Verdict::Keep => {
                    stats.files_included += 1;
                    files.push(ScannedFile { path: entry.into_path(), relative_path: rel_path });
                }
                Verdict::Hidden => stats.files_skipped_hidden += 1,
                Verdict::NotIncluded => stats.files_skipped_include += 1,
                Verdict::Excluded => stats.files_skipped_exclude += 1,
                Verdict::Git => stats.files_skipped_git += 1,
                Verdict::TooDeep => stats.files_skipped_depth += 1,
            }
        }

        self.stats = stats.into_inner();

        // Sort by relative path, ties broken on the raw bytes of the real path
        files.sort_by(|a, b| {
            a.relative_path
                .cmp(&b.relative_path)
                .then_with(|| raw_bytes(&a.path).cmp(raw_bytes(&b.path)))
        });
        files.dedup_by(|a, b| a.path == b.path);

        tracing::debug!(
            "Scanned {}: {} files seen, {} included, {} dirs pruned, {} failed entries",
            self.root_path.display(),
            self.stats.files_seen,
            files.len(),
            self.stats.dirs_pruned,
            self.stats.entries_failed
        );

        Ok(files)
    }

    /// Get scanning statistics
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }
}

fn raw_bytes(path: &Path) -> &[u8] {
    OsStr::as_encoded_bytes(path.as_os_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn scan_with(root: &Path, config: FilterConfig) -> Vec<String> {
        FileScanner::new(root).config(config).scan().unwrap()
    }

    #[test]
    fn test_scanner_skips_git_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "z.txt", "z\n");
        touch(root, "a/b.txt", "b\n");
        touch(root, ".git/HEAD", "ref: HEAD\n");
        fs::create_dir_all(root.join(".git/objects")).unwrap();

        assert_eq!(scan_with(root, FilterConfig::default()), vec!["a/b.txt", "z.txt"]);
    }

    #[test]
    fn test_scanner_git_excluded_with_hidden() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "a.txt", "x");
        touch(root, "dir/b.txt", "x");
        touch(root, ".git/ignored.txt", "x");
        touch(root, "nested/.git/config", "x");
        touch(root, ".env", "x");

        let files = scan_with(root, FilterConfig::new().include_hidden(true));
        assert_eq!(files, vec![".env", "a.txt", "dir/b.txt"]);
    }

    #[test]
    fn test_scanner_filters_compose() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "keep.py", "print(1)");
        touch(root, "skip.log", "log");
        touch(root, ".hidden", "h");
        touch(root, "sub/keep.txt", "k");
        touch(root, "sub/skip.md", "# s");

        let config = FilterConfig::new()
            .include(vec!["*.py".into(), "sub/*".into()])
            .exclude(vec!["*.log".into(), "sub/*.md".into()])
            .max_depth(Some(2));
        let mut scanner = FileScanner::new(root).config(config);
        let files = scanner.scan().unwrap();

        assert_eq!(files, vec!["keep.py", "sub/keep.txt"]);
        let stats = scanner.stats();
        assert_eq!(stats.files_seen, 5);
        assert_eq!(stats.files_included, 2);
        assert_eq!(stats.files_skipped_hidden, 1);
        assert_eq!(stats.files_skipped_include, 1);
        assert_eq!(stats.files_skipped_exclude, 1);
        assert_eq!(stats.files_skipped_git, 0);
        assert_eq!(stats.files_skipped_depth, 0);
    }

    #[test]
    fn test_scanner_counts_git_and_depth_separately() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "top.txt", "t");
        touch(root, ".git", "gitdir: ../.git/worktrees/x");
        touch(root, "ignored.log", "l");

        let config = FilterConfig::new()
            .include_hidden(true)
            .exclude(vec!["*.log".into()])
            .max_depth(Some(0));
        let mut scanner = FileScanner::new(root).config(config);
        assert_eq!(scanner.scan().unwrap(), vec!["top.txt"]);

        let stats = scanner.stats();
        assert_eq!(stats.files_skipped_git, 1);
        assert_eq!(stats.files_skipped_exclude, 1);
        assert_eq!(stats.files_skipped_depth, 0);
    }

    #[test]
    fn test_scanner_max_depth() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "top.txt", "t");
        touch(root, "d1/a.txt", "a");
        touch(root, "d1/d2/b.txt", "b");

        assert_eq!(scan_with(root, FilterConfig::new().max_depth(Some(1))), vec!["d1/a.txt", "top.txt"]);
        assert_eq!(scan_with(root, FilterConfig::new().max_depth(Some(0))), vec!["top.txt"]);
        assert_eq!(
            scan_with(root, FilterConfig::new().max_depth(None)),
            vec!["d1/a.txt", "d1/d2/b.txt", "top.txt"]
        );
    }

    #[test]
    fn test_scanner_hidden_directory_hides_children() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, ".cache/visible.txt", "v");
        touch(root, "src/.keep", "");
        touch(root, "src/lib.rs", "pub fn x() {}");

        let mut scanner = FileScanner::new(root);
        assert_eq!(scanner.scan().unwrap(), vec!["src/lib.rs"]);
        assert_eq!(scanner.stats().dirs_pruned, 1);
    }

    #[test]
    fn test_scanner_prunes_recursive_excludes() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "build/out/app.o", "o");
        touch(root, "web/node_modules/pkg/index.js", "js");
        touch(root, "web/app.js", "js");
        touch(root, "src/build.rs", "fn main() {}");
        touch(root, "dist", "a file, not a directory");

        let config = FilterConfig::new().exclude(vec![
            "build/**".into(),
            "dist/**".into(),
            "**/node_modules/**".into(),
        ]);
        let mut scanner = FileScanner::new(root).config(config);
        let files = scanner.scan().unwrap();

        assert_eq!(files, vec!["dist", "src/build.rs", "web/app.js"]);
        assert_eq!(scanner.stats().dirs_pruned, 2);
    }

    #[test]
    fn test_scanner_missing_root_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        let mut scanner = FileScanner::new(&missing);
        assert!(scanner.scan().unwrap().is_empty());
    }

    #[test]
    fn test_scanner_invalid_pattern_errors() {
        let temp_dir = TempDir::new().unwrap();
        let mut scanner =
            FileScanner::new(temp_dir.path()).config(FilterConfig::new().include(vec!["[".into()]));
        assert!(matches!(scanner.scan(), Err(ScanError::InvalidPattern { .. })));
    }

    #[test]
    fn test_scanner_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for rel in ["b/2.txt", "a/1.txt", "c.txt", "a/b/3.txt"] {
            touch(root, rel, "x");
        }
        let first = scan_with(root, FilterConfig::default());
        let second = scan_with(root, FilterConfig::default());
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
    }

    #[cfg(unix)]
    #[test]
    fn test_scanner_symlinks() {
        use std::os::unix::fs::symlink;

        let outside = TempDir::new().unwrap();
        touch(outside.path(), "secret.txt", "s");
        touch(outside.path(), "shared/data.csv", "1,2");

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "real.txt", "r");
        touch(root, "inner/x.txt", "x");
        symlink(root.join("real.txt"), root.join("alias.txt")).unwrap();
        symlink(outside.path().join("secret.txt"), root.join("leak.txt")).unwrap();
        symlink(outside.path().join("shared"), root.join("shared")).unwrap();
        symlink(root.join("inner"), root.join("inner-link")).unwrap();

        // Links to files are listed where they appear; linked dirs are not entered.
        assert_eq!(
            scan_with(root, FilterConfig::default()),
            vec!["alias.txt", "inner/x.txt", "leak.txt", "real.txt"]
        );

        assert_eq!(
            scan_with(root, FilterConfig::new().follow_symlinks(true)),
            vec![
                "alias.txt",
                "inner-link/x.txt",
                "inner/x.txt",
                "leak.txt",
                "real.txt",
                "shared/data.csv"
            ]
        );

        let mut scanner = FileScanner::new(root)
            .config(FilterConfig::new().follow_symlinks(true).exclude_external_symlinks(true));
        assert_eq!(
            scanner.scan().unwrap(),
            vec!["alias.txt", "inner-link/x.txt", "inner/x.txt", "real.txt"]
        );
        assert_eq!(scanner.stats().files_skipped_symlink, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_scanner_survives_symlink_loop() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "loop/file.txt", "f");
        symlink(root.join("loop"), root.join("loop/again")).unwrap();

        let mut scanner = FileScanner::new(root).config(FilterConfig::new().follow_symlinks(true));
        let files = scanner.scan().unwrap();
        assert_eq!(files, vec!["loop/file.txt"]);
        assert_eq!(scanner.stats().entries_failed, 1);
        assert_eq!(scanner.stats().warnings[0].kind, WarningKind::SymlinkLoop);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_scanner_keeps_non_utf8_names_apart() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(OsStr::from_bytes(b"a\xff.bin")), "").unwrap();
        fs::write(root.join(OsStr::from_bytes(b"a\xfe.bin")), "data").unwrap();
        touch(root, "ok.txt", "ok");

        let files = FileScanner::new(root).scan_files().unwrap();
        assert_eq!(files.len(), 3);
        assert_eq!(files[0].relative_path, "a\u{FFFD}.bin");
        assert_eq!(files[1].relative_path, "a\u{FFFD}.bin");
        assert_ne!(files[0].path, files[1].path);
        assert_eq!(files[2].relative_path, "ok.txt");
        assert!(files.iter().all(|f| f.path.exists()));
    }
}
