//! Path normalization

use std::path::Path;

/// Express `path` relative to `root` as a forward-slash string.
///
/// Returns `None` when `path` is not below `root` or is `root` itself.
pub fn relative_posix(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let joined = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// True if the canonical target of `path` lies under `canonical_root`.
///
/// Unresolvable paths (broken links, vanished entries) count as outside.
pub fn resolves_inside(path: &Path, canonical_root: &Path) -> bool {
    path.canonicalize().map(|target| target.starts_with(canonical_root)).unwrap_or(false)
}
