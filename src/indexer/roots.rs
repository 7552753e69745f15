use std::path::{Path, PathBuf};

/// Builds the ordered root directory set to scan.
///
/// Configured roots come first, followed by `default_root`, which is appended
/// unconditionally. Duplicates are dropped keeping the first occurrence. No
/// filesystem access happens here: roots that do not exist are skipped later by
/// the scanner.
pub fn resolve_roots(configured: &[PathBuf], default_root: &Path) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = Vec::with_capacity(configured.len() + 1);
    for root in configured.iter().map(PathBuf::as_path).chain(std::iter::once(default_root)) {
        if !roots.iter().any(|r| r == root) {
            roots.push(root.to_path_buf());
        }
    }
    roots
}
