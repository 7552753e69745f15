//! Index builder for plugin documentation.
//!
//! # Error Handling Strategy
//!
//! Building never fails. Roots that are missing, unreadable directories and
//! broken symlinks simply contribute no entries, so a half-installed plugin never
//! hides the documentation of the others.

use std::path::{Path, PathBuf};

use crate::indexer::roots::resolve_roots;
use crate::indexer::scanner::{DEFAULT_EXTENSIONS, EXCLUDED_DIR_NAME, scan};
use crate::models::DocIndex;

/// Build a fresh documentation index from the configured roots.
///
/// `default_root` is always scanned after the configured roots. Every call is a
/// full rescan; nothing is reused from earlier builds.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use vman::build_index;
///
/// let index = build_index(&[PathBuf::from("/opt/vim-plugins")], &PathBuf::from("/home/alice/.vim"));
/// println!("Indexed {} documentation files", index.len());
/// ```
pub fn build_index(configured: &[PathBuf], default_root: &Path) -> DocIndex {
    let roots = resolve_roots(configured, default_root);
    DocIndex::new(scan(&roots, EXCLUDED_DIR_NAME, DEFAULT_EXTENSIONS))
}
