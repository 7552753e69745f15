use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::models::DocEntry;

/// Name of the directories holding plugin documentation
pub const DOC_DIR_NAME: &str = "doc";

/// dein.vim keeps a merged copy of every plugin here; scanning it would report
/// each help file twice
pub const EXCLUDED_DIR_NAME: &str = ".dein";

/// Extensions of Vim help files (`jax` is used by Japanese translations)
pub const DEFAULT_EXTENSIONS: &[&str] = &["txt", "jax"];

/// Scan every root for documentation files.
///
/// Roots are walked in order, following symbolic links. A directory named
/// `exclude_name` is never entered or reported. Every other directory named
/// exactly `doc` contributes its immediate file children whose extension is in
/// `allowed_extensions` (case-sensitive).
///
/// Missing roots and unreadable subtrees are skipped silently; a scan never
/// fails as a whole. Directory entries are visited sorted by file name so that
/// repeated scans of the same tree produce the same order.
pub fn scan(roots: &[PathBuf], exclude_name: &str, allowed_extensions: &[&str]) -> Vec<DocEntry> {
    let mut entries = Vec::new();

    for root in roots {
        if !root.is_dir() {
            continue;
        }

        for doc_dir in find_doc_dirs(root, exclude_name) {
            entries.extend(list_doc_files(&doc_dir, allowed_extensions));
        }
    }

    entries
}

/// Walk `root` and collect every `doc` directory outside excluded subtrees
fn find_doc_dirs(root: &Path, exclude_name: &str) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry, exclude_name))
        // Permission errors and symlink loops only cost the affected subtree
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir() && entry.file_name() == OsStr::new(DOC_DIR_NAME))
        .map(DirEntry::into_path)
        .collect()
}

fn is_excluded(entry: &DirEntry, exclude_name: &str) -> bool {
    entry.file_type().is_dir() && entry.file_name() == OsStr::new(exclude_name)
}

/// Non-recursive listing of the qualifying files in one `doc` directory
fn list_doc_files(doc_dir: &Path, allowed_extensions: &[&str]) -> Vec<DocEntry> {
    let Ok(read_dir) = fs::read_dir(doc_dir) else {
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = read_dir.filter_map(Result::ok).map(|e| e.path()).collect();
    paths.sort();

    paths
        .into_iter()
        .filter(|path| path.is_file())
        .filter_map(|path| {
            // Names that are not valid UTF-8 cannot be typed back as lookup keys
            let name = path.file_name()?.to_str()?.to_string();
            let extension = path.extension()?.to_str()?;
            if !allowed_extensions.contains(&extension) {
                return None;
            }
            Some(DocEntry::new(name, extension, doc_dir.to_path_buf()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "*help*").unwrap();
    }

    fn names(entries: &[DocEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_scan_finds_doc_files() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("bundle/vim-foo/doc/foo.txt"));
        touch(&temp.path().join("bundle/vim-bar/doc/bar.jax"));

        let entries = scan(&[temp.path().to_path_buf()], EXCLUDED_DIR_NAME, DEFAULT_EXTENSIONS);
        assert_eq!(names(&entries), vec!["bar.jax", "foo.txt"]);
        assert_eq!(entries[1].source_dir, temp.path().join("bundle/vim-foo/doc"));
        assert_eq!(entries[1].extension, "txt");
    }

    #[test]
    fn test_scan_filters_extensions_case_sensitively() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("doc");
        touch(&doc.join("keep.txt"));
        touch(&doc.join("keep.jax"));
        touch(&doc.join("tags"));
        touch(&doc.join("readme.md"));
        touch(&doc.join("upper.TXT"));

        let entries = scan(&[temp.path().to_path_buf()], EXCLUDED_DIR_NAME, DEFAULT_EXTENSIONS);
        assert_eq!(names(&entries), vec!["keep.jax", "keep.txt"]);
    }

    #[test]
    fn test_scan_prunes_excluded_subtree() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("doc/foo.txt"));
        touch(&temp.path().join(".dein/doc/bar.txt"));
        touch(&temp.path().join(".dein/repos/x/doc/baz.txt"));

        let entries = scan(&[temp.path().to_path_buf()], EXCLUDED_DIR_NAME, DEFAULT_EXTENSIONS);
        assert_eq!(names(&entries), vec!["foo.txt"]);
        assert_eq!(entries[0].source_dir, temp.path().join("doc"));
    }

    #[test]
    fn test_excluded_name_is_exact_match() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join(".dein-extra/doc/kept.txt"));
        touch(&temp.path().join(".DEIN/doc/also.txt"));

        let entries = scan(&[temp.path().to_path_buf()], EXCLUDED_DIR_NAME, DEFAULT_EXTENSIONS);
        assert_eq!(names(&entries), vec!["also.txt", "kept.txt"]);
    }

    #[test]
    fn test_doc_listing_is_not_recursive() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("doc/top.txt"));
        touch(&temp.path().join("doc/nested/deep.txt"));

        let entries = scan(&[temp.path().to_path_buf()], EXCLUDED_DIR_NAME, DEFAULT_EXTENSIONS);
        assert_eq!(names(&entries), vec!["top.txt"]);
    }

    #[test]
    fn test_missing_roots_are_skipped() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("doc/foo.txt"));
        let file_root = temp.path().join("doc/foo.txt");

        let roots =
            vec![temp.path().join("missing"), file_root, temp.path().to_path_buf()];
        let entries = scan(&roots, EXCLUDED_DIR_NAME, DEFAULT_EXTENSIONS);
        assert_eq!(names(&entries), vec!["foo.txt"]);
    }

    #[test]
    fn test_roots_processed_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        touch(&first.path().join("doc/zzz.txt"));
        touch(&second.path().join("doc/aaa.txt"));

        let roots = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let entries = scan(&roots, EXCLUDED_DIR_NAME, DEFAULT_EXTENSIONS);
        assert_eq!(names(&entries), vec!["zzz.txt", "aaa.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_symlinks() {
        let plugins = TempDir::new().unwrap();
        let root = TempDir::new().unwrap();
        touch(&plugins.path().join("vim-foo/doc/foo.txt"));
        std::os::unix::fs::symlink(plugins.path().join("vim-foo"), root.path().join("foo"))
            .unwrap();

        let entries = scan(&[root.path().to_path_buf()], EXCLUDED_DIR_NAME, DEFAULT_EXTENSIONS);
        assert_eq!(names(&entries), vec!["foo.txt"]);
        assert_eq!(entries[0].source_dir, root.path().join("foo/doc"));
    }
}
