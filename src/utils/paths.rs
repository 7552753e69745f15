use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::utils::environment::home_dir;

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use vman::format_path_with_tilde;
///
/// let path = PathBuf::from("/home/alice/.vim/doc");
/// // Returns "~/.vim/doc" if HOME=/home/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = home_dir();
    let home = match home_override {
        Some(home) => Some(PathBuf::from(home)),
        None => home_from_env,
    };

    // Component-wise match so /home/al does not collapse /home/alice
    if let Some(home) = home.filter(|h| !h.as_os_str().is_empty())
        && let Ok(rest) = path.strip_prefix(&home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.to_string_lossy());
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

/// Expands a leading `~` or `~/` against the home directory.
///
/// Paths without a leading tilde, and `~user` forms, are returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_internal(path, home_dir().as_deref())
}

pub(crate) fn expand_tilde_internal(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };
    if path == "~" {
        return home.to_path_buf();
    }
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}
