use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Command name used when the user's preferred editor is not a Vim variant
pub const CANONICAL_EDITOR: &str = "vim";

/// Default plugin root, relative to the home directory
const DEFAULT_ROOT_DIR: &str = ".vim";

/// The user's home directory, if one can be determined
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Get the default plugin root (~/.vim)
pub fn default_root() -> Result<PathBuf> {
    default_root_internal(home_dir().as_deref())
}

/// Internal implementation that accepts the home directory explicitly
pub(crate) fn default_root_internal(home: Option<&Path>) -> Result<PathBuf> {
    let home = home.context("HOME environment variable not set")?;
    Ok(home.join(DEFAULT_ROOT_DIR))
}

/// Picks the editor command to launch.
///
/// The preferred command is used only when its name contains `canonical`,
/// compared case-insensitively (so `nvim`, `gvim` and `/usr/bin/MacVim` all
/// qualify for `vim`). Anything else falls back to `canonical`.
pub fn select_editor(preferred: Option<&str>, canonical: &str) -> String {
    match preferred {
        Some(p) if p.to_lowercase().contains(&canonical.to_lowercase()) => p.to_string(),
        _ => canonical.to_string(),
    }
}

/// Editor command for this process, from `$EDITOR` with the Vim fallback
pub fn editor_from_env() -> String {
    let preferred = env::var("EDITOR").ok();
    select_editor(preferred.as_deref(), CANONICAL_EDITOR)
}
