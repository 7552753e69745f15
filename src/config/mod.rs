//! User configuration under the `vman` namespace
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. `<config_dir>/vman/config.json` (e.g. `~/.config/vman/config.json`)
//! 3. `VMAN_DIR`, `VMAN_VERBOSE` and `VMAN_EXPIRE` environment variables
//!
//! ```json
//! { "dir": ["~/.cache/dein/repos", "/opt/vim-plugins"], "verbose": true, "expire": 14 }
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::index_storage::effective_expire_days;
use crate::utils::home_dir;
use crate::utils::paths::expand_tilde_internal;

const CONFIG_DIR_NAME: &str = "vman";
const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_DIR: &str = "VMAN_DIR";
pub const ENV_VERBOSE: &str = "VMAN_VERBOSE";
pub const ENV_EXPIRE: &str = "VMAN_EXPIRE";

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Extra plugin roots, scanned before the default root
    pub dirs: Vec<PathBuf>,
    /// Annotate completion labels with their source directory
    pub verbose: bool,
    /// Days before the completion cache is rebuilt (always positive)
    pub expire_days: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self { dirs: Vec::new(), verbose: false, expire_days: effective_expire_days(None) }
    }
}

/// `dir` accepts a single path or a list of paths
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DirSetting {
    One(String),
    Many(Vec<String>),
}

/// On-disk shape of config.json. Every key is optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    dir: Option<DirSetting>,
    #[serde(default)]
    verbose: Option<bool>,
    /// Kept loose so that bad values fall back to the default instead of failing
    #[serde(default)]
    expire: Option<Value>,
}

/// Get the config file path (`<config_dir>/vman/config.json`)
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl Settings {
    /// Load settings from the default config file and the process environment
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();
        Self::from_sources(config_path.as_deref(), |key| env::var(key).ok(), home_dir().as_deref())
    }

    /// Load settings from an explicit config file and environment lookup.
    ///
    /// A missing config file is not an error; a malformed one is.
    pub fn from_sources<F>(config_path: Option<&Path>, env_lookup: F, home: Option<&Path>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = match config_path {
            Some(path) if path.is_file() => read_config_file(path)?,
            _ => RawConfig::default(),
        };

        let mut dirs: Vec<String> = match raw.dir {
            Some(DirSetting::One(dir)) => vec![dir],
            Some(DirSetting::Many(dirs)) => dirs,
            None => Vec::new(),
        };
        let mut verbose = raw.verbose.unwrap_or(false);
        let mut expire = raw.expire.as_ref().and_then(parse_expire);

        if let Some(value) = env_lookup(ENV_DIR) {
            dirs = env::split_paths(&value)
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
        }
        if let Some(value) = env_lookup(ENV_VERBOSE) {
            verbose = parse_bool(&value);
        }
        if let Some(value) = env_lookup(ENV_EXPIRE) {
            expire = parse_expire(&Value::String(value));
        }

        Ok(Self {
            dirs: dirs.iter().map(|d| absolutize(expand_tilde_internal(d, home))).collect(),
            verbose,
            expire_days: effective_expire_days(expire),
        })
    }
}

fn read_config_file(path: &Path) -> Result<RawConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Integer days from a number or numeric string; anything else is `None`
fn parse_expire(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn absolutize(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    std::path::absolute(&path).unwrap_or(path)
}
