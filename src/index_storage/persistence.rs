//! Cache persistence: the store abstraction and its JSON file implementation

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::metadata::{CACHE_VERSION, CacheRecord};

/// Directory name under the platform cache directory
const CACHE_DIR_NAME: &str = "vman";

/// Key/value storage for cache records
pub trait CacheStore {
    /// Load the record stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing usable is stored (caller should rebuild).
    fn load(&self, key: &str) -> Result<Option<CacheRecord>>;

    /// Replace whatever is stored under `key` with `record`
    fn save(&mut self, key: &str, record: &CacheRecord) -> Result<()>;
}

/// Stores each record as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store in the platform cache directory
    /// - macOS: `~/Library/Caches/vman/`
    /// - Linux: `~/.cache/vman/` (or `$XDG_CACHE_HOME/vman/`)
    /// - Windows: `%LOCALAPPDATA%\vman\`
    pub fn in_cache_dir() -> Result<Self> {
        let cache_base = dirs::cache_dir().context("Failed to get platform cache directory")?;
        Ok(Self::new(cache_base.join(CACHE_DIR_NAME)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get path to the file holding `key`
    pub fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl CacheStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<CacheRecord>> {
        let path = self.record_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache file: {}", path.display()))?;
        let record: CacheRecord = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse cache file: {}", path.display()))?;

        // Check version compatibility
        if record.version != CACHE_VERSION {
            eprintln!(
                "Cache version mismatch (expected {}, found {}), rebuilding index",
                CACHE_VERSION, record.version
            );
            return Ok(None);
        }

        Ok(Some(record))
    }

    fn save(&mut self, key: &str, record: &CacheRecord) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create cache directory: {}", self.dir.display())
        })?;

        // Write atomically (temp file + rename)
        let path = self.record_path(key);
        let temp = self.dir.join(format!("{}.json.tmp", key));
        let json = serde_json::to_string(record).context("Failed to serialize cache record")?;
        fs::write(&temp, json).context("Failed to write cache temp file")?;
        fs::rename(&temp, &path).context("Failed to rename cache temp file")?;

        Ok(())
    }
}

/// Process-local store, used where nothing should touch the disk
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, CacheRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<CacheRecord>> {
        Ok(self.records.get(key).cloned())
    }

    fn save(&mut self, key: &str, record: &CacheRecord) -> Result<()> {
        self.records.insert(key.to_string(), record.clone());
        Ok(())
    }
}
