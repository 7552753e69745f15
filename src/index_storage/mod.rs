//! Cached documentation index for shell completion
//!
//! The completion front end asks for the full label list on every tab press, so
//! the index is persisted as a single JSON record and reused until it is older
//! than the configured number of days. Lookups for help/edit never use it.
//!
//! Cache location: platform-specific cache directories
//! - macOS: `~/Library/Caches/vman/`
//! - Linux: `~/.cache/vman/`
//! - Windows: `%LOCALAPPDATA%\vman\`

pub mod manager;
pub mod metadata;
pub mod persistence;

pub use manager::{CACHE_KEY, CacheManager};
pub use metadata::{CacheRecord, CacheState, DEFAULT_EXPIRE_DAYS, effective_expire_days};
pub use persistence::{CacheStore, JsonFileStore, MemoryStore};
