//! Cache record structures for staleness detection

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::DocIndex;

/// Cache schema version for invalidation on format changes
pub const CACHE_VERSION: u32 = 1;

/// Days a cached index stays fresh unless configured otherwise
pub const DEFAULT_EXPIRE_DAYS: i64 = 7;

/// A persisted index snapshot and the time it was built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub index: DocIndex,
}

impl CacheRecord {
    pub fn new(created_at: DateTime<Utc>, index: DocIndex) -> Self {
        Self { version: CACHE_VERSION, created_at, index }
    }

    /// True once the record is strictly older than `expire_days`.
    ///
    /// A record exactly `expire_days` old is still fresh. An expiration too large
    /// to represent never goes stale.
    pub fn is_stale(&self, now: DateTime<Utc>, expire_days: i64) -> bool {
        match Duration::try_days(expire_days) {
            Some(max_age) => now - self.created_at > max_age,
            None => false,
        }
    }
}

/// Freshness of the persisted record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Absent,
    Fresh,
    Stale,
}

impl CacheState {
    pub fn of(record: Option<&CacheRecord>, now: DateTime<Utc>, expire_days: i64) -> Self {
        match record {
            None => CacheState::Absent,
            Some(r) if r.is_stale(now, expire_days) => CacheState::Stale,
            Some(_) => CacheState::Fresh,
        }
    }
}

/// Normalizes a configured expiration: non-positive values fall back to the default
pub fn effective_expire_days(configured: Option<i64>) -> i64 {
    match configured {
        Some(days) if days > 0 => days,
        _ => DEFAULT_EXPIRE_DAYS,
    }
}
