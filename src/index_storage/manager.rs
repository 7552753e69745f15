//! Time-based invalidation of the cached documentation index

use anyhow::Result;
use chrono::{DateTime, Utc};

use super::metadata::{CacheRecord, CacheState};
use super::persistence::CacheStore;
use crate::models::DocIndex;

/// Key under which the completion index is stored
pub const CACHE_KEY: &str = "vman-docs";

/// Owns the lifecycle of the single cached index record.
///
/// The record is all-or-nothing: it is served while fresh and replaced by a
/// full rebuild once stale. Store failures never prevent an index from being
/// returned; they are reported on stderr and the freshly built index is used.
pub struct CacheManager<S: CacheStore> {
    store: S,
    expire_days: i64,
}

impl<S: CacheStore> CacheManager<S> {
    /// `expire_days` should already be normalized (see `effective_expire_days`)
    pub fn new(store: S, expire_days: i64) -> Self {
        Self { store, expire_days }
    }

    pub fn expire_days(&self) -> i64 {
        self.expire_days
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current state of the persisted record at `now`
    pub fn state(&self, now: DateTime<Utc>) -> Result<CacheState> {
        let record = self.store.load(CACHE_KEY)?;
        Ok(CacheState::of(record.as_ref(), now, self.expire_days))
    }

    /// Return the cached index if fresh, otherwise build, persist and return a new one
    pub fn get_or_build<F>(&mut self, now: DateTime<Utc>, build_fn: F) -> DocIndex
    where
        F: FnOnce() -> DocIndex,
    {
        let record = match self.store.load(CACHE_KEY) {
            Ok(record) => record,
            Err(e) => {
                eprintln!("Warning: Ignoring unreadable cache: {:#}", e);
                None
            }
        };

        match CacheState::of(record.as_ref(), now, self.expire_days) {
            CacheState::Fresh => match record {
                Some(record) => record.index,
                None => self.rebuild(now, build_fn),
            },
            CacheState::Absent | CacheState::Stale => self.rebuild(now, build_fn),
        }
    }

    /// Unconditionally rebuild and overwrite the record
    pub fn rebuild<F>(&mut self, now: DateTime<Utc>, build_fn: F) -> DocIndex
    where
        F: FnOnce() -> DocIndex,
    {
        let index = build_fn();
        let record = CacheRecord::new(now, index);
        if let Err(e) = self.store.save(CACHE_KEY, &record) {
            eprintln!("Warning: Failed to write cache: {:#}", e);
        }
        record.index
    }
}
