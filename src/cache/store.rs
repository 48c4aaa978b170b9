//! In-memory response cache
//!
//! A bounded map of serialized payloads with per-entry expiration.
//! Entries past their deadline are treated as absent and evicted lazily
//! on the read or write that encounters them, so a quiet cache may
//! report expired entries in its stats until they are touched again.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Default upper bound on stored entries
pub const DEFAULT_MAX_ENTRIES: usize = 512;

#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Vec<u8>,
    expires_at: DateTime<Utc>,
}

/// Thread-safe TTL cache keyed by strings from [`crate::cache::key`]
#[derive(Debug)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    max_entries: usize,
}

/// Snapshot of cache contents for `deckhand cache stats`
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
    pub total_size_bytes: usize,
    pub keys: Vec<String>,
}

/// Result of wiping the cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearStats {
    pub entries_removed: usize,
}

impl ResponseCache {
    /// Create a cache holding at most `max_entries` payloads
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            // A zero bound would make every put a no-op
            max_entries: max_entries.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // A panic while holding the lock leaves plain data behind,
        // so recover the guard instead of propagating the poison.
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Fetch a payload if present and not expired.
    ///
    /// Expired entries are removed on sight.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let now = Utc::now();
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > now => Some(entry.payload.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a payload under `key` for `ttl`.
    ///
    /// Overwrites any existing entry. When the cache is full and `key`
    /// is new, expired entries are purged first and then the entry
    /// closest to expiry is evicted.
    pub fn put(&self, key: &str, payload: Vec<u8>, ttl: Duration) {
        let now = Utc::now();
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut entries = self.lock();
        if !entries.contains_key(key) && entries.len() >= self.max_entries {
            Self::make_room(&mut entries, now);
        }
        entries.insert(key.to_string(), CacheEntry { payload, expires_at });
    }

    fn make_room(entries: &mut HashMap<String, CacheEntry>, now: DateTime<Utc>) {
        entries.retain(|_, entry| entry.expires_at > now);
        if entries.is_empty() {
            return;
        }
        let evict = entries
            .iter()
            .min_by_key(|(_, entry)| entry.expires_at)
            .map(|(key, _)| key.clone());
        if let Some(key) = evict {
            entries.remove(&key);
        }
    }

    /// Remove a single entry, returning whether it was present
    pub fn remove(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    /// Drop every entry
    pub fn clear_all(&self) -> ClearStats {
        let mut entries = self.lock();
        let entries_removed = entries.len();
        entries.clear();
        ClearStats { entries_removed }
    }

    /// Counts and keys for the stats command.
    ///
    /// Expired entries that have not been touched since their deadline
    /// still appear in the totals.
    pub fn stats(&self) -> CacheStats {
        let now = Utc::now();
        let entries = self.lock();
        let total_entries = entries.len();
        let valid_entries = entries
            .values()
            .filter(|entry| entry.expires_at > now)
            .count();
        let total_size_bytes = entries.values().map(|entry| entry.payload.len()).sum();
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        CacheStats {
            total_entries,
            valid_entries,
            expired_entries: total_entries - valid_entries,
            total_size_bytes,
            keys,
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}
