//! Content cache keyed by identifier and validated by file modification time
//!
//! Parsed content is memoized per identifier together with the modification
//! time of the file it was read from. An entry is served only while the file on
//! disk still reports the same mtime; otherwise the caller re-reads the file and
//! overwrites the entry. There is no other eviction.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::RwLock;
use std::time::SystemTime;

/// A cached value together with the mtime it was read at
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub mtime: SystemTime,
}

/// Whether an entry read at `cached` is still valid for a file now at `current`
pub fn is_fresh(cached: SystemTime, current: Option<SystemTime>) -> bool {
    current == Some(cached)
}

/// Get a file's modification time
pub fn file_mtime(path: &Path) -> io::Result<SystemTime> {
    fs::metadata(path)?.modified()
}

/// Process-wide cache of parsed content
#[derive(Debug, Default)]
pub struct ContentCache<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> ContentCache<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Look up `key`, returning the value only if it is fresh for `current_mtime`
    pub fn get(&self, key: &str, current_mtime: Option<SystemTime>) -> Option<V> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        let entry = entries.get(key)?;
        if is_fresh(entry.mtime, current_mtime) {
            tracing::debug!("Cache hit: {}", key);
            Some(entry.value.clone())
        } else {
            tracing::debug!("Cache stale: {}", key);
            None
        }
    }

    /// Store `value` for `key`, replacing any previous entry as a whole
    pub fn insert(&self, key: &str, value: V, mtime: SystemTime) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), CacheEntry { value, mtime });
    }

    /// Serve from cache when fresh, otherwise run `load` and cache its result.
    ///
    /// `load` is only called on a miss. Load failures are returned and leave
    /// the cache untouched.
    pub fn get_or_load<E, F>(&self, key: &str, path: &Path, load: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
        E: From<io::Error>,
    {
        let current = file_mtime(path).ok();
        if let Some(value) = self.get(key, current) {
            return Ok(value);
        }

        let mtime = file_mtime(path)?;
        let value = load()?;
        self.insert(key, value.clone(), mtime);
        Ok(value)
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
