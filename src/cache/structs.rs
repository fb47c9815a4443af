use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::debug;
use serde_json::Value;

/// In-memory store of parsed API responses keyed by full request URL.
///
/// One instance is created at process start and shared (`Arc`) by every
/// concurrent invocation. Entries expire passively: a lookup past the TTL
/// misses and the next fetch overwrites the entry. Two concurrent cold
/// fetches of the same URL may both miss and both insert; the overwrite is
/// idempotent.
pub struct TtlCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

#[derive(Clone)]
struct CacheEntry {
    payload: Value,
    fetched_at: Instant,
}

impl TtlCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached payload if it is still fresh
    pub fn get(&self, url: &str) -> Option<Value> {
        self.get_at(url, Instant::now())
    }

    /// Store a payload, replacing any previous entry for the URL
    pub fn insert(&self, url: &str, payload: Value) {
        self.insert_at(url, payload, Instant::now());
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_at(&self, url: &str, now: Instant) -> Option<Value> {
        let entries = self.entries.lock().expect("cache lock poisoned");
        let entry = entries.get(url)?;
        if now.duration_since(entry.fetched_at) < self.ttl {
            debug!("Cache hit for {}", url);
            Some(entry.payload.clone())
        } else {
            debug!("Cache entry expired for {}", url);
            None
        }
    }

    fn insert_at(&self, url: &str, payload: Value, now: Instant) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            url.to_string(),
            CacheEntry {
                payload,
                fetched_at: now,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://app.dartsorakel.com/api/stats/player?rankKey=25";

    #[test]
    fn fresh_entry_is_served() {
        let cache = TtlCache::new(Duration::from_secs(3600));
        cache.insert(URL, json!({"data": []}));

        assert_eq!(cache.get(URL), Some(json!({"data": []})));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn expired_entry_misses() {
        let cache = TtlCache::new(Duration::from_secs(3600));
        let fetched = Instant::now();
        cache.insert_at(URL, json!(1), fetched);

        let just_before = fetched + Duration::from_secs(3599);
        assert_eq!(cache.get_at(URL, just_before), Some(json!(1)));

        let just_after = fetched + Duration::from_secs(3600);
        assert_eq!(cache.get_at(URL, just_after), None);
    }

    #[test]
    fn insert_overwrites_previous_entry() {
        let cache = TtlCache::new(Duration::from_secs(3600));
        cache.insert(URL, json!(1));
        cache.insert(URL, json!(2));

        assert_eq!(cache.get(URL), Some(json!(2)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn unknown_url_misses() {
        let cache = TtlCache::new(Duration::from_secs(3600));
        assert_eq!(cache.get(URL), None);
        assert!(cache.is_empty());
    }
}
