//! Single-value cache with TTL (Time To Live) support.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Snapshot<V> {
    value: V,
    loaded_at: Instant,
}

/// A thread-safe holder for one value that expires after the configured TTL.
///
/// Cloning is cheap and clones share the same slot. A TTL of zero disables
/// caching: `get` never returns a value.
///
/// Store large values behind an `Arc` so that `get` only bumps a reference count:
/// ```ignore
/// let cache = SnapshotCache::<Arc<Vec<Person>>>::new(30);
/// cache.insert(Arc::new(persons));
/// ```
#[derive(Clone)]
pub struct SnapshotCache<V: Clone> {
    slot: Arc<RwLock<Option<Snapshot<V>>>>,
    ttl: Duration,
}

impl<V: Clone> SnapshotCache<V> {
    /// Create a new SnapshotCache with the specified TTL in seconds.
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            ttl: Duration::from_secs(ttl_seconds),
        }
    }

    /// Replace the cached value.
    pub fn insert(&self, value: V) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(Snapshot {
                value,
                loaded_at: Instant::now(),
            });
        }
    }

    /// Get the cached value if present and younger than the TTL.
    pub fn get(&self) -> Option<V> {
        let slot = self.slot.read().ok()?;
        let snapshot = slot.as_ref()?;

        if snapshot.loaded_at.elapsed() < self.ttl {
            Some(snapshot.value.clone())
        } else {
            None
        }
    }

    /// Drop the cached value.
    pub fn invalidate(&self) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = None;
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<V: Clone> std::fmt::Debug for SnapshotCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached = self.slot.read().map(|s| s.is_some()).unwrap_or(false);
        f.debug_struct("SnapshotCache")
            .field("ttl", &self.ttl)
            .field("cached", &cached)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_insert_and_get() {
        let cache = SnapshotCache::new(60);
        assert_eq!(cache.get(), None);

        cache.insert(vec!["alice"]);
        assert_eq!(cache.get(), Some(vec!["alice"]));

        cache.insert(vec!["bob"]);
        assert_eq!(cache.get(), Some(vec!["bob"]));
    }

    #[test]
    fn test_ttl_expiration() {
        let cache = SnapshotCache::new(1);
        cache.insert(1);
        assert_eq!(cache.get(), Some(1));

        thread::sleep(Duration::from_millis(1100));

        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_zero_ttl_disables_caching() {
        let cache = SnapshotCache::new(0);
        cache.insert(1);
        assert_eq!(cache.get(), None);
        assert_eq!(cache.ttl(), Duration::ZERO);
    }

    #[test]
    fn test_invalidate() {
        let cache = SnapshotCache::new(60);
        cache.insert(1);
        cache.invalidate();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_clones_share_slot() {
        let cache1 = SnapshotCache::new(60);
        let cache2 = cache1.clone();

        cache2.insert("snapshot");
        assert_eq!(cache1.get(), Some("snapshot"));
    }

    #[test]
    fn test_debug_format() {
        let cache = SnapshotCache::new(60);
        cache.insert(1);

        let debug_str = format!("{:?}", cache);
        assert!(debug_str.contains("SnapshotCache"));
        assert!(debug_str.contains("cached: true"));
    }
}
