// libviet/src/cache.rs
//
// Bounded LRU result cache with hit/miss accounting. Lookups take `&self`
// so an `Engine` can be shared between threads.

use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

impl CacheStats {
    /// Hit rate as a percentage (0.0 to 100.0), `None` before any lookup.
    pub fn hit_rate(&self) -> Option<f32> {
        let total = self.hits + self.misses;
        if total == 0 {
            None
        } else {
            Some((self.hits as f32 / total as f32) * 100.0)
        }
    }
}

struct Inner<K: Hash + Eq, V> {
    lru: LruCache<K, V>,
    stats: CacheStats,
}

pub struct BoundedCache<K: Hash + Eq, V> {
    inner: Mutex<Inner<K, V>>,
}

impl<K: Hash + Eq, V: Clone> BoundedCache<K, V> {
    /// A capacity of 0 falls back to 1000 entries.
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(DEFAULT_CAPACITY);
        Self {
            inner: Mutex::new(Inner {
                lru: LruCache::new(cap),
                stats: CacheStats::default(),
            }),
        }
    }

    /// Cached value for `key`, computing and storing it on a miss.
    ///
    /// The lock is released while `compute` runs.
    pub fn get_or_insert_with<F: FnOnce() -> V>(&self, key: K, compute: F) -> V {
        {
            let mut inner = self.inner.lock();
            if let Some(v) = inner.lru.get(&key) {
                let v = v.clone();
                inner.stats.hits += 1;
                return v;
            }
            inner.stats.misses += 1;
        }

        let value = compute();
        self.inner.lock().lru.put(key, value.clone());
        value
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats
    }

    pub fn len(&self) -> usize {
        self.inner.lock().lru.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().lru.cap().get()
    }

    /// Drop all entries and reset the statistics.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.lru.clear();
        inner.stats = CacheStats::default();
    }
}

impl<K: Hash + Eq, V> std::fmt::Debug for BoundedCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("BoundedCache")
            .field("len", &inner.lru.len())
            .field("capacity", &inner.lru.cap())
            .field("stats", &inner.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_hits_and_misses() {
        let cache: BoundedCache<String, usize> = BoundedCache::new(4);
        assert_eq!(cache.get_or_insert_with("a".into(), || 1), 1);
        assert_eq!(cache.get_or_insert_with("a".into(), || 99), 1);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(cache.stats().hit_rate(), Some(50.0));
    }

    #[test]
    fn evicts_least_recently_used() {
        let cache: BoundedCache<u32, u32> = BoundedCache::new(2);
        cache.get_or_insert_with(1, || 1);
        cache.get_or_insert_with(2, || 2);
        cache.get_or_insert_with(1, || 0); // touch 1
        cache.get_or_insert_with(3, || 3); // evicts 2
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_or_insert_with(2, || 20), 20);
    }

    #[test]
    fn clear_resets_everything() {
        let cache: BoundedCache<u32, u32> = BoundedCache::new(0);
        assert_eq!(cache.capacity(), 1000);
        cache.get_or_insert_with(1, || 1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().hit_rate(), None);
    }
}
