//! In-memory LRU geocode cache
//!
//! Bounded by entry count. A capacity of zero turns the cache into a no-op
//! so that every lookup reaches the geocoder.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use application::ports::{GeocodeCachePort, GeocodeCacheStats};
use domain::Coordinate;
use lru::LruCache;
use parking_lot::Mutex;
use tracing::trace;

/// Thread-safe LRU cache of geocoding results
pub struct LruGeocodeCache {
    cache: Option<Mutex<LruCache<String, Coordinate>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl std::fmt::Debug for LruGeocodeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruGeocodeCache")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

impl LruGeocodeCache {
    /// Create a cache holding at most `capacity` entries
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

impl GeocodeCachePort for LruGeocodeCache {
    fn get(&self, key: &str) -> Option<Coordinate> {
        let cache = self.cache.as_ref()?;
        let found = cache.lock().get(key).copied();
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        trace!(%key, hit = found.is_some(), "Geocode cache lookup");
        found
    }

    fn put(&self, key: &str, coordinate: Coordinate) {
        if let Some(cache) = &self.cache {
            if let Some((evicted, _)) = cache.lock().push(key.to_string(), coordinate) {
                if evicted != key {
                    trace!(%evicted, "Evicted least recently used geocode");
                }
            }
        }
    }

    fn clear(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().clear();
        }
    }

    fn stats(&self) -> GeocodeCacheStats {
        let (entries, capacity) = self.cache.as_ref().map_or((0, 0), |cache| {
            let cache = cache.lock();
            (cache.len(), cache.cap().get())
        });
        GeocodeCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries,
            capacity,
        }
    }
}
