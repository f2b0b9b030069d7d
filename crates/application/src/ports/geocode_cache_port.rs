//! Geocode cache port
//!
//! A bounded lookup table from normalized place names to coordinates.
//! Implementations must be safe to share between tasks.

use domain::Coordinate;
#[cfg(test)]
use mockall::automock;

/// Hit and miss counters of a geocode cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeocodeCacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to go to the geocoder
    pub misses: u64,
    /// Current number of entries
    pub entries: usize,
    /// Maximum number of entries
    pub capacity: usize,
}

impl GeocodeCacheStats {
    /// Hit rate between 0.0 and 1.0
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Cache port for geocoding results
#[cfg_attr(test, automock)]
pub trait GeocodeCachePort: Send + Sync {
    /// Cached coordinate for `key`, marking it most recently used
    fn get(&self, key: &str) -> Option<Coordinate>;

    /// Store a coordinate, evicting the least recently used entry when full
    fn put(&self, key: &str, coordinate: Coordinate);

    /// Drop all entries
    fn clear(&self);

    /// Current counters
    fn stats(&self) -> GeocodeCacheStats;
}
