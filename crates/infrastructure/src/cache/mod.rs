//! Geocode caching

mod lru_geocode_cache;

pub use lru_geocode_cache::LruGeocodeCache;
