//! Caching layer for directions responses.
//!
//! A planning burst (plan, re-plan with food stops, re-optimize) repeats the
//! same directions query. Cache keys bucket coordinates to four decimal
//! places (roughly 11 m) so nearly identical points share an entry while
//! cardinality stays bounded.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::directions::{DirectionsApi, DirectionsError, PlaceCandidate};
use crate::domain::{GeoPoint, RouteGeometry, TransportMode};

/// Cache key: transport mode plus the bucketed point chain.
type RouteKey = (TransportMode, String);

/// Configuration for the directions cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(120),
            max_capacity: 500,
        }
    }
}

/// Round a coordinate to a 4-decimal bucket.
fn bucket_coord(value: f64) -> i64 {
    (value * 10_000.0).round() as i64
}

/// Build the cache key for a directions query.
fn route_key(
    origin: &GeoPoint,
    destination: &GeoPoint,
    waypoints: &[GeoPoint],
    mode: TransportMode,
) -> RouteKey {
    let mut chain = String::new();
    let mut push = |p: &GeoPoint| {
        chain.push_str(&format!(
            "{}:{};",
            bucket_coord(p.latitude),
            bucket_coord(p.longitude)
        ));
    };
    push(origin);
    for waypoint in waypoints {
        push(waypoint);
    }
    push(destination);

    (mode, chain)
}

/// Directions provider with caching.
///
/// Wraps any `DirectionsApi` and caches successful directions results.
/// Errors are never cached, so a recovered provider is retried immediately.
/// Geocoding and place searches pass straight through.
pub struct CachedDirections<P> {
    inner: P,
    routes: MokaCache<RouteKey, Arc<RouteGeometry>>,
}

impl<P: DirectionsApi> CachedDirections<P> {
    /// Create a new caching wrapper.
    pub fn new(inner: P, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, routes }
    }

    /// Access the wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of cached route entries.
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Drop all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

impl<P: DirectionsApi> DirectionsApi for CachedDirections<P> {
    async fn get_directions(
        &self,
        origin: &GeoPoint,
        destination: &GeoPoint,
        waypoints: &[GeoPoint],
        mode: TransportMode,
    ) -> Result<RouteGeometry, DirectionsError> {
        let key = route_key(origin, destination, waypoints, mode);

        if let Some(cached) = self.routes.get(&key).await {
            return Ok((*cached).clone());
        }

        let geometry = self
            .inner
            .get_directions(origin, destination, waypoints, mode)
            .await?;

        // A fallback-marked result from a wrapped composite provider is
        // degraded data; keep it out of the cache too.
        if !geometry.used_fallback {
            self.routes.insert(key, Arc::new(geometry.clone())).await;
        }

        Ok(geometry)
    }

    async fn geocode_address(&self, address: &str) -> Result<Option<GeoPoint>, DirectionsError> {
        self.inner.geocode_address(address).await
    }

    async fn search_nearby_places(
        &self,
        location: &GeoPoint,
        keyword: &str,
        radius_m: u32,
    ) -> Result<Vec<PlaceCandidate>, DirectionsError> {
        self.inner.search_nearby_places(location, keyword, radius_m).await
    }
}
