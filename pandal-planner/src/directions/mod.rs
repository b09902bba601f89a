//! External directions/geocoding/places provider.
//!
//! The real client speaks the provider's HTTP JSON API. The engine consumes
//! the `DirectionsApi` trait so it can be exercised against the mock, and so
//! the caching wrapper can slot in transparently.

mod client;
mod convert;
mod error;
mod fallback;
pub mod mock;
mod sanitize;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use convert::convert_directions;
pub use error::DirectionsError;
pub use fallback::fallback_route;
pub use sanitize::strip_html;
pub use types::{
    DirectionsResponse, GeocodeResponse, LatLng, PlaceCandidate, PlacesResponse, ProviderLeg,
    ProviderRoute, ProviderStep, TextValue,
};

use crate::domain::{GeoPoint, RouteGeometry, TransportMode};

/// Provider operations the engine depends on.
///
/// Consumers are generic over this trait (never `dyn`), so implementations
/// keep native `async fn` signatures.
#[allow(async_fn_in_trait)]
pub trait DirectionsApi {
    /// Fetch route geometry from origin to destination via the given
    /// waypoints. Waypoint ordering is delegated to the provider.
    async fn get_directions(
        &self,
        origin: &GeoPoint,
        destination: &GeoPoint,
        waypoints: &[GeoPoint],
        mode: TransportMode,
    ) -> Result<RouteGeometry, DirectionsError>;

    /// Resolve a free-text address to coordinates. `Ok(None)` when the
    /// provider finds nothing.
    async fn geocode_address(&self, address: &str) -> Result<Option<GeoPoint>, DirectionsError>;

    /// Search for places near a location matching a keyword.
    async fn search_nearby_places(
        &self,
        location: &GeoPoint,
        keyword: &str,
        radius_m: u32,
    ) -> Result<Vec<PlaceCandidate>, DirectionsError>;
}
