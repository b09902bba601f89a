//! Mock directions provider for testing without API access.
//!
//! Synthesises deterministic geometry from straight-line distances and a
//! per-mode speed table, so tests and local development need no credentials
//! or network. Can also be put into a failing state to exercise fallback
//! handling.

use crate::domain::{GeoPoint, RoadmapStep, RouteGeometry, RouteLeg, TransportMode, haversine_km};

use super::DirectionsApi;
use super::error::DirectionsError;
use super::types::PlaceCandidate;

/// Assumed speed in km/h per transport mode.
fn speed_kmh(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Walking => 5.0,
        TransportMode::Car => 25.0,
        TransportMode::PublicTransport => 18.0,
    }
}

/// Mock directions provider.
#[derive(Debug, Clone, Default)]
pub struct MockDirections {
    /// When set, every call fails with this message.
    failure: Option<String>,

    /// Canned candidates returned by nearby-place searches.
    places: Vec<PlaceCandidate>,
}

impl MockDirections {
    /// A healthy mock provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose every call fails, for exercising fallback paths.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            places: Vec::new(),
        }
    }

    /// Serve these candidates from every nearby-place search.
    pub fn with_places(mut self, places: Vec<PlaceCandidate>) -> Self {
        self.places = places;
        self
    }

    fn check_failure(&self) -> Result<(), DirectionsError> {
        match &self.failure {
            Some(message) => Err(DirectionsError::Status {
                status: "UNKNOWN_ERROR".to_string(),
                message: Some(message.clone()),
            }),
            None => Ok(()),
        }
    }
}

impl DirectionsApi for MockDirections {
    async fn get_directions(
        &self,
        origin: &GeoPoint,
        destination: &GeoPoint,
        waypoints: &[GeoPoint],
        mode: TransportMode,
    ) -> Result<RouteGeometry, DirectionsError> {
        self.check_failure()?;

        let mut points = Vec::with_capacity(waypoints.len() + 2);
        points.push(*origin);
        points.extend_from_slice(waypoints);
        points.push(*destination);

        let legs = points
            .windows(2)
            .map(|pair| {
                let km = haversine_km(&pair[0], &pair[1]);
                let duration_seconds = (km / speed_kmh(mode) * 3600.0).round();
                let step = RoadmapStep {
                    instruction: "Travel to the next stop".to_string(),
                    distance_meters: km * 1000.0,
                    time_minutes: (duration_seconds / 60.0).round() as u32,
                    end_location: pair[1],
                };
                RouteLeg {
                    distance_meters: km * 1000.0,
                    duration_seconds,
                    steps: vec![step],
                }
            })
            .collect();

        Ok(RouteGeometry {
            legs,
            used_fallback: false,
            fallback_reason: None,
        })
    }

    async fn geocode_address(&self, _address: &str) -> Result<Option<GeoPoint>, DirectionsError> {
        self.check_failure()?;
        Ok(None)
    }

    async fn search_nearby_places(
        &self,
        _location: &GeoPoint,
        _keyword: &str,
        _radius_m: u32,
    ) -> Result<Vec<PlaceCandidate>, DirectionsError> {
        self.check_failure()?;
        Ok(self.places.clone())
    }
}
