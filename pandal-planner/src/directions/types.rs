//! Provider API response DTOs.
//!
//! These map directly to the provider's native JSON (snake_case fields).
//! `Option` is used liberally because the provider omits fields rather than
//! sending null in many cases.

use serde::Deserialize;

use crate::domain::GeoPoint;

/// A latitude/longitude pair as the provider encodes it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Convert to the domain coordinate type.
    pub fn to_geo(self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// A value with an accompanying display string (`{"text": "1.2 km", "value": 1234}`).
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: Option<String>,
    pub value: f64,
}

/// Response from the directions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<ProviderRoute>,
}

/// One route alternative in a directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderRoute {
    #[serde(default)]
    pub legs: Vec<ProviderLeg>,

    /// Provider-chosen visiting order of the supplied waypoints.
    pub waypoint_order: Option<Vec<usize>>,
}

/// One leg (between consecutive stops) of a provider route.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderLeg {
    pub distance: TextValue,
    pub duration: TextValue,
    #[serde(default)]
    pub steps: Vec<ProviderStep>,
}

/// One navigation step within a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderStep {
    /// Instruction text, HTML-formatted by the provider.
    pub html_instructions: Option<String>,
    pub distance: TextValue,
    pub duration: TextValue,
    pub start_location: Option<LatLng>,
    pub end_location: LatLng,
}

/// Response from the geocoding endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

/// One geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

/// Geometry wrapper shared by geocoding and places results.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

/// Response from the nearby-places endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
}

/// One place in a nearby-places response.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    pub place_id: String,
    pub name: String,
    pub geometry: Geometry,
    pub rating: Option<f32>,
    pub vicinity: Option<String>,
}

/// A nearby place converted to domain vocabulary.
#[derive(Debug, Clone)]
pub struct PlaceCandidate {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
    pub rating: Option<f32>,
    pub vicinity: Option<String>,
}

impl From<PlaceResult> for PlaceCandidate {
    fn from(result: PlaceResult) -> Self {
        Self {
            id: result.place_id,
            name: result.name,
            location: result.geometry.location.to_geo(),
            rating: result.rating,
            vicinity: result.vicinity,
        }
    }
}
