//! Directions provider HTTP client.
//!
//! Provides async methods for the directions, geocoding, and nearby-places
//! endpoints. Handles the API key, request timeouts, and conversion to
//! domain types. Concurrent requests are bounded by a semaphore to stay
//! clear of provider rate limits.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::{GeoPoint, RouteGeometry, TransportMode};

use super::DirectionsApi;
use super::convert::convert_directions;
use super::error::DirectionsError;
use super::types::{DirectionsResponse, GeocodeResponse, PlaceCandidate, PlacesResponse};

/// Default base URL for the provider.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds; a timed-out call surfaces as an HTTP
    /// error and is fallback-eligible
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Directions provider API client.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

/// Format a point the way the provider's query parameters expect.
pub(crate) fn format_point(point: &GeoPoint) -> String {
    format!("{},{}", point.latitude, point.longitude)
}

/// Format the waypoints parameter, asking the provider to reorder stops.
pub(crate) fn format_waypoints(waypoints: &[GeoPoint]) -> String {
    let joined = waypoints
        .iter()
        .map(format_point)
        .collect::<Vec<_>>()
        .join("|");
    format!("optimize:true|{joined}")
}

impl DirectionsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    fn check_configured(&self) -> Result<(), DirectionsError> {
        if self.api_key.is_empty() {
            return Err(DirectionsError::NotConfigured(
                "no directions API key set".to_string(),
            ));
        }
        Ok(())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, DirectionsError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| DirectionsError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl DirectionsApi for DirectionsClient {
    async fn get_directions(
        &self,
        origin: &GeoPoint,
        destination: &GeoPoint,
        waypoints: &[GeoPoint],
        mode: TransportMode,
    ) -> Result<RouteGeometry, DirectionsError> {
        self.check_configured()?;

        let mut query = vec![
            ("origin", format_point(origin)),
            ("destination", format_point(destination)),
            ("mode", mode.provider_mode().to_string()),
            ("key", self.api_key.clone()),
        ];
        if !waypoints.is_empty() {
            query.push(("waypoints", format_waypoints(waypoints)));
        }

        let resp: DirectionsResponse = self
            .get_json("/maps/api/directions/json", &query)
            .await?;

        convert_directions(&resp)
    }

    async fn geocode_address(&self, address: &str) -> Result<Option<GeoPoint>, DirectionsError> {
        self.check_configured()?;

        let query = [
            ("address", address.to_string()),
            ("key", self.api_key.clone()),
        ];

        let resp: GeocodeResponse = self.get_json("/maps/api/geocode/json", &query).await?;

        match resp.status.as_str() {
            "OK" => Ok(resp
                .results
                .first()
                .map(|r| r.geometry.location.to_geo())),
            "ZERO_RESULTS" => Ok(None),
            _ => Err(DirectionsError::Status {
                status: resp.status,
                message: None,
            }),
        }
    }

    async fn search_nearby_places(
        &self,
        location: &GeoPoint,
        keyword: &str,
        radius_m: u32,
    ) -> Result<Vec<PlaceCandidate>, DirectionsError> {
        self.check_configured()?;

        let query = [
            ("location", format_point(location)),
            ("radius", radius_m.to_string()),
            ("keyword", keyword.to_string()),
            ("key", self.api_key.clone()),
        ];

        let resp: PlacesResponse = self
            .get_json("/maps/api/place/nearbysearch/json", &query)
            .await?;

        match resp.status.as_str() {
            "OK" => Ok(resp.results.into_iter().map(Into::into).collect()),
            "ZERO_RESULTS" => Ok(Vec::new()),
            _ => Err(DirectionsError::Status {
                status: resp.status,
                message: None,
            }),
        }
    }
}
