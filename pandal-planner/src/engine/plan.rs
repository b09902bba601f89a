//! Plan orchestration.
//!
//! `RoutePlanner` wires the pipeline together. It is generic over the
//! directions provider and the store so both can be substituted in tests,
//! and it owns the single failure policy for the provider: any directions
//! error becomes the deterministic local fallback, never a failed plan.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::directions::{DirectionsApi, fallback_route};
use crate::domain::{
    GeoPoint, OptimizedRoute, Pandal, PandalVisit, RouteGeometry, RouteRequest, TransportMode,
};
use crate::store::{PandalStore, StoreError};

use super::alternates::generate_alternates;
use super::config::PlannerConfig;
use super::cost::estimate_cost;
use super::food::select_food_stops;
use super::score::optimization_score;
use super::validate::{ValidationError, validate};

/// Errors surfaced by the planning engine.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The request failed validation; every offending field is listed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// None of the requested pandal ids resolved to known records.
    #[error("none of the requested pandals could be found")]
    NoPandalsFound,

    /// The persistence collaborator failed; propagated unmasked.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The route planning engine. Stateless; every call is self-contained.
pub struct RoutePlanner<P, S> {
    provider: P,
    store: S,
    config: PlannerConfig,
}

impl<P: DirectionsApi, S: PandalStore> RoutePlanner<P, S> {
    /// Create a planner over a directions provider and a store.
    pub fn new(provider: P, store: S, config: PlannerConfig) -> Self {
        Self {
            provider,
            store,
            config,
        }
    }

    /// Plan one itinerary.
    pub async fn plan_route(&self, request: &RouteRequest) -> Result<OptimizedRoute, PlanError> {
        let valid = validate(request)?;
        let pandals = self.resolve_pandals(&valid.pandal_ids).await?;

        debug!(
            pandals = pandals.len(),
            mode = valid.mode.as_str(),
            "planning route"
        );

        let geometry = self
            .fetch_geometry(&valid.start, &valid.end, &pandals, valid.mode)
            .await;

        let total_meters = geometry.total_distance_meters();
        let estimated_time_minutes = (geometry.total_duration_seconds() / 60.0).ceil() as u32;
        let score = optimization_score(geometry.legs.len());
        let roadmap = geometry.flatten_steps();

        let food_stops = if valid.include_food_stops {
            select_food_stops(
                &self.provider,
                &self.store,
                &self.config,
                &pandals,
                &roadmap,
                valid.budget,
                &valid.cuisine,
            )
            .await?
        } else {
            Vec::new()
        };

        let estimated_cost =
            estimate_cost(total_meters, valid.mode, valid.budget, food_stops.len());
        let alternate_routes = generate_alternates(&pandals, valid.mode);

        Ok(OptimizedRoute {
            pandals_covered: pandals
                .into_iter()
                .map(|p| PandalVisit {
                    id: p.id,
                    name: p.name,
                    location: p.location,
                })
                .collect(),
            food_stops,
            roadmap,
            total_distance_km: total_meters / 1000.0,
            estimated_time_minutes,
            optimization_score: score,
            estimated_cost,
            alternate_routes,
            used_fallback: geometry.used_fallback,
            fallback_reason: geometry.fallback_reason,
        })
    }

    /// Re-run geometry for an existing itinerary, overwriting the roadmap,
    /// totals, score, and fallback markers in place. Food stops, cost, and
    /// alternates are left untouched; authorization is the caller's concern.
    pub async fn reoptimize(
        &self,
        route: &mut OptimizedRoute,
        start: &GeoPoint,
        end: &GeoPoint,
        mode: TransportMode,
    ) -> Result<(), PlanError> {
        let ids: Vec<String> = route.pandals_covered.iter().map(|v| v.id.clone()).collect();
        let pandals = self.resolve_pandals(&ids).await?;

        let geometry = self.fetch_geometry(start, end, &pandals, mode).await;

        route.total_distance_km = geometry.total_distance_meters() / 1000.0;
        route.estimated_time_minutes = (geometry.total_duration_seconds() / 60.0).ceil() as u32;
        route.optimization_score = optimization_score(geometry.legs.len());
        route.roadmap = geometry.flatten_steps();
        route.used_fallback = geometry.used_fallback;
        route.fallback_reason = geometry.fallback_reason;

        Ok(())
    }

    /// Resolve pandal records, preserving the request's id order and
    /// dropping ids the store does not know.
    async fn resolve_pandals(&self, ids: &[String]) -> Result<Vec<Pandal>, PlanError> {
        let found = self.store.pandals_by_ids(ids).await?;

        let mut by_id: HashMap<String, Pandal> =
            found.into_iter().map(|p| (p.id.clone(), p)).collect();
        let ordered: Vec<Pandal> = ids.iter().filter_map(|id| by_id.remove(id)).collect();

        if ordered.is_empty() {
            return Err(PlanError::NoPandalsFound);
        }
        Ok(ordered)
    }

    /// Fetch geometry from the provider; any failure yields the local
    /// fallback with the original error retained as a diagnostic.
    async fn fetch_geometry(
        &self,
        start: &GeoPoint,
        end: &GeoPoint,
        pandals: &[Pandal],
        mode: TransportMode,
    ) -> RouteGeometry {
        let waypoints: Vec<GeoPoint> = pandals.iter().map(|p| p.location).collect();

        match self
            .provider
            .get_directions(start, end, &waypoints, mode)
            .await
        {
            Ok(geometry) => geometry,
            Err(e) => {
                warn!(error = %e, "directions provider failed, using fallback route");
                fallback_route(start, end, e.to_string())
            }
        }
    }
}
