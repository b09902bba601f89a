//! Orchestration tests for the route planner.
//!
//! Exercised end to end against the mock directions provider and the
//! in-memory store, so behaviour is deterministic and needs no network.

use super::*;
use crate::cache::{CacheConfig, CachedDirections};
use crate::directions::mock::MockDirections;
use crate::domain::{BudgetTier, GeoPoint, PriceRange, RoutePreferences, RouteRequest, TransportMode};
use crate::store::{MemoryStore, PandalStore, StoreError, sample_kolkata};

fn start() -> GeoPoint {
    // Esplanade.
    GeoPoint::new(22.5646, 88.3433)
}

fn end() -> GeoPoint {
    // Shyambazar.
    GeoPoint::new(22.6011, 88.3721)
}

fn request(mode: &str, ids: &[&str]) -> RouteRequest {
    RouteRequest {
        start_point: start(),
        end_point: end(),
        selected_pandal_ids: ids.iter().map(|s| s.to_string()).collect(),
        transport_mode: mode.to_string(),
        preferences: RoutePreferences::default(),
        include_food_stops: false,
    }
}

fn planner(provider: MockDirections) -> RoutePlanner<MockDirections, MemoryStore> {
    RoutePlanner::new(provider, sample_kolkata(), PlannerConfig::default())
}

#[tokio::test]
async fn plans_a_walking_route() {
    let planner = planner(MockDirections::new());
    let req = request("walking", &["bagbazar", "kumartuli", "ahiritola"]);

    let route = planner.plan_route(&req).await.unwrap();

    // Covered pandals keep request order.
    let ids: Vec<&str> = route.pandals_covered.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["bagbazar", "kumartuli", "ahiritola"]);

    // 3 waypoints means 4 legs: score 75 - 3*4.
    assert_eq!(route.optimization_score, 63);
    assert!(!route.roadmap.is_empty());
    assert!(route.total_distance_km > 0.0);
    assert!(route.estimated_time_minutes > 0);

    // Walking is free and no food stops were requested.
    assert_eq!(route.estimated_cost.transport, 0);
    assert_eq!(route.estimated_cost.total, 0);
    assert!(route.food_stops.is_empty());
    assert!(!route.used_fallback);
}

#[tokio::test]
async fn five_pandals_by_car_with_low_budget_food() {
    let planner = planner(MockDirections::new());
    let mut req = request(
        "car",
        &["bagbazar", "kumartuli", "ahiritola", "college-square", "ekdalia"],
    );
    req.include_food_stops = true;
    req.preferences.budget = "low".to_string();

    let route = planner.plan_route(&req).await.unwrap();

    // Both alternates apply: more than 3 pandals, and mode is not walking.
    assert_eq!(route.alternate_routes.len(), 2);

    let quick = &route.alternate_routes[0];
    assert_eq!(quick.reason, "Quick tour covering the three highest-rated pandals");
    // Top three by rating: college-square 4.7, bagbazar 4.6, kumartuli 4.5.
    assert_eq!(quick.pandal_ids, vec!["college-square", "bagbazar", "kumartuli"]);

    let walking = &route.alternate_routes[1];
    assert_eq!(walking.reason, "Budget walking route with zero transport cost");
    // First four in request order.
    assert_eq!(
        walking.pandal_ids,
        vec!["bagbazar", "kumartuli", "ahiritola", "college-square"]
    );

    // Only one curated low-price place sits within 500 m of a visited pandal.
    assert_eq!(route.food_stops.len(), 1);
    assert_eq!(route.food_stops[0].id, "putiram");
    assert_eq!(route.food_stops[0].price_range, Some(PriceRange::Low));

    // Costs derive from the geometry and the stop count.
    let expected_transport = (route.total_distance_km * 8.0).ceil() as u32;
    assert_eq!(route.estimated_cost.transport, expected_transport);
    assert_eq!(route.estimated_cost.food, 80);
    assert_eq!(
        route.estimated_cost.total,
        route.estimated_cost.transport + route.estimated_cost.food
    );
}

#[tokio::test]
async fn provider_failure_falls_back_to_local_route() {
    let planner = planner(MockDirections::failing("simulated outage"));
    let req = request("car", &["bagbazar", "kumartuli", "ahiritola"]);

    let route = planner.plan_route(&req).await.unwrap();

    // Fallback is a single straight-shot step; waypoints are dropped.
    assert!(route.used_fallback);
    assert_eq!(route.roadmap.len(), 1);
    assert!(
        route
            .fallback_reason
            .as_deref()
            .unwrap()
            .contains("simulated outage")
    );

    // Single leg scores the near-baseline value.
    assert_eq!(route.optimization_score, 72);

    // Distance is origin→destination only, ignoring the three stops.
    let direct_km = crate::domain::haversine_km(&start(), &end());
    assert!((route.total_distance_km - direct_km).abs() < 1e-9);
    assert_eq!(
        route.roadmap[0].time_minutes,
        (direct_km * 12.0).round() as u32
    );
}

#[tokio::test]
async fn identical_requests_produce_identical_routes() {
    let planner = planner(MockDirections::new());
    let req = request("public-transport", &["bagbazar", "college-square"]);

    let first = planner.plan_route(&req).await.unwrap();
    let second = planner.plan_route(&req).await.unwrap();

    assert_eq!(first.roadmap, second.roadmap);
    assert_eq!(first.optimization_score, second.optimization_score);
    assert_eq!(first.total_distance_km, second.total_distance_km);
    assert_eq!(first.estimated_time_minutes, second.estimated_time_minutes);
}

#[tokio::test]
async fn caching_wrapper_is_transparent_to_planning() {
    let cached = CachedDirections::new(MockDirections::new(), &CacheConfig::default());
    let planner = RoutePlanner::new(cached, sample_kolkata(), PlannerConfig::default());
    let req = request("walking", &["bagbazar", "kumartuli"]);

    let first = planner.plan_route(&req).await.unwrap();
    let second = planner.plan_route(&req).await.unwrap();
    assert_eq!(first.roadmap, second.roadmap);
}

#[tokio::test]
async fn unknown_ids_are_dropped_known_ones_kept() {
    let planner = planner(MockDirections::new());
    let req = request("walking", &["no-such", "kumartuli", "also-missing"]);

    let route = planner.plan_route(&req).await.unwrap();
    assert_eq!(route.pandals_covered.len(), 1);
    assert_eq!(route.pandals_covered[0].id, "kumartuli");
}

#[tokio::test]
async fn no_resolvable_pandals_is_not_found() {
    let planner = planner(MockDirections::new());
    let req = request("walking", &["ghost-1", "ghost-2"]);

    let err = planner.plan_route(&req).await.unwrap_err();
    assert!(matches!(err, PlanError::NoPandalsFound));
}

#[tokio::test]
async fn oversized_walking_selection_fails_validation() {
    let planner = planner(MockDirections::new());
    let ids: Vec<String> = (0..9).map(|i| format!("p{i}")).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let req = request("walking", &id_refs);

    let err = planner.plan_route(&req).await.unwrap_err();
    match err {
        PlanError::Validation(v) => {
            assert_eq!(v.issues[0].field, "selectedPandalIds");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn reoptimize_overwrites_geometry_derived_fields_only() {
    let planner = planner(MockDirections::new());
    let mut req = request("car", &["bagbazar", "kumartuli", "ahiritola", "college-square"]);
    req.include_food_stops = true;
    req.preferences.budget = "low".to_string();

    let mut route = planner.plan_route(&req).await.unwrap();
    let food_before = route.food_stops.clone();
    let cost_before = route.estimated_cost;
    let alternates_before = route.alternate_routes.len();
    let time_by_car = route.estimated_time_minutes;

    planner
        .reoptimize(&mut route, &start(), &end(), TransportMode::Walking)
        .await
        .unwrap();

    // Geometry-derived fields were recomputed: walking the same path is slower.
    assert!(route.estimated_time_minutes > time_by_car);
    assert!(!route.roadmap.is_empty());
    assert!((50..=95).contains(&route.optimization_score));

    // Everything else is untouched.
    assert_eq!(route.food_stops.len(), food_before.len());
    assert_eq!(route.estimated_cost, cost_before);
    assert_eq!(route.alternate_routes.len(), alternates_before);
}

#[tokio::test]
async fn unknown_budget_tier_plans_at_medium() {
    let planner = planner(MockDirections::new());
    let mut req = request("car", &["kumartuli"]);
    req.include_food_stops = true;
    req.preferences.budget = "extravagant".to_string();

    let route = planner.plan_route(&req).await.unwrap();

    // Allen Kitchen (moderate) is within reach of Kumartuli and medium
    // budget admits it; a strict parse would have rejected the request.
    assert_eq!(route.food_stops.len(), 1);
    assert_eq!(route.food_stops[0].id, "allen-kitchen");
    assert_eq!(route.estimated_cost.food, BudgetTier::Medium.food_cost());
}

struct FailingStore;

impl PandalStore for FailingStore {
    async fn pandals_by_ids(
        &self,
        _ids: &[String],
    ) -> Result<Vec<crate::domain::Pandal>, StoreError> {
        Err(StoreError::Unavailable("database down".to_string()))
    }

    async fn food_places_near(
        &self,
        _location: &GeoPoint,
        _radius_m: f64,
    ) -> Result<Vec<crate::domain::FoodPlace>, StoreError> {
        Err(StoreError::Unavailable("database down".to_string()))
    }
}

#[tokio::test]
async fn store_failure_propagates_unmasked() {
    let planner = RoutePlanner::new(
        MockDirections::new(),
        FailingStore,
        PlannerConfig::default(),
    );
    let req = request("walking", &["bagbazar"]);

    let err = planner.plan_route(&req).await.unwrap_err();
    match err {
        PlanError::Store(StoreError::Unavailable(msg)) => {
            assert_eq!(msg, "database down");
        }
        other => panic!("unexpected error: {other}"),
    }
}
