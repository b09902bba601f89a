//! Itinerary output types.
//!
//! Everything here is created fresh per planning call and serialised with
//! camelCase field names for the outward-facing shape. Totals are derived
//! from route geometry, never set independently.

use serde::Serialize;

use super::GeoPoint;
use super::pandal::PriceRange;

/// One instruction in the ordered roadmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    /// Instruction text with HTML markup already stripped.
    pub instruction: String,
    pub distance_meters: f64,
    pub time_minutes: u32,
    pub end_location: GeoPoint,
}

/// One leg of the directions result (between consecutive stops).
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub steps: Vec<RoadmapStep>,
}

/// Path geometry for a whole route, from the provider or the fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteGeometry {
    pub legs: Vec<RouteLeg>,

    /// True when the provider was unavailable and this geometry was computed
    /// locally. Fallback geometry ignores intermediate waypoints.
    pub used_fallback: bool,

    /// Diagnostic text from the original provider failure, if any.
    pub fallback_reason: Option<String>,
}

impl RouteGeometry {
    /// Sum of leg distances in metres.
    pub fn total_distance_meters(&self) -> f64 {
        self.legs.iter().map(|l| l.distance_meters).sum()
    }

    /// Sum of leg durations in seconds.
    pub fn total_duration_seconds(&self) -> f64 {
        self.legs.iter().map(|l| l.duration_seconds).sum()
    }

    /// All leg steps flattened into one ordered roadmap.
    pub fn flatten_steps(&self) -> Vec<RoadmapStep> {
        self.legs.iter().flat_map(|l| l.steps.iter().cloned()).collect()
    }
}

/// Summary of a pandal covered by the itinerary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PandalVisit {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
}

/// A recommended food stop along the itinerary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodStop {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
    pub rating: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    /// Timing hint for midpoint-sampled suggestions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A heuristic alternative itinerary, not provider-verified.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateRoute {
    pub pandal_ids: Vec<String>,
    pub estimated_time_minutes: u32,
    pub total_distance_km: f64,
    pub reason: String,
}

/// Estimated cost of the itinerary in whole, implicit currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub transport: u32,
    pub food: u32,
    pub total: u32,
}

/// The assembled itinerary returned to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRoute {
    pub pandals_covered: Vec<PandalVisit>,
    pub food_stops: Vec<FoodStop>,
    pub roadmap: Vec<RoadmapStep>,
    pub total_distance_km: f64,
    pub estimated_time_minutes: u32,
    /// Bounded heuristic quality score, always within [50, 95].
    pub optimization_score: u8,
    pub estimated_cost: CostBreakdown,
    pub alternate_routes: Vec<AlternateRoute>,
    pub used_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(meters: f64, minutes: u32) -> RoadmapStep {
        RoadmapStep {
            instruction: "Continue".into(),
            distance_meters: meters,
            time_minutes: minutes,
            end_location: GeoPoint::new(22.6, 88.37),
        }
    }

    #[test]
    fn geometry_totals_sum_over_legs() {
        let geometry = RouteGeometry {
            legs: vec![
                RouteLeg {
                    distance_meters: 1200.0,
                    duration_seconds: 600.0,
                    steps: vec![step(700.0, 5), step(500.0, 5)],
                },
                RouteLeg {
                    distance_meters: 800.0,
                    duration_seconds: 301.0,
                    steps: vec![step(800.0, 5)],
                },
            ],
            used_fallback: false,
            fallback_reason: None,
        };

        assert_eq!(geometry.total_distance_meters(), 2000.0);
        assert_eq!(geometry.total_duration_seconds(), 901.0);
        assert_eq!(geometry.flatten_steps().len(), 3);
    }

    #[test]
    fn output_serialises_with_camel_case_keys() {
        let route = OptimizedRoute {
            pandals_covered: vec![],
            food_stops: vec![],
            roadmap: vec![step(100.0, 2)],
            total_distance_km: 0.1,
            estimated_time_minutes: 2,
            optimization_score: 72,
            estimated_cost: CostBreakdown {
                transport: 0,
                food: 0,
                total: 0,
            },
            alternate_routes: vec![],
            used_fallback: false,
            fallback_reason: None,
        };

        let value = serde_json::to_value(&route).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "pandalsCovered",
            "foodStops",
            "roadmap",
            "totalDistanceKm",
            "estimatedTimeMinutes",
            "optimizationScore",
            "estimatedCost",
            "alternateRoutes",
            "usedFallback",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        // Absent diagnostics are omitted entirely.
        assert!(!obj.contains_key("fallbackReason"));

        let step = &value["roadmap"][0];
        assert!(step.get("distanceMeters").is_some());
        assert!(step.get("timeMinutes").is_some());
        assert!(step.get("endLocation").is_some());
    }
}
