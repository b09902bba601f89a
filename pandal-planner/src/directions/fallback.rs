//! Locally computed fallback route geometry.
//!
//! Used whenever the directions provider is unreachable or errors. The
//! fallback is a single straight-shot leg between origin and destination:
//! intermediate waypoints are ignored, so multi-stop requests lose their
//! stops in this path. That matches the long-standing behaviour callers
//! depend on and keeps the fallback deterministic.

use crate::domain::{GeoPoint, RoadmapStep, RouteGeometry, RouteLeg, haversine_km};

/// Walking-speed duration heuristic: minutes per kilometre.
///
/// Known limitation: the same rate is applied for every transport mode.
const FALLBACK_MINS_PER_KM: f64 = 12.0;

/// Build approximate route geometry between two points.
///
/// `reason` is the original provider failure text, retained on the geometry
/// for diagnostics.
pub fn fallback_route(
    origin: &GeoPoint,
    destination: &GeoPoint,
    reason: impl Into<String>,
) -> RouteGeometry {
    let km = haversine_km(origin, destination);
    let minutes = (km * FALLBACK_MINS_PER_KM).round() as u32;

    let step = RoadmapStep {
        instruction: "Head directly towards your destination (approximate route)".to_string(),
        distance_meters: km * 1000.0,
        time_minutes: minutes,
        end_location: *destination,
    };

    RouteGeometry {
        legs: vec![RouteLeg {
            distance_meters: km * 1000.0,
            duration_seconds: f64::from(minutes) * 60.0,
            steps: vec![step],
        }],
        used_fallback: true,
        fallback_reason: Some(reason.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kolkata_pair_distance_and_duration() {
        let origin = GeoPoint::new(22.5726, 88.3639);
        let destination = GeoPoint::new(22.5448, 88.3426);

        let geometry = fallback_route(&origin, &destination, "timeout");

        let km = geometry.total_distance_meters() / 1000.0;
        assert!((km - 3.7868).abs() < 0.005, "got {km}");

        // round(km * 12) minutes.
        let steps = geometry.flatten_steps();
        assert_eq!(steps[0].time_minutes, 45);
        assert_eq!(geometry.total_duration_seconds(), 45.0 * 60.0);
    }

    #[test]
    fn single_leg_single_step() {
        let origin = GeoPoint::new(22.5726, 88.3639);
        let destination = GeoPoint::new(22.6011, 88.3721);

        let geometry = fallback_route(&origin, &destination, "network error");

        assert_eq!(geometry.legs.len(), 1);
        assert_eq!(geometry.legs[0].steps.len(), 1);
        assert!(geometry.used_fallback);
        assert_eq!(geometry.fallback_reason.as_deref(), Some("network error"));
        assert_eq!(geometry.legs[0].steps[0].end_location, destination);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let origin = GeoPoint::new(22.5726, 88.3639);
        let destination = GeoPoint::new(22.5448, 88.3426);

        let a = fallback_route(&origin, &destination, "x");
        let b = fallback_route(&origin, &destination, "x");
        assert_eq!(a, b);
    }
}
