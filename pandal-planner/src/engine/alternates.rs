//! Heuristic alternate itineraries.
//!
//! Alternates are best-effort placeholders: fixed per-pandal time and
//! distance estimates, never verified against the directions provider.
//! Generation is pure and infallible, so a degraded alternates path can
//! never sink the main plan.

use std::cmp::Ordering;

use crate::domain::{AlternateRoute, Pandal, TransportMode};

/// Placeholder estimates for the quick tour (per pandal).
const QUICK_TOUR_MINS_PER_PANDAL: u32 = 45;
const QUICK_TOUR_KM_PER_PANDAL: f64 = 2.0;

/// Placeholder estimates for the walking alternate (per pandal).
const WALKING_MINS_PER_PANDAL: u32 = 55;
const WALKING_KM_PER_PANDAL: f64 = 1.2;

/// Pandals in the walking alternate.
const WALKING_ROUTE_MAX: usize = 4;

/// Generate up to two alternates, in fixed order: quick tour first, budget
/// walking route second, each only when applicable.
pub fn generate_alternates(pandals: &[Pandal], mode: TransportMode) -> Vec<AlternateRoute> {
    let mut alternates = Vec::with_capacity(2);

    if pandals.len() > 3 {
        let mut ranked: Vec<&Pandal> = pandals.iter().collect();
        // Stable sort keeps input order on rating ties.
        ranked.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));

        let ids: Vec<String> = ranked.iter().take(3).map(|p| p.id.clone()).collect();
        let count = ids.len() as u32;

        alternates.push(AlternateRoute {
            pandal_ids: ids,
            estimated_time_minutes: count * QUICK_TOUR_MINS_PER_PANDAL,
            total_distance_km: f64::from(count) * QUICK_TOUR_KM_PER_PANDAL,
            reason: "Quick tour covering the three highest-rated pandals".to_string(),
        });
    }

    if mode != TransportMode::Walking {
        let take = pandals.len().min(WALKING_ROUTE_MAX);
        let ids: Vec<String> = pandals.iter().take(take).map(|p| p.id.clone()).collect();
        let count = ids.len() as u32;

        alternates.push(AlternateRoute {
            pandal_ids: ids,
            estimated_time_minutes: count * WALKING_MINS_PER_PANDAL,
            total_distance_km: f64::from(count) * WALKING_KM_PER_PANDAL,
            reason: "Budget walking route with zero transport cost".to_string(),
        });
    }

    alternates
}
