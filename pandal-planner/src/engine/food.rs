//! Food stop selection.
//!
//! Two bounded strategies. The curated per-pandal strategy asks the store
//! for food places near each visited pandal, filters by budget, and keeps
//! the best one per pandal. When the curated data yields nothing at all,
//! the midpoint strategy samples points along the roadmap and asks the
//! directions provider's place search instead.
//!
//! Per-pandal lookups fan out concurrently but merge in pandal input order,
//! so output is reproducible regardless of completion order.

use std::cmp::Ordering;
use std::collections::HashSet;

use futures::stream::{self, StreamExt};

use crate::directions::DirectionsApi;
use crate::domain::{BudgetTier, FoodStop, GeoPoint, Pandal, RoadmapStep};
use crate::store::{PandalStore, StoreError};

use super::config::PlannerConfig;

/// Timing hints for midpoint-sampled suggestions, by sample position.
const SAMPLE_NOTES: [&str; 3] = [
    "Early in the route",
    "Midway through the route",
    "Towards the end of the route",
];

/// Select food stops for an itinerary.
///
/// Store failures propagate unchanged; provider failures in the midpoint
/// strategy degrade to an empty sample.
pub async fn select_food_stops<P: DirectionsApi, S: PandalStore>(
    provider: &P,
    store: &S,
    config: &PlannerConfig,
    pandals: &[Pandal],
    roadmap: &[RoadmapStep],
    budget: BudgetTier,
    cuisine: &[String],
) -> Result<Vec<FoodStop>, StoreError> {
    let curated = per_pandal_picks(store, config, pandals, budget).await?;

    let stops = if curated.is_empty() {
        midpoint_samples(provider, config, roadmap, cuisine).await
    } else {
        curated
    };

    Ok(dedupe_by_id(stops))
}

/// Curated strategy: best budget-compatible food place near each pandal.
async fn per_pandal_picks<S: PandalStore>(
    store: &S,
    config: &PlannerConfig,
    pandals: &[Pandal],
    budget: BudgetTier,
) -> Result<Vec<FoodStop>, StoreError> {
    let lookups = pandals
        .iter()
        .map(|pandal| store.food_places_near(&pandal.location, config.food_radius_m));

    // Bounded fan-out; `buffered` yields results in input order.
    let results: Vec<_> = stream::iter(lookups)
        .buffered(config.food_concurrency.max(1))
        .collect()
        .await;

    let mut picks = Vec::new();
    for result in results {
        let mut places = result?;
        places.retain(|place| budget.allows(place.price_range));
        places.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));

        if let Some(best) = places.into_iter().next() {
            picks.push(FoodStop {
                id: best.id,
                name: best.name,
                location: best.location,
                rating: best.rating,
                price_range: Some(best.price_range),
                note: None,
            });
        }
    }

    Ok(picks)
}

/// Midpoint strategy: keyword place searches at sampled roadmap points.
async fn midpoint_samples<P: DirectionsApi>(
    provider: &P,
    config: &PlannerConfig,
    roadmap: &[RoadmapStep],
    cuisine: &[String],
) -> Vec<FoodStop> {
    if roadmap.is_empty() {
        return Vec::new();
    }

    let keyword = cuisine.first().map_or("restaurant", String::as_str);
    let samples = sample_points(roadmap, config.max_food_samples);

    let mut stops = Vec::new();
    for (i, location) in samples.iter().enumerate() {
        let candidates = match provider
            .search_nearby_places(location, keyword, config.place_search_radius_m)
            .await
        {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(error = %e, "nearby place search failed, skipping sample");
                Vec::new()
            }
        };

        let mut ranked = candidates;
        ranked.sort_by(|a, b| {
            b.rating
                .unwrap_or(0.0)
                .partial_cmp(&a.rating.unwrap_or(0.0))
                .unwrap_or(Ordering::Equal)
        });

        let note = SAMPLE_NOTES[i.min(SAMPLE_NOTES.len() - 1)];
        for candidate in ranked.into_iter().take(config.food_per_sample) {
            stops.push(FoodStop {
                id: candidate.id,
                name: candidate.name,
                location: candidate.location,
                rating: candidate.rating.unwrap_or(0.0),
                price_range: None,
                note: Some(note.to_string()),
            });
        }
    }

    stops
}

/// Up to `n` evenly spaced step end-locations along the roadmap.
fn sample_points(roadmap: &[RoadmapStep], n: usize) -> Vec<GeoPoint> {
    let count = n.min(roadmap.len());
    (0..count)
        .map(|i| {
            let idx = (i + 1) * roadmap.len() / (count + 1);
            roadmap[idx.min(roadmap.len() - 1)].end_location
        })
        .collect()
}

/// Drop later stops that repeat an earlier id.
fn dedupe_by_id(stops: Vec<FoodStop>) -> Vec<FoodStop> {
    let mut seen = HashSet::new();
    stops
        .into_iter()
        .filter(|stop| seen.insert(stop.id.clone()))
        .collect()
}
