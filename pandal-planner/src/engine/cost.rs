//! Cost estimation.
//!
//! All amounts are whole units of an implicit single currency, rounded up.

use crate::domain::{BudgetTier, CostBreakdown, TransportMode};

/// Per-kilometre rate for car travel.
const CAR_RATE_PER_KM: f64 = 8.0;

/// Per-kilometre rate for public transport, capped at a flat maximum fare.
const TRANSIT_RATE_PER_KM: f64 = 2.0;
const TRANSIT_FARE_CAP: f64 = 50.0;

/// Transport cost for covering a distance in a given mode.
pub fn transport_cost(distance_meters: f64, mode: TransportMode) -> u32 {
    let km = distance_meters / 1000.0;
    match mode {
        TransportMode::Walking => 0,
        TransportMode::Car => (km * CAR_RATE_PER_KM).ceil() as u32,
        TransportMode::PublicTransport => {
            (km * TRANSIT_RATE_PER_KM).min(TRANSIT_FARE_CAP).ceil() as u32
        }
    }
}

/// Full cost estimate: transport plus per-stop food spend.
pub fn estimate_cost(
    distance_meters: f64,
    mode: TransportMode,
    budget: BudgetTier,
    food_stop_count: usize,
) -> CostBreakdown {
    let transport = transport_cost(distance_meters, mode);
    let food = budget.food_cost() * food_stop_count as u32;

    CostBreakdown {
        transport,
        food,
        total: transport + food,
    }
}
