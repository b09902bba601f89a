//! Domain types for route planning.
//!
//! Pure data: geographic primitives, points of interest, the planning
//! request, and the assembled itinerary output. No I/O lives here.

mod geo;
mod pandal;
mod request;
mod route;

pub use geo::{GeoPoint, haversine_km};
pub use pandal::{CrowdLevel, FoodPlace, Pandal, PriceRange};
pub use request::{BudgetTier, RoutePreferences, RouteRequest, TransportMode};
pub use route::{
    AlternateRoute, CostBreakdown, FoodStop, OptimizedRoute, PandalVisit, RoadmapStep, RouteGeometry,
    RouteLeg,
};
