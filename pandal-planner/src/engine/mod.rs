//! Route planning and optimization engine.
//!
//! Orchestrates the pipeline: validate the request, resolve pandals from the
//! store, fetch path geometry (falling back to a local approximation when
//! the provider fails), select food stops, estimate cost, score the route,
//! and attach heuristic alternates. Stateless and request-scoped.

mod alternates;
mod config;
mod cost;
mod food;
mod plan;
mod score;
mod validate;

#[cfg(test)]
mod plan_tests;

pub use alternates::generate_alternates;
pub use config::PlannerConfig;
pub use cost::{estimate_cost, transport_cost};
pub use food::select_food_stops;
pub use plan::{PlanError, RoutePlanner};
pub use score::optimization_score;
pub use validate::{FieldIssue, ValidRequest, ValidationError, validate};
