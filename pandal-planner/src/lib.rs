//! Pandal-hopping route planner.
//!
//! Plans a multi-stop visiting itinerary across a curated set of pandals,
//! given a start point, end point, transport mode, and user preferences.
//! Itineraries carry estimated cost, estimated time, a quality score, and
//! heuristic alternates. Path geometry comes from an external directions
//! provider, with a deterministic locally computed fallback when that
//! provider is unavailable.

pub mod cache;
pub mod directions;
pub mod domain;
pub mod engine;
pub mod store;
