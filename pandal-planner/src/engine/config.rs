//! Engine configuration.

/// Tunable parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Radius around each visited pandal for curated food lookups (metres).
    pub food_radius_m: f64,

    /// Maximum in-flight food lookups; results are merged in input order
    /// regardless of completion order.
    pub food_concurrency: usize,

    /// Maximum sample points along the roadmap for keyword place searches.
    pub max_food_samples: usize,

    /// Candidates kept per sample point.
    pub food_per_sample: usize,

    /// Radius for keyword place searches around a sample point (metres).
    pub place_search_radius_m: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            food_radius_m: 500.0,
            food_concurrency: 4,
            max_food_samples: 3,
            food_per_sample: 3,
            place_search_radius_m: 500,
        }
    }
}
