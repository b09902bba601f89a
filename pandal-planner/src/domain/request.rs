//! The planning request and its enumerated preferences.
//!
//! `transport_mode` and `budget` arrive as strings so the validator (not the
//! deserializer) gets to report bad values: a malformed mode is a listed
//! validation failure, while an unknown budget tier silently degrades to
//! medium.

use serde::Deserialize;

use super::GeoPoint;
use super::pandal::PriceRange;

/// How the visitor travels between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Walking,
    Car,
    PublicTransport,
}

impl TransportMode {
    /// Parse a wire-format mode name. Strict: unknown names are `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "walking" => Some(Self::Walking),
            "car" => Some(Self::Car),
            "public-transport" => Some(Self::PublicTransport),
            _ => None,
        }
    }

    /// Wire-format name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Car => "car",
            Self::PublicTransport => "public-transport",
        }
    }

    /// Mode name understood by the directions provider.
    pub fn provider_mode(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Car => "driving",
            Self::PublicTransport => "transit",
        }
    }

    /// Maximum number of pandals a single itinerary may cover in this mode.
    pub fn max_pandals(&self) -> usize {
        match self {
            Self::Walking => 8,
            Self::Car | Self::PublicTransport => 15,
        }
    }
}

/// The visitor's food budget tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl BudgetTier {
    /// Parse a budget tier, defaulting to `Medium` for anything unrecognised.
    pub fn parse_lossy(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    /// Estimated food spend per stop, in whole currency units.
    pub fn food_cost(&self) -> u32 {
        match self {
            Self::Low => 80,
            Self::Medium => 150,
            Self::High => 300,
        }
    }

    /// Whether a food place in the given price band fits this budget.
    pub fn allows(&self, price: PriceRange) -> bool {
        match self {
            Self::Low => price == PriceRange::Low,
            Self::Medium => matches!(price, PriceRange::Low | PriceRange::Moderate),
            Self::High => true,
        }
    }
}

/// User preferences attached to a planning request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePreferences {
    /// Budget tier name; unknown values degrade to medium.
    #[serde(default)]
    pub budget: String,

    /// Preferred cuisine keywords, best-effort.
    #[serde(default)]
    pub cuisine: Vec<String>,
}

/// A request to plan one itinerary. Ephemeral; nothing is persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub start_point: GeoPoint,
    pub end_point: GeoPoint,
    pub selected_pandal_ids: Vec<String>,
    pub transport_mode: String,
    #[serde(default)]
    pub preferences: RoutePreferences,
    #[serde(default)]
    pub include_food_stops: bool,
}
