//! Persistence collaborator seam.
//!
//! The engine never owns pandal or food-place records; it reads them through
//! the `PandalStore` trait. `MemoryStore` is the in-process implementation
//! used by tests and the demo binary. Infrastructure failures from a real
//! store propagate through the engine unmasked.

use std::collections::HashMap;

use chrono::NaiveTime;

use crate::domain::{CrowdLevel, FoodPlace, GeoPoint, Pandal, PriceRange, haversine_km};

/// Errors from the persistence collaborator.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Lookup operations the engine needs from the persistence collaborator.
#[allow(async_fn_in_trait)]
pub trait PandalStore {
    /// Fetch the pandals matching the given ids. Missing or inactive ids are
    /// simply absent from the result; ordering is unspecified.
    async fn pandals_by_ids(&self, ids: &[String]) -> Result<Vec<Pandal>, StoreError>;

    /// Fetch food places within `radius_m` metres of a location.
    async fn food_places_near(
        &self,
        location: &GeoPoint,
        radius_m: f64,
    ) -> Result<Vec<FoodPlace>, StoreError>;
}

/// In-memory store for tests and local development.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pandals: HashMap<String, Pandal>,
    food_places: Vec<FoodPlace>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pandal, replacing any existing record with the same id.
    pub fn insert_pandal(&mut self, pandal: Pandal) {
        self.pandals.insert(pandal.id.clone(), pandal);
    }

    /// Add a food place.
    pub fn insert_food_place(&mut self, place: FoodPlace) {
        self.food_places.push(place);
    }

    /// Number of pandals held.
    pub fn pandal_count(&self) -> usize {
        self.pandals.len()
    }
}

impl PandalStore for MemoryStore {
    async fn pandals_by_ids(&self, ids: &[String]) -> Result<Vec<Pandal>, StoreError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.pandals.get(id))
            .cloned()
            .collect())
    }

    async fn food_places_near(
        &self,
        location: &GeoPoint,
        radius_m: f64,
    ) -> Result<Vec<FoodPlace>, StoreError> {
        Ok(self
            .food_places
            .iter()
            .filter(|place| haversine_km(&place.location, location) * 1000.0 <= radius_m)
            .cloned()
            .collect())
    }
}

// Literal clock values only; midnight stands in if one is ever malformed.
fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

fn pandal(
    id: &str,
    name: &str,
    lat: f64,
    lon: f64,
    rating: f32,
    crowd_level: CrowdLevel,
) -> Pandal {
    Pandal {
        id: id.to_string(),
        name: name.to_string(),
        location: GeoPoint::new(lat, lon),
        rating,
        crowd_level,
        opening_time: hm(9, 0),
        closing_time: hm(23, 30),
    }
}

fn food_place(id: &str, name: &str, lat: f64, lon: f64, rating: f32, price: PriceRange) -> FoodPlace {
    FoodPlace {
        id: id.to_string(),
        name: name.to_string(),
        location: GeoPoint::new(lat, lon),
        rating,
        price_range: price,
    }
}

/// A seeded store covering well-known Kolkata pandals and food places,
/// for the demo binary and tests.
pub fn sample_kolkata() -> MemoryStore {
    let mut store = MemoryStore::new();

    store.insert_pandal(pandal(
        "bagbazar",
        "Bagbazar Sarbojanin",
        22.6046,
        88.3672,
        4.6,
        CrowdLevel::High,
    ));
    store.insert_pandal(pandal(
        "kumartuli",
        "Kumartuli Park",
        22.6003,
        88.3631,
        4.5,
        CrowdLevel::High,
    ));
    store.insert_pandal(pandal(
        "ahiritola",
        "Ahiritola Sarbojanin",
        22.5953,
        88.3587,
        4.2,
        CrowdLevel::Moderate,
    ));
    store.insert_pandal(pandal(
        "college-square",
        "College Square",
        22.5744,
        88.3662,
        4.7,
        CrowdLevel::High,
    ));
    store.insert_pandal(pandal(
        "ekdalia",
        "Ekdalia Evergreen",
        22.5178,
        88.3682,
        4.4,
        CrowdLevel::Moderate,
    ));
    store.insert_pandal(pandal(
        "suruchi",
        "Suruchi Sangha",
        22.5141,
        88.3232,
        4.5,
        CrowdLevel::Low,
    ));

    store.insert_food_place(food_place(
        "putiram",
        "Putiram Sweets",
        22.5751,
        88.3655,
        4.4,
        PriceRange::Low,
    ));
    store.insert_food_place(food_place(
        "allen-kitchen",
        "Allen Kitchen",
        22.5996,
        88.3641,
        4.3,
        PriceRange::Moderate,
    ));
    store.insert_food_place(food_place(
        "girish-dey",
        "Girish Chandra Dey & Nakur",
        22.5969,
        88.3700,
        4.6,
        PriceRange::Low,
    ));
    store.insert_food_place(food_place(
        "bhojohori",
        "Bhojohori Manna",
        22.5185,
        88.3679,
        4.2,
        PriceRange::Expensive,
    ));
    store.insert_food_place(food_place(
        "balaram",
        "Balaram Mullick",
        22.5205,
        88.3442,
        4.5,
        PriceRange::Moderate,
    ));

    store
}
