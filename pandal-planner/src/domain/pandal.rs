//! Points of interest: pandals and food places.
//!
//! These records are owned by the persistence collaborator; the engine only
//! reads them. They therefore stay plain and construction stays open.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Reported crowd level at a pandal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    Low,
    Moderate,
    High,
}

/// A pandal: a temporary decorated pavilion treated as a point of interest.
#[derive(Debug, Clone)]
pub struct Pandal {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
    pub rating: f32,
    pub crowd_level: CrowdLevel,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
}

impl Pandal {
    /// Whether the pandal is open at the given time of day.
    ///
    /// Handles schedules that cross midnight (common during festival week).
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        if self.opening_time <= self.closing_time {
            time >= self.opening_time && time <= self.closing_time
        } else {
            time >= self.opening_time || time <= self.closing_time
        }
    }
}

/// Price band of a food place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    Low,
    Moderate,
    Expensive,
}

/// A food place near the route, from the collaborator store.
#[derive(Debug, Clone)]
pub struct FoodPlace {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
    pub rating: f32,
    pub price_range: PriceRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn pandal(open: NaiveTime, close: NaiveTime) -> Pandal {
        Pandal {
            id: "p1".into(),
            name: "Test Pandal".into(),
            location: GeoPoint::new(22.6, 88.37),
            rating: 4.2,
            crowd_level: CrowdLevel::Moderate,
            opening_time: open,
            closing_time: close,
        }
    }

    #[test]
    fn open_within_daytime_schedule() {
        let p = pandal(hm(10, 0), hm(22, 0));
        assert!(p.is_open_at(hm(10, 0)));
        assert!(p.is_open_at(hm(15, 30)));
        assert!(p.is_open_at(hm(22, 0)));
        assert!(!p.is_open_at(hm(9, 59)));
        assert!(!p.is_open_at(hm(23, 0)));
    }

    #[test]
    fn open_across_midnight() {
        let p = pandal(hm(17, 0), hm(2, 0));
        assert!(p.is_open_at(hm(23, 30)));
        assert!(p.is_open_at(hm(1, 0)));
        assert!(!p.is_open_at(hm(12, 0)));
    }

    #[test]
    fn price_range_serde_names() {
        assert_eq!(
            serde_json::to_string(&PriceRange::Expensive).unwrap(),
            "\"expensive\""
        );
        let parsed: PriceRange = serde_json::from_str("\"moderate\"").unwrap();
        assert_eq!(parsed, PriceRange::Moderate);
    }
}
