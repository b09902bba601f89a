//! Request validation.
//!
//! Checks run in a fixed order and every failure is collected, so the caller
//! sees all problems at once rather than fixing them one by one. No external
//! service is consulted.

use std::fmt;

use crate::domain::{BudgetTier, GeoPoint, RouteRequest, TransportMode};

/// A single failed field with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

/// Validation failure listing every offending field.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid route request: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", issue.field, issue.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// A request that has passed validation, with parsed enumerations.
#[derive(Debug, Clone)]
pub struct ValidRequest {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub pandal_ids: Vec<String>,
    pub mode: TransportMode,
    pub budget: BudgetTier,
    pub cuisine: Vec<String>,
    pub include_food_stops: bool,
}

/// Cap applied when the transport mode itself failed to parse, so a bad mode
/// string cannot smuggle an oversized pandal list past validation.
const DEFAULT_PANDAL_CAP: usize = 15;

/// Validate a planning request, collecting all failures.
pub fn validate(request: &RouteRequest) -> Result<ValidRequest, ValidationError> {
    let mut issues = Vec::new();

    if !request.start_point.is_in_range() {
        issues.push(FieldIssue {
            field: "startPoint",
            message: "coordinates out of range".to_string(),
        });
    }
    if !request.end_point.is_in_range() {
        issues.push(FieldIssue {
            field: "endPoint",
            message: "coordinates out of range".to_string(),
        });
    }

    let mode = TransportMode::parse(&request.transport_mode);
    if mode.is_none() {
        issues.push(FieldIssue {
            field: "transportMode",
            message: format!("unknown transport mode '{}'", request.transport_mode),
        });
    }

    if request.selected_pandal_ids.is_empty() {
        issues.push(FieldIssue {
            field: "selectedPandalIds",
            message: "at least one pandal must be selected".to_string(),
        });
    }

    let cap = mode.map_or(DEFAULT_PANDAL_CAP, |m| m.max_pandals());
    if request.selected_pandal_ids.len() > cap {
        issues.push(FieldIssue {
            field: "selectedPandalIds",
            message: format!(
                "at most {cap} pandals may be selected for this transport mode"
            ),
        });
    }

    match mode {
        Some(mode) if issues.is_empty() => Ok(ValidRequest {
            start: request.start_point,
            end: request.end_point,
            pandal_ids: request.selected_pandal_ids.clone(),
            mode,
            budget: BudgetTier::parse_lossy(&request.preferences.budget),
            cuisine: request.preferences.cuisine.clone(),
            include_food_stops: request.include_food_stops,
        }),
        _ => Err(ValidationError { issues }),
    }
}
