//! Conversion from provider DTOs to domain route geometry.

use crate::domain::{RoadmapStep, RouteGeometry, RouteLeg};

use super::error::DirectionsError;
use super::sanitize::strip_html;
use super::types::{DirectionsResponse, ProviderStep};

/// Convert a directions response into route geometry.
///
/// Only the first route alternative is used. Returns `Err` for a non-OK
/// status or an OK response with no routes; the caller decides whether to
/// fall back.
pub fn convert_directions(resp: &DirectionsResponse) -> Result<RouteGeometry, DirectionsError> {
    if resp.status != "OK" {
        return Err(DirectionsError::Status {
            status: resp.status.clone(),
            message: resp.error_message.clone(),
        });
    }

    let route = resp.routes.first().ok_or_else(|| DirectionsError::Status {
        status: "ZERO_RESULTS".to_string(),
        message: Some("response contained no routes".to_string()),
    })?;

    let legs = route
        .legs
        .iter()
        .map(|leg| RouteLeg {
            distance_meters: leg.distance.value,
            duration_seconds: leg.duration.value,
            steps: leg.steps.iter().map(convert_step).collect(),
        })
        .collect();

    Ok(RouteGeometry {
        legs,
        used_fallback: false,
        fallback_reason: None,
    })
}

fn convert_step(step: &ProviderStep) -> RoadmapStep {
    let instruction = step
        .html_instructions
        .as_deref()
        .map(strip_html)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Continue".to_string());

    RoadmapStep {
        instruction,
        distance_meters: step.distance.value,
        time_minutes: (step.duration.value / 60.0).round() as u32,
        end_location: step.end_location.to_geo(),
    }
}
