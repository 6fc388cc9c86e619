//! Route CRUD and the sequential route-creation flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Publishing a route is four dependent backend calls: create the route,
//! then each segment, then each fare (which needs the segment ids from the
//! previous step), then the schedule. [`create_route_plan`] runs them
//! strictly in order and stops at the first failure. Steps that already ran
//! are NOT rolled back; the caller gets the failing step's error and the
//! operator resumes by editing server-side. Making the whole sequence
//! transactional would be a backend concern.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_routes_test.rs"]
mod api_routes_test;

use std::fmt;

use crate::net::http::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::http::{ApiRequest, execute, fetch_json};
use crate::net::types::BusRoute;
#[cfg(feature = "hydrate")]
use crate::net::types::CreatedId;
use crate::state::wizard::{RouteDraft, SegmentDraft, WizardStage};
#[cfg(feature = "hydrate")]
use crate::state::wizard::segments_from_stops;

pub fn route_endpoint(id: &str) -> String {
    format!("/operator/routes/{id}")
}

pub fn segments_endpoint(route_id: &str) -> String {
    format!("/operator/routes/{route_id}/segments")
}

pub fn fares_endpoint(route_id: &str) -> String {
    format!("/operator/routes/{route_id}/fares")
}

pub fn schedule_endpoint(route_id: &str) -> String {
    format!("/operator/routes/{route_id}/schedule")
}

pub fn route_payload(draft: &RouteDraft) -> serde_json::Value {
    serde_json::json!({
        "name": draft.name.trim(),
        "origin": draft.origin.trim(),
        "destination": draft.destination.trim(),
        "stops": draft.stops.iter().map(|s| s.trim()).collect::<Vec<_>>(),
    })
}

pub fn segment_payload(segment: &SegmentDraft, position: usize) -> serde_json::Value {
    serde_json::json!({
        "originStop": segment.origin_stop,
        "destinationStop": segment.destination_stop,
        "position": position,
    })
}

pub fn fare_payload(segment_id: &str, seat_type: crate::net::types::SeatType, amount_minor: i64) -> serde_json::Value {
    serde_json::json!({
        "segmentId": segment_id,
        "seatType": seat_type,
        "amountMinor": amount_minor,
    })
}

pub fn schedule_payload(draft: &RouteDraft) -> serde_json::Value {
    serde_json::json!({
        "busId": draft.bus_id,
        "departureTime": draft.departure_time,
        "daysOfWeek": draft.days_of_week,
    })
}

/// A failure in the route-creation sequence, labelled with the step that
/// produced it. Earlier steps' server-side effects remain in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardError {
    pub step: WizardStage,
    pub message: String,
}

impl WizardError {
    pub fn at(step: WizardStage, source: &ApiError) -> Self {
        Self {
            step,
            message: source.to_string(),
        }
    }
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Creating the {} failed: {}", self.step.label(), self.message)
    }
}

/// List the operator's routes.
///
/// # Errors
///
/// Any [`ApiError`] case from the authenticated wrapper.
pub async fn list_routes() -> Result<Vec<BusRoute>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(ApiRequest::get("/operator/routes")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network)
    }
}

/// Delete a route and its dependent resources.
///
/// # Errors
///
/// Any [`ApiError`] case from the authenticated wrapper.
pub async fn delete_route(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(ApiRequest::delete(route_endpoint(id))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network)
    }
}

/// Run the full route → segments → fares → schedule sequence.
///
/// Each step consumes the ids the previous step returned, so the calls
/// cannot be reordered or parallelized. Returns the new route's id.
///
/// # Errors
///
/// The first failing step's [`WizardError`]; the sequence stops there.
pub async fn create_route_plan(draft: &RouteDraft) -> Result<String, WizardError> {
    #[cfg(feature = "hydrate")]
    {
        let route: CreatedId = fetch_json(ApiRequest::post("/operator/routes", route_payload(draft)))
            .await
            .map_err(|e| WizardError::at(WizardStage::Route, &e))?;

        let mut segment_ids = Vec::new();
        let segments = segments_from_stops(&draft.origin, &draft.stops, &draft.destination);
        for (position, segment) in segments.iter().enumerate() {
            let created: CreatedId = fetch_json(ApiRequest::post(
                segments_endpoint(&route.id),
                segment_payload(segment, position),
            ))
            .await
            .map_err(|e| WizardError::at(WizardStage::Segments, &e))?;
            segment_ids.push(created.id);
        }

        for fare in &draft.fares {
            let Some(segment_id) = segment_ids.get(fare.segment_index) else {
                return Err(WizardError {
                    step: WizardStage::Fares,
                    message: "fare references an unknown segment".to_owned(),
                });
            };
            execute(ApiRequest::post(
                fares_endpoint(&route.id),
                fare_payload(segment_id, fare.seat_type, fare.amount_minor),
            ))
            .await
            .map_err(|e| WizardError::at(WizardStage::Fares, &e))?;
        }

        execute(ApiRequest::post(schedule_endpoint(&route.id), schedule_payload(draft)))
            .await
            .map_err(|e| WizardError::at(WizardStage::Schedule, &e))?;

        Ok(route.id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(WizardError::at(WizardStage::Route, &ApiError::Network))
    }
}
