//! Schedule management under `/operator/schedules`.
//!
//! Schedules are created through the route wizard; this module covers the
//! standalone list/update/delete operations.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_schedules_test.rs"]
mod api_schedules_test;

use crate::net::http::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::http::{ApiRequest, execute, fetch_json};
use crate::net::types::Schedule;
use crate::state::schedules::ScheduleDraft;

pub fn schedule_endpoint(id: &str) -> String {
    format!("/operator/schedules/{id}")
}

pub fn schedule_update_payload(draft: &ScheduleDraft) -> serde_json::Value {
    serde_json::json!({
        "departureTime": draft.departure_time,
        "daysOfWeek": draft.days_of_week,
        "active": draft.active,
    })
}

/// List every schedule across the operator's routes.
///
/// # Errors
///
/// Any [`ApiError`] case from the authenticated wrapper.
pub async fn list_schedules() -> Result<Vec<Schedule>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(ApiRequest::get("/operator/schedules")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network)
    }
}

/// Update a schedule's departure time, operating days, or active flag.
///
/// # Errors
///
/// Any [`ApiError`] case from the authenticated wrapper.
pub async fn update_schedule(id: &str, draft: &ScheduleDraft) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(ApiRequest::put(schedule_endpoint(id), schedule_update_payload(draft))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft);
        Err(ApiError::Network)
    }
}

/// Remove a schedule; future searches stop returning its departures.
///
/// # Errors
///
/// Any [`ApiError`] case from the authenticated wrapper.
pub async fn delete_schedule(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(ApiRequest::delete(schedule_endpoint(id))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network)
    }
}
