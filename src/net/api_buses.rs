//! Fleet CRUD under `/operator/buses`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_buses_test.rs"]
mod api_buses_test;

use crate::net::http::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::http::{ApiRequest, execute, fetch_json};
use crate::net::types::Bus;
use crate::state::buses::BusDraft;

pub fn bus_endpoint(id: &str) -> String {
    format!("/operator/buses/{id}")
}

pub fn bus_payload(draft: &BusDraft) -> serde_json::Value {
    serde_json::json!({
        "registrationNo": draft.registration_no.trim(),
        "name": draft.name.trim(),
        "seatLayout": draft.seat_layout.trim(),
        "totalSeats": draft.total_seats,
        "amenityIds": draft.amenity_ids,
    })
}

/// List the operator's fleet.
///
/// # Errors
///
/// Any [`ApiError`] case from the authenticated wrapper.
pub async fn list_buses() -> Result<Vec<Bus>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(ApiRequest::get("/operator/buses")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network)
    }
}

/// Create a bus from a validated draft.
///
/// # Errors
///
/// `Api` with the backend's message (e.g. a registration number already in
/// use), or any other [`ApiError`] case.
pub async fn create_bus(draft: &BusDraft) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(ApiRequest::post("/operator/buses", bus_payload(draft))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::Network)
    }
}

/// Replace a bus's details.
///
/// # Errors
///
/// Any [`ApiError`] case from the authenticated wrapper.
pub async fn update_bus(id: &str, draft: &BusDraft) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(ApiRequest::put(bus_endpoint(id), bus_payload(draft))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft);
        Err(ApiError::Network)
    }
}

/// Remove a bus from the fleet.
///
/// # Errors
///
/// Any [`ApiError`] case from the authenticated wrapper.
pub async fn delete_bus(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(ApiRequest::delete(bus_endpoint(id))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network)
    }
}
