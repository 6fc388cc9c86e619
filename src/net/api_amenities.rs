//! Amenity catalogue via `GET /amenities`.

#![allow(clippy::unused_async)]

use crate::net::http::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::http::{ApiRequest, fetch_json};
use crate::net::types::Amenity;

/// Fetch the platform-wide amenity catalogue. Cached per page load by the
/// callers; the list changes rarely.
///
/// # Errors
///
/// Any [`ApiError`] case from the authenticated wrapper.
pub async fn list_amenities() -> Result<Vec<Amenity>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(ApiRequest::get("/amenities")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network)
    }
}
