//! Public trip search via `GET /search`.
//!
//! Search works signed-out; the wrapper simply sends no `Authorization`
//! header when the store is empty.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_search_test.rs"]
mod api_search_test;

use crate::net::api::query_string;
use crate::net::http::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::http::{ApiRequest, fetch_json};
use crate::net::types::TripResult;

pub fn search_endpoint(from: &str, to: &str, date: &str) -> String {
    format!("/search{}", query_string(&[("from", from), ("to", to), ("date", date)]))
}

/// Search published trips between two cities on a date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Any [`ApiError`] case from the authenticated wrapper.
pub async fn search(from: &str, to: &str, date: &str) -> Result<Vec<TripResult>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(ApiRequest::get(search_endpoint(from, to, date))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (from, to, date);
        Err(ApiError::Network)
    }
}
