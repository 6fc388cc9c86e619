//! Auth and account endpoints: login, current user, operator registration,
//! and the password-reset / email-verification flows.
//!
//! Client-side (hydrate): real HTTP calls via the authenticated wrapper.
//! Server-side (SSR): stubs, since these endpoints are only meaningful in
//! the browser.
//!
//! The auth endpoints themselves are sent as `public()` requests: a 401
//! from `/auth/login` means bad credentials and must reach the caller, not
//! trigger a token refresh.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_auth_test.rs"]
mod api_auth_test;

use crate::net::api::{form_encode, query_string};
use crate::net::http::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::http::{ApiRequest, execute, fetch_json};
use crate::net::types::{AuthTokens, UserProfile};

pub fn login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

pub fn register_payload(name: &str, company: &str, email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "companyName": company,
        "email": email,
        "password": password
    })
}

pub fn reset_payload(token: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "token": token, "password": password })
}

/// The one non-JSON call in the API: the reset-request form body.
pub fn forgot_password_form(email: &str) -> String {
    form_encode(&[("email", email)])
}

pub fn verify_email_endpoint(token: &str) -> String {
    format!("/auth/verify-email{}", query_string(&[("token", token)]))
}

/// Exchange credentials for a token pair via `POST /auth/login`.
///
/// Does not touch the session store; the auth controller persists tokens so
/// there is a single writer.
///
/// # Errors
///
/// `Api` with the backend's message on bad credentials, `Network` on
/// transport failure.
pub async fn login(email: &str, password: &str) -> Result<AuthTokens, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(ApiRequest::post("/auth/login", login_payload(email, password)).public()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network)
    }
}

/// Fetch the authenticated user from `GET /users/me`.
/// Returns `None` if the session is missing, expired, or on the server.
pub async fn fetch_current_user() -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(ApiRequest::get("/users/me")).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Register a new operator account via `POST /operators/register`.
///
/// # Errors
///
/// `Api` with the backend's validation message (e.g. an email already in
/// use), `Network` on transport failure.
pub async fn register_operator(
    name: &str,
    company: &str,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(
            ApiRequest::post("/operators/register", register_payload(name, company, email, password))
                .public(),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, company, email, password);
        Err(ApiError::Network)
    }
}

/// Request a password-reset email via `POST /auth/forgot-password`.
///
/// # Errors
///
/// `Api` on rejection, `Network` on transport failure.
pub async fn forgot_password(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(ApiRequest::post_form("/auth/forgot-password", forgot_password_form(email)).public())
            .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Network)
    }
}

/// Set a new password with an emailed reset token via
/// `POST /auth/reset-password`.
///
/// # Errors
///
/// `Api` when the token is invalid or expired, `Network` on transport
/// failure.
pub async fn reset_password(token: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(ApiRequest::post("/auth/reset-password", reset_payload(token, password)).public()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, password);
        Err(ApiError::Network)
    }
}

/// Confirm an email address via `GET /auth/verify-email?token=`.
///
/// # Errors
///
/// `Api` when the token is invalid or already used, `Network` on transport
/// failure.
pub async fn verify_email(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(ApiRequest::get(verify_email_endpoint(token)).public()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network)
    }
}
