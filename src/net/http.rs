//! Authenticated HTTP wrapper with one-shot refresh-on-401.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every feature API module sends through here. The wrapper attaches the
//! stored bearer token, and when an authenticated request comes back 401 it
//! exchanges the refresh token once and replays the request once. A 401 on
//! the replayed request, or any refresh failure, invalidates the session.
//!
//! The "at most one retry" rule is enforced structurally: `next_step` is a
//! pure transition function over `SendPhase`, and the only path that issues
//! a second request moves the phase to `Retried`, from which a further 401
//! can only fail.
//!
//! ERROR HANDLING
//! ==============
//! Failures collapse into the four cases of [`ApiError`]. Backend messages
//! on 4xx responses are surfaced verbatim; 5xx and transport failures get
//! generic retry wording so internals never leak into the UI.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::fmt;

use serde::Deserialize;

use crate::net::session;
#[cfg(feature = "hydrate")]
use crate::net::types::RefreshResponse;

/// Failure taxonomy for all backend calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received.
    Network,
    /// The session could not be revalidated; stored tokens were cleared.
    SessionExpired,
    /// Non-2xx response, with a backend-supplied or fallback message.
    Api { status: u16, message: String },
    /// 2xx response whose body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network => write!(f, "network error, please try again"),
            ApiError::SessionExpired => write!(f, "your session has expired, please sign in again"),
            ApiError::Api { message, .. } => write!(f, "{message}"),
            ApiError::Decode(_) => write!(f, "unexpected response from the server"),
        }
    }
}

impl std::error::Error for ApiError {}

/// HTTP methods used against the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A request descriptor: method, path, optional JSON or form body, and
/// whether the stored bearer token (and the refresh path) applies.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    form: Option<String>,
    auth: bool,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        let mut req = Self::new(HttpMethod::Post, path);
        req.body = Some(body);
        req
    }

    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        let mut req = Self::new(HttpMethod::Put, path);
        req.body = Some(body);
        req
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// POST with an `application/x-www-form-urlencoded` body.
    pub fn post_form(path: impl Into<String>, form: String) -> Self {
        let mut req = Self::new(HttpMethod::Post, path);
        req.form = Some(form);
        req
    }

    /// Mark this request as unauthenticated: no bearer header, and a 401 is
    /// delivered to the caller instead of triggering a refresh. Used by the
    /// auth endpoints themselves, where 401 means "bad credentials".
    pub fn public(mut self) -> Self {
        self.auth = false;
        self
    }

    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            form: None,
            auth: true,
        }
    }
}

/// Where an authenticated request is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendPhase {
    /// First issue of the request.
    Sent,
    /// The single permitted replay after a refresh.
    Retried,
}

/// What to do with a response in a given phase.
#[derive(Debug, PartialEq, Eq)]
pub enum SendStep {
    /// Hand the response (success or error) to the caller.
    Deliver,
    /// Exchange the refresh token, then replay once.
    Refresh,
    /// The replay was still unauthorized; the session is invalid.
    Fail,
}

/// Transition function for the retry-once machine. Only `Sent` + 401 leads
/// to a refresh, so a second refresh for the same request is unrepresentable.
pub fn next_step(phase: SendPhase, status: u16) -> SendStep {
    match (phase, status) {
        (SendPhase::Sent, 401) => SendStep::Refresh,
        (SendPhase::Retried, 401) => SendStep::Fail,
        _ => SendStep::Deliver,
    }
}

/// Whether a 401 handler needs to call the refresh endpoint itself, or can
/// reuse a token another in-flight caller already refreshed.
#[derive(Debug, PartialEq, Eq)]
pub enum RefreshAction {
    /// The stored token changed since this request was sent; retry with it.
    UseStored,
    /// This caller performs the refresh exchange.
    CallRefresh,
}

/// Compare the token a failed request carried against the store. Two
/// concurrent 401s then collapse into one refresh call: whichever caller
/// resumes second sees a changed store and skips its own exchange.
pub fn refresh_action(sent_with: Option<&str>, stored: Option<&str>) -> RefreshAction {
    match (sent_with, stored) {
        (Some(used), Some(current)) if used != current => RefreshAction::UseStored,
        _ => RefreshAction::CallRefresh,
    }
}

/// `Authorization` header value for a stored token; `None` when there is no
/// session, in which case the request goes out without the header.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Bearer {t}"))
}

/// Clear the session and produce the error every invalid-session path
/// returns. Keeping the pairing in one place means no failure branch can
/// clear without signalling, or signal without clearing.
pub fn invalidate_session() -> ApiError {
    session::clear();
    ApiError::SessionExpired
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Map a non-2xx response to [`ApiError::Api`]. 4xx messages from the
/// backend are surfaced verbatim for field-level handling; 5xx always gets
/// generic wording.
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    let backend_message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());
    let message = if status >= 500 {
        "something went wrong on our side, please try again".to_owned()
    } else {
        backend_message.unwrap_or_else(|| format!("request failed: {status}"))
    };
    ApiError::Api { status, message }
}

/// Resolve a backend path against the configured base URL. The base comes
/// from `BUSLINE_API_BASE` at build time and defaults to same-origin
/// relative paths.
pub fn api_url(path: &str) -> String {
    join_base(option_env!("BUSLINE_API_BASE").unwrap_or(""), path)
}

/// Join a base URL and an absolute path without doubling slashes.
pub fn join_base(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Send a request and decode its JSON body.
///
/// # Errors
///
/// Any [`ApiError`] case: transport failure, exhausted refresh, non-2xx
/// status, or an undecodable body.
#[cfg(feature = "hydrate")]
pub async fn fetch_json<T: serde::de::DeserializeOwned>(req: ApiRequest) -> Result<T, ApiError> {
    let body = send_raw(&req).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a request, discarding any response body.
///
/// # Errors
///
/// Same cases as [`fetch_json`], minus decoding.
#[cfg(feature = "hydrate")]
pub async fn execute(req: ApiRequest) -> Result<(), ApiError> {
    send_raw(&req).await.map(|_| ())
}

#[cfg(feature = "hydrate")]
async fn send_raw(req: &ApiRequest) -> Result<String, ApiError> {
    if !req.auth {
        let resp = perform(req, None).await?;
        return deliver(resp).await;
    }

    let mut phase = SendPhase::Sent;
    let mut token = session::access_token();
    loop {
        let resp = perform(req, token.as_deref()).await?;
        match next_step(phase, resp.status()) {
            SendStep::Deliver => return deliver(resp).await,
            SendStep::Fail => return Err(invalidate_session()),
            SendStep::Refresh => {
                token = Some(obtain_fresh_token(token.as_deref()).await?);
                phase = SendPhase::Retried;
            }
        }
    }
}

#[cfg(feature = "hydrate")]
async fn deliver(resp: gloo_net::http::Response) -> Result<String, ApiError> {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(error_from_body(status, &body))
    }
}

#[cfg(feature = "hydrate")]
async fn perform(req: &ApiRequest, token: Option<&str>) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::{Method, RequestBuilder};

    let method = match req.method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    };

    let url = api_url(&req.path);
    let mut builder = RequestBuilder::new(&url).method(method);
    if let Some(header) = bearer_header(token) {
        builder = builder.header("Authorization", &header);
    }

    let request = match (&req.body, &req.form) {
        (Some(json), _) => builder.json(json).map_err(|_| ApiError::Network)?,
        (None, Some(form)) => builder
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form.clone())
            .map_err(|_| ApiError::Network)?,
        (None, None) => builder.build().map_err(|_| ApiError::Network)?,
    };

    request.send().await.map_err(|_| ApiError::Network)
}

/// Produce a valid access token after a 401, refreshing at most once.
///
/// Every failure path runs through [`invalidate_session`], so a dead refresh
/// token can never leave a half-cleared session behind.
#[cfg(feature = "hydrate")]
async fn obtain_fresh_token(sent_with: Option<&str>) -> Result<String, ApiError> {
    if refresh_action(sent_with, session::access_token().as_deref()) == RefreshAction::UseStored {
        if let Some(current) = session::access_token() {
            return Ok(current);
        }
    }

    let Some(refresh) = session::refresh_token() else {
        return Err(invalidate_session());
    };

    let payload = serde_json::json!({ "refreshToken": refresh });
    let request = gloo_net::http::Request::post(&api_url("/auth/refresh"))
        .json(&payload)
        .map_err(|_| invalidate_session())?;
    let resp = request.send().await.map_err(|_| invalidate_session())?;
    if !resp.ok() {
        return Err(invalidate_session());
    }

    let parsed: RefreshResponse = resp.json().await.map_err(|_| invalidate_session())?;
    session::apply_refresh(&parsed);
    Ok(parsed.access_token)
}
