//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session check runs once on mount: with no stored token it settles on
//! `Unauthenticated` without a network call; otherwise it asks `/users/me`
//! and either adopts the profile or clears the dead session. Route guards
//! and the nav bar key off the phase. All session-store writes funnel
//! through this module (login, logout, failed check), so there is one
//! writer over the shared token state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::http::ApiError;
use crate::net::session;
use crate::net::types::{Role, UserProfile};

/// Lifecycle of the browser session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Not yet checked; render nothing auth-dependent.
    #[default]
    Unknown,
    /// `/users/me` is in flight.
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Authentication state provided via context.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub phase: SessionPhase,
    pub user: Option<UserProfile>,
}

impl AuthState {
    /// Whether the session outcome is still undecided.
    pub fn loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Unknown | SessionPhase::Checking)
    }

    pub fn signed_in(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated)
    }

    pub fn role(&self) -> Role {
        self.user.as_ref().map(UserProfile::primary_role).unwrap_or_default()
    }
}

/// First transition of a session check: no stored token settles the
/// question immediately, with no network call.
pub fn begin_check(has_token: bool) -> SessionPhase {
    if has_token {
        SessionPhase::Checking
    } else {
        SessionPhase::Unauthenticated
    }
}

/// Final transition of a session check.
pub fn apply_check_result(state: &mut AuthState, user: Option<UserProfile>) {
    match user {
        Some(profile) => {
            state.phase = SessionPhase::Authenticated;
            state.user = Some(profile);
        }
        None => {
            state.phase = SessionPhase::Unauthenticated;
            state.user = None;
        }
    }
}

/// Drop the session: clear the token store and forget the profile.
/// Idempotent; used by logout and by expired-session error handling.
pub fn sign_out(state: &mut AuthState) {
    session::clear();
    state.phase = SessionPhase::Unauthenticated;
    state.user = None;
}

/// Turn an API failure into a display message, demoting the auth state
/// first when the wrapper reported an expired session (the store is already
/// cleared by then; the guard effects handle the login redirect).
pub fn note_api_error(auth: RwSignal<AuthState>, err: &ApiError) -> String {
    if matches!(err, ApiError::SessionExpired) {
        auth.update(sign_out);
    }
    err.to_string()
}

/// Run the session check and settle `auth` asynchronously.
#[cfg(feature = "hydrate")]
pub fn check_session(auth: RwSignal<AuthState>) {
    let phase = begin_check(session::has_session());
    auth.update(|a| {
        a.phase = phase;
        if phase == SessionPhase::Unauthenticated {
            a.user = None;
        }
    });
    if phase != SessionPhase::Checking {
        return;
    }

    leptos::task::spawn_local(async move {
        let user = crate::net::api_auth::fetch_current_user().await;
        if user.is_none() {
            // Token present but rejected; treat the session as dead.
            session::clear();
        }
        auth.update(|a| apply_check_result(a, user));
    });
}

/// Exchange credentials for a session. On success the tokens are persisted
/// and the session check re-runs; on failure the store is untouched.
///
/// # Errors
///
/// A display-ready message when the backend rejects the credentials or the
/// request fails.
#[cfg(feature = "hydrate")]
pub async fn login(auth: RwSignal<AuthState>, email: &str, password: &str) -> Result<(), String> {
    match crate::net::api_auth::login(email, password).await {
        Ok(tokens) => {
            session::store_tokens(&tokens);
            check_session(auth);
            Ok(())
        }
        Err(err) => Err(err.to_string()),
    }
}

/// Discard the session client-side. No backend call is made; the tokens
/// simply stop existing.
pub fn logout(auth: RwSignal<AuthState>) {
    auth.update(sign_out);
}
