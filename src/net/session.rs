//! Browser-persisted session token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single authority over the access/refresh token pair. Login, refresh, and
//! logout are the only writers; everything else reads through the accessors
//! here. Tokens are opaque strings; no validation of their contents happens
//! client-side.
//!
//! Storage is `localStorage` in the browser, a process-local map under test,
//! and a no-op during server rendering. Concurrent tabs share the browser
//! store without locking; last writer wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{AuthTokens, RefreshResponse};

const ACCESS_KEY: &str = "busline_access_token";
const REFRESH_KEY: &str = "busline_refresh_token";

/// Current access token, if a session is stored.
pub fn access_token() -> Option<String> {
    read_key(ACCESS_KEY)
}

/// Current refresh token, if a session is stored.
pub fn refresh_token() -> Option<String> {
    read_key(REFRESH_KEY)
}

/// Whether a (potentially valid) session exists. Absence of a token means
/// "unauthenticated", never an error.
pub fn has_session() -> bool {
    access_token().is_some()
}

/// Persist both tokens after a successful login.
pub fn store_tokens(tokens: &AuthTokens) {
    write_key(ACCESS_KEY, &tokens.access_token);
    write_key(REFRESH_KEY, &tokens.refresh_token);
}

/// Persist the outcome of a refresh exchange. The refresh token is only
/// replaced when the backend rotated it.
pub fn apply_refresh(resp: &RefreshResponse) {
    write_key(ACCESS_KEY, &resp.access_token);
    if let Some(rotated) = &resp.refresh_token {
        write_key(REFRESH_KEY, rotated);
    }
}

/// Drop the session unconditionally. Safe to call repeatedly.
pub fn clear() {
    remove_key(ACCESS_KEY);
    remove_key(REFRESH_KEY);
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn read_key(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

#[cfg(feature = "hydrate")]
fn write_key(key: &str, value: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(feature = "hydrate")]
fn remove_key(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(all(not(feature = "hydrate"), test))]
thread_local! {
    static TEST_STORE: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

#[cfg(all(not(feature = "hydrate"), test))]
fn read_key(key: &str) -> Option<String> {
    TEST_STORE.with(|store| store.borrow().get(key).cloned())
}

#[cfg(all(not(feature = "hydrate"), test))]
fn write_key(key: &str, value: &str) {
    TEST_STORE.with(|store| {
        store.borrow_mut().insert(key.to_owned(), value.to_owned());
    });
}

#[cfg(all(not(feature = "hydrate"), test))]
fn remove_key(key: &str) {
    TEST_STORE.with(|store| {
        store.borrow_mut().remove(key);
    });
}

#[cfg(all(not(feature = "hydrate"), not(test)))]
fn read_key(_key: &str) -> Option<String> {
    None
}

#[cfg(all(not(feature = "hydrate"), not(test)))]
fn write_key(_key: &str, _value: &str) {}

#[cfg(all(not(feature = "hydrate"), not(test)))]
fn remove_key(_key: &str) {}
