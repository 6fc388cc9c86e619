//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the stored token pair, `http` is the authenticated wrapper
//! every call goes through, `types` defines the wire schema, and the `api_*`
//! modules are thin per-resource request builders.

pub mod api;
pub mod api_amenities;
pub mod api_auth;
pub mod api_buses;
pub mod api_routes;
pub mod api_schedules;
pub mod api_search;
pub mod http;
pub mod session;
pub mod types;
