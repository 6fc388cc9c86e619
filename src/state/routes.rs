//! Route-list state for the operator console.

use crate::net::types::BusRoute;

/// Shared route-list state.
#[derive(Clone, Debug, Default)]
pub struct RoutesState {
    pub items: Vec<BusRoute>,
    pub loading: bool,
    pub error: Option<String>,
}
