//! Local UI chrome state.
//!
//! Transient presentation concerns stay out of domain state so rendering
//! controls can evolve independently of backend data.

/// UI state for theme and chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
