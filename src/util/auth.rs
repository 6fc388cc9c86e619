//! Route-guard helpers shared by authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies identical redirect behavior: wait for the
//! session check to settle, then bounce unauthenticated visitors to the
//! login screen (and non-operators out of the operator console).

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Redirect to `/login` whenever auth has settled with no user present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading() && !state.signed_in() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to the public search screen whenever auth has settled on a
/// signed-in user whose role cannot use the operator console.
pub fn install_operator_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading() && state.signed_in() && !state.role().can_operate() {
            navigate("/", NavigateOptions::default());
        }
    });
}
