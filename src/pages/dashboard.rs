//! Operator dashboard: the authenticated landing route for the console.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{install_operator_redirect, install_unauth_redirect};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth_state, navigate.clone());
    install_operator_redirect(auth_state, navigate);

    let greeting = move || {
        auth_state
            .get()
            .user
            .map(|user| format!("Welcome back, {}", user.name))
            .unwrap_or_default()
    };

    view! {
        <Show
            when=move || auth_state.get().signed_in()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || {
                            if auth_state.get().loading() { "Loading..." } else { "Redirecting to login..." }
                        }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <h1 class="dashboard-page__greeting">{greeting}</h1>
                <div class="dashboard-page__cards">
                    <a class="console-card" href="/operator/buses">
                        <span class="console-card__title">"Buses"</span>
                        <span class="console-card__hint">"Manage your fleet and amenities"</span>
                    </a>
                    <a class="console-card" href="/operator/routes">
                        <span class="console-card__title">"Routes"</span>
                        <span class="console-card__hint">"Stops, segments, and fares"</span>
                    </a>
                    <a class="console-card" href="/operator/routes/new">
                        <span class="console-card__title">"New Route"</span>
                        <span class="console-card__hint">"Publish a route end to end"</span>
                    </a>
                    <a class="console-card" href="/operator/schedules">
                        <span class="console-card__title">"Schedules"</span>
                        <span class="console-card__hint">"Departures and operating days"</span>
                    </a>
                </div>
            </div>
        </Show>
    }
}
