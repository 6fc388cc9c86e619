//! Top navigation bar shared by every page.

use leptos::prelude::*;

use crate::state::auth::{self, AuthState};
use crate::state::ui::UiState;

/// Brand, section links, dark-mode toggle, and the session controls.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let identity = move || auth_state.get().user.map(|user| user.name);
    let show_operator = move || {
        let state = auth_state.get();
        state.signed_in() && state.role().can_operate()
    };

    let on_logout = move |_| {
        auth::logout(auth_state);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">"Busline"</a>

            <nav class="nav-bar__links">
                <a class="nav-bar__link" href="/">"Search"</a>
                <Show when=show_operator>
                    <a class="nav-bar__link" href="/operator">"Operator"</a>
                </Show>
            </nav>

            <span class="nav-bar__spacer"></span>

            <button
                class="btn nav-bar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <Show
                when=move || auth_state.get().signed_in()
                fallback=|| {
                    view! {
                        <a class="btn nav-bar__login" href="/login">"Sign In"</a>
                    }
                }
            >
                <span class="nav-bar__identity">{move || identity().unwrap_or_default()}</span>
                <button class="btn nav-bar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
