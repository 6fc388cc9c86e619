//! Password-reset completion page, reached from the emailed link.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::util::forms::validate_password_pair;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let token = Memo::new(move |_| query.read().get("token").unwrap_or_default());

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let token_value = token.get();
        if token_value.is_empty() {
            error.set("This reset link is missing its token. Request a new one.".to_owned());
            return;
        }
        let password_value = match validate_password_pair(&password.get(), &confirm.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_auth::reset_password(&token_value, &password_value).await {
                Ok(()) => {
                    info.set("Password updated. Redirecting to sign-in.".to_owned());
                    gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(err) => {
                    error.set(err.to_string());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Busline"</h1>
                <p class="auth-card__subtitle">"Choose a new password"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Set Password"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--ok">{move || info.get()}</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
