//! Password-reset request page.

use leptos::prelude::*;

use crate::util::forms::validate_email;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let email_value = match validate_email(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_auth::forgot_password(&email_value).await {
                Ok(()) => {
                    info.set("If that address has an account, a reset link is on its way.".to_owned());
                }
                Err(err) => error.set(err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Busline"</h1>
                <p class="auth-card__subtitle">"Reset your password"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Send Reset Link"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--ok">{move || info.get()}</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <div class="auth-card__links">
                    <a href="/login">"Back to sign-in"</a>
                </div>
            </div>
        </div>
    }
}
