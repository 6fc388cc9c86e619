//! Operator registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::util::forms::{validate_email, validate_password_pair, validate_required};

/// Normalized registration form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterInput {
    pub name: String,
    pub company: String,
    pub email: String,
    pub password: String,
}

pub fn validate_register_input(
    name: &str,
    company: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterInput, &'static str> {
    Ok(RegisterInput {
        name: validate_required(name, "Enter your name.")?,
        company: validate_required(company, "Enter your company name.")?,
        email: validate_email(email)?,
        password: validate_password_pair(password, confirm)?,
    })
}

/// Which form slot a backend rejection belongs to. The backend flags a
/// taken address with an "already in use" message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterErrorSlot {
    Email,
    General,
}

pub fn classify_register_error(message: &str) -> RegisterErrorSlot {
    if message.to_ascii_lowercase().contains("already in use") {
        RegisterErrorSlot::Email
    } else {
        RegisterErrorSlot::General
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let email_error = RwSignal::new(String::new());
    let done = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || done.get() {
            return;
        }
        error.set(String::new());
        email_error.set(String::new());
        let input = match validate_register_input(
            &name.get(),
            &company.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(input) => input,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api_auth::register_operator(
                &input.name,
                &input.company,
                &input.email,
                &input.password,
            )
            .await;
            match result {
                Ok(()) => {
                    done.set(true);
                    // Let the confirmation land before bouncing to sign-in.
                    gloo_timers::future::sleep(std::time::Duration::from_millis(1800)).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(err) => {
                    let message = err.to_string();
                    match classify_register_error(&message) {
                        RegisterErrorSlot::Email => email_error.set(message),
                        RegisterErrorSlot::General => error.set(message),
                    }
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Busline"</h1>
                <p class="auth-card__subtitle">"Register your bus company"</p>
                <Show
                    when=move || !done.get()
                    fallback=|| {
                        view! {
                            <p class="auth-message auth-message--ok">
                                "Account created. Check your email to verify your address. Redirecting to sign-in."
                            </p>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_submit>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Company name"
                            prop:value=move || company.get()
                            on:input=move |ev| company.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <Show when=move || !email_error.get().is_empty()>
                            <p class="auth-field-error">{move || email_error.get()}</p>
                        </Show>
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Password (8+ characters)"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Confirm password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            "Create Account"
                        </button>
                    </form>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <div class="auth-card__links">
                    <a href="/login">"Already registered? Sign in"</a>
                </div>
            </div>
        </div>
    }
}
