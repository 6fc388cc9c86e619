//! Email-verification landing page, reached from the emailed link.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Outcome of the one-shot verification call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum VerifyOutcome {
    #[default]
    Pending,
    Verified,
    Failed(String),
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();
    let outcome = RwSignal::new(VerifyOutcome::Pending);

    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get() {
            return;
        }
        started.set(true);
        let token = query.read_untracked().get("token").unwrap_or_default();
        if token.is_empty() {
            outcome.set(VerifyOutcome::Failed(
                "This verification link is missing its token.".to_owned(),
            ));
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_auth::verify_email(&token).await {
                Ok(()) => outcome.set(VerifyOutcome::Verified),
                Err(err) => outcome.set(VerifyOutcome::Failed(err.to_string())),
            }
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Busline"</h1>
                {move || match outcome.get() {
                    VerifyOutcome::Pending => view! {
                        <p class="auth-message">"Verifying your email address..."</p>
                    }
                    .into_any(),
                    VerifyOutcome::Verified => view! {
                        <p class="auth-message auth-message--ok">
                            "Email verified. You can sign in now."
                        </p>
                    }
                    .into_any(),
                    VerifyOutcome::Failed(message) => view! {
                        <p class="auth-message auth-message--error">{message}</p>
                    }
                    .into_any(),
                }}
                <div class="auth-card__links">
                    <a href="/login">"Go to sign-in"</a>
                </div>
            </div>
        </div>
    }
}
