//! Operator routes page: list, delete, and the entry point to the wizard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::state::auth::AuthState;
use crate::state::routes::RoutesState;
use crate::util::auth::{install_operator_redirect, install_unauth_redirect};

#[component]
pub fn RoutesPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let routes = expect_context::<RwSignal<RoutesState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth_state, navigate.clone());
    install_operator_redirect(auth_state, navigate);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !auth_state.get().signed_in() {
            return;
        }
        requested.set(true);
        routes.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        load_routes(auth_state, routes);
    });

    let delete_id = RwSignal::new(None::<String>);
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };
        delete_id.set(None);
        routes.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(err) = crate::net::api_routes::delete_route(&id).await {
                let message = crate::state::auth::note_api_error(auth_state, &err);
                routes.update(|s| {
                    s.loading = false;
                    s.error = Some(message);
                });
                return;
            }
            load_routes(auth_state, routes);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="console-page">
            <header class="console-page__header">
                <h1>"Routes"</h1>
                <a class="btn btn--primary" href="/operator/routes/new">
                    "+ New Route"
                </a>
            </header>

            <Show when=move || routes.get().error.is_some()>
                <p class="console-page__error">{move || routes.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !routes.get().loading
                fallback=|| view! { <p>"Loading routes..."</p> }
            >
                <div class="route-list">
                    {move || {
                        routes
                            .get()
                            .items
                            .into_iter()
                            .map(|route| {
                                let route_id = route.id.clone();
                                let stop_count = route.stops.len();
                                view! {
                                    <article class="route-list__item">
                                        <span class="route-list__name">{route.name.clone()}</span>
                                        <span class="route-list__cities">
                                            {route.origin.clone()} " → " {route.destination.clone()}
                                        </span>
                                        <span class="route-list__stops">
                                            {move || match stop_count {
                                                0 => "non-stop".to_owned(),
                                                1 => "1 stop".to_owned(),
                                                n => format!("{n} stops"),
                                            }}
                                        </span>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| delete_id.set(Some(route_id.clone()))
                                        >
                                            "Delete"
                                        </button>
                                    </article>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    title="Delete Route"
                    message="This will permanently delete the route with its segments, fares, and schedules."
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn load_routes(auth_state: RwSignal<AuthState>, routes: RwSignal<RoutesState>) {
    leptos::task::spawn_local(async move {
        match crate::net::api_routes::list_routes().await {
            Ok(items) => routes.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(err) => {
                let message = crate::state::auth::note_api_error(auth_state, &err);
                routes.update(|s| {
                    s.loading = false;
                    s.error = Some(message);
                });
            }
        }
    });
}
