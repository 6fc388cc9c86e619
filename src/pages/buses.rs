//! Operator fleet page: list, create, edit, and delete buses.

#[cfg(test)]
#[path = "buses_test.rs"]
mod buses_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::Amenity;
use crate::state::auth::AuthState;
use crate::state::buses::{BusDraft, BusesState, validate_bus_draft};
use crate::util::auth::{install_operator_redirect, install_unauth_redirect};

/// Parse the total-seats input field.
pub fn parse_seat_count(value: &str) -> Option<u32> {
    value.trim().parse().ok().filter(|count| *count > 0)
}

#[component]
pub fn BusesPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let buses = expect_context::<RwSignal<BusesState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth_state, navigate.clone());
    install_operator_redirect(auth_state, navigate);

    let amenities = RwSignal::new(Vec::<Amenity>::new());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !auth_state.get().signed_in() {
            return;
        }
        requested.set(true);
        buses.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        {
            load_buses(auth_state, buses);
            leptos::task::spawn_local(async move {
                if let Ok(catalogue) = crate::net::api_amenities::list_amenities().await {
                    amenities.set(catalogue);
                }
            });
        }
    });

    // Create/edit dialog state. `editing` holds the bus id when editing.
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<String>);
    let draft = RwSignal::new(BusDraft::default());
    let delete_id = RwSignal::new(None::<String>);

    let on_new = move |_| {
        editing.set(None);
        draft.set(BusDraft::default());
        show_form.set(true);
    };
    let on_form_cancel = Callback::new(move |()| show_form.set(false));
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));

    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };
        delete_id.set(None);
        buses.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(err) = crate::net::api_buses::delete_bus(&id).await {
                let message = crate::state::auth::note_api_error(auth_state, &err);
                buses.update(|s| {
                    s.loading = false;
                    s.error = Some(message);
                });
                return;
            }
            load_buses(auth_state, buses);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="console-page">
            <header class="console-page__header">
                <h1>"Buses"</h1>
                <button class="btn btn--primary" on:click=on_new>
                    "+ New Bus"
                </button>
            </header>

            <Show when=move || buses.get().error.is_some()>
                <p class="console-page__error">{move || buses.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !buses.get().loading
                fallback=|| view! { <p>"Loading buses..."</p> }
            >
                <table class="console-table">
                    <thead>
                        <tr>
                            <th>"Registration"</th>
                            <th>"Name"</th>
                            <th>"Layout"</th>
                            <th>"Seats"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            buses
                                .get()
                                .items
                                .into_iter()
                                .map(|bus| {
                                    let edit_bus = bus.clone();
                                    let bus_id = bus.id.clone();
                                    view! {
                                        <tr>
                                            <td>{bus.registration_no.clone()}</td>
                                            <td>{bus.name.clone()}</td>
                                            <td>{bus.seat_layout.clone()}</td>
                                            <td>{bus.total_seats}</td>
                                            <td class="console-table__actions">
                                                <button
                                                    class="btn"
                                                    on:click=move |_| {
                                                        editing.set(Some(edit_bus.id.clone()));
                                                        draft.set(BusDraft::from_bus(&edit_bus));
                                                        show_form.set(true);
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| delete_id.set(Some(bus_id.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>

            <Show when=move || show_form.get()>
                <BusFormDialog
                    draft=draft
                    editing=editing
                    amenities=amenities
                    buses=buses
                    on_cancel=on_form_cancel
                />
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    title="Delete Bus"
                    message="This bus will be removed from your fleet. Schedules assigned to it will stop selling."
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}

/// Modal dialog for creating or editing a bus.
#[component]
fn BusFormDialog(
    draft: RwSignal<BusDraft>,
    editing: RwSignal<Option<String>>,
    amenities: RwSignal<Vec<Amenity>>,
    buses: RwSignal<BusesState>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    #[cfg(not(feature = "hydrate"))]
    let _ = auth_state;
    let error = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        if buses.get_untracked().save_pending {
            return;
        }
        let current = draft.get_untracked();
        if let Err(message) = validate_bus_draft(&current) {
            error.set(message.to_owned());
            return;
        }
        buses.update(|s| s.save_pending = true);

        #[cfg(feature = "hydrate")]
        {
            let target = editing.get_untracked();
            leptos::task::spawn_local(async move {
                let result = match &target {
                    Some(id) => crate::net::api_buses::update_bus(id, &current).await,
                    None => crate::net::api_buses::create_bus(&current).await,
                };
                match result {
                    Ok(()) => {
                        buses.update(|s| s.save_pending = false);
                        on_cancel.run(());
                        load_buses(auth_state, buses);
                    }
                    Err(err) => {
                        let message = crate::state::auth::note_api_error(auth_state, &err);
                        error.set(message);
                        buses.update(|s| s.save_pending = false);
                    }
                }
            });
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if editing.get().is_some() { "Edit Bus" } else { "New Bus" }}</h2>
                <label class="dialog__label">
                    "Registration Number"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().registration_no
                        on:input=move |ev| draft.update(|d| d.registration_no = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Display Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Seat Layout"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g. 2x2"
                        prop:value=move || draft.get().seat_layout
                        on:input=move |ev| draft.update(|d| d.seat_layout = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Total Seats"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        prop:value=move || draft.get().total_seats.to_string()
                        on:input=move |ev| {
                            let parsed = parse_seat_count(&event_target_value(&ev)).unwrap_or(0);
                            draft.update(|d| d.total_seats = parsed);
                        }
                    />
                </label>
                <div class="dialog__amenities">
                    {move || {
                        amenities
                            .get()
                            .into_iter()
                            .map(|amenity| {
                                let id = amenity.id.clone();
                                let checked_id = amenity.id.clone();
                                view! {
                                    <label class="dialog__amenity">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                draft.get().amenity_ids.contains(&checked_id)
                                            }
                                            on:change=move |_| {
                                                draft.update(|d| d.toggle_amenity(&id));
                                            }
                                        />
                                        {amenity.name.clone()}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || buses.get().save_pending
                        on:click=move |_| submit.run(())
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn load_buses(auth_state: RwSignal<AuthState>, buses: RwSignal<BusesState>) {
    leptos::task::spawn_local(async move {
        match crate::net::api_buses::list_buses().await {
            Ok(items) => buses.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(err) => {
                let message = crate::state::auth::note_api_error(auth_state, &err);
                buses.update(|s| {
                    s.loading = false;
                    s.error = Some(message);
                });
            }
        }
    });
}
