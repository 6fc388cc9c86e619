//! Operator schedules page: list, edit, activate/deactivate, delete.

#[cfg(test)]
#[path = "schedules_test.rs"]
mod schedules_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{Bus, BusRoute, Schedule};
use crate::state::auth::AuthState;
use crate::state::buses::BusesState;
use crate::state::routes::RoutesState;
use crate::state::schedules::{ScheduleDraft, SchedulesState, validate_schedule_draft};
use crate::util::auth::{install_operator_redirect, install_unauth_redirect};
use crate::util::format::{WEEK_DAYS, day_label, format_days};

/// Route display name for a schedule row; falls back to the raw id when the
/// route list has not arrived or the route is gone.
pub fn route_label(routes: &[BusRoute], route_id: &str) -> String {
    routes
        .iter()
        .find(|route| route.id == route_id)
        .map_or_else(|| route_id.to_owned(), |route| route.name.clone())
}

/// Bus display name for a schedule row, with the same fallback.
pub fn bus_label(buses: &[Bus], bus_id: &str) -> String {
    buses
        .iter()
        .find(|bus| bus.id == bus_id)
        .map_or_else(|| bus_id.to_owned(), |bus| bus.name.clone())
}

#[component]
pub fn SchedulesPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let schedules = expect_context::<RwSignal<SchedulesState>>();
    let routes = expect_context::<RwSignal<RoutesState>>();
    let buses = expect_context::<RwSignal<BusesState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth_state, navigate.clone());
    install_operator_redirect(auth_state, navigate);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !auth_state.get().signed_in() {
            return;
        }
        requested.set(true);
        schedules.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        {
            load_schedules(auth_state, schedules);
            leptos::task::spawn_local(async move {
                if let Ok(items) = crate::net::api_routes::list_routes().await {
                    routes.update(|s| s.items = items);
                }
            });
            leptos::task::spawn_local(async move {
                if let Ok(items) = crate::net::api_buses::list_buses().await {
                    buses.update(|s| s.items = items);
                }
            });
        }
    });

    let editing = RwSignal::new(None::<Schedule>);
    let delete_id = RwSignal::new(None::<String>);
    let on_edit_cancel = Callback::new(move |()| editing.set(None));
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));

    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };
        delete_id.set(None);
        schedules.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(err) = crate::net::api_schedules::delete_schedule(&id).await {
                let message = crate::state::auth::note_api_error(auth_state, &err);
                schedules.update(|s| {
                    s.loading = false;
                    s.error = Some(message);
                });
                return;
            }
            load_schedules(auth_state, schedules);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    // Quick toggle without opening the edit dialog.
    let on_toggle_active = move |schedule: Schedule| {
        let mut draft = ScheduleDraft::from_schedule(&schedule);
        draft.active = !draft.active;
        schedules.update(|s| s.save_pending = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_schedules::update_schedule(&schedule.id, &draft).await {
                Ok(()) => {
                    schedules.update(|s| s.save_pending = false);
                    load_schedules(auth_state, schedules);
                }
                Err(err) => {
                    let message = crate::state::auth::note_api_error(auth_state, &err);
                    schedules.update(|s| {
                        s.save_pending = false;
                        s.error = Some(message);
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (schedule, draft);
        }
    };

    view! {
        <div class="console-page">
            <header class="console-page__header">
                <h1>"Schedules"</h1>
            </header>

            <Show when=move || schedules.get().error.is_some()>
                <p class="console-page__error">{move || schedules.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !schedules.get().loading
                fallback=|| view! { <p>"Loading schedules..."</p> }
            >
                <table class="console-table">
                    <thead>
                        <tr>
                            <th>"Route"</th>
                            <th>"Bus"</th>
                            <th>"Departs"</th>
                            <th>"Days"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let route_items = routes.get().items;
                            let bus_items = buses.get().items;
                            schedules
                                .get()
                                .items
                                .into_iter()
                                .map(|schedule| {
                                    let toggle_schedule = schedule.clone();
                                    let edit_schedule = schedule.clone();
                                    let schedule_id = schedule.id.clone();
                                    view! {
                                        <tr class:console-table__row--inactive=!schedule.active>
                                            <td>{route_label(&route_items, &schedule.route_id)}</td>
                                            <td>{bus_label(&bus_items, &schedule.bus_id)}</td>
                                            <td>{schedule.departure_time.clone()}</td>
                                            <td>{format_days(&schedule.days_of_week)}</td>
                                            <td>{if schedule.active { "Active" } else { "Paused" }}</td>
                                            <td class="console-table__actions">
                                                <button
                                                    class="btn"
                                                    disabled=move || schedules.get().save_pending
                                                    on:click=move |_| on_toggle_active(toggle_schedule.clone())
                                                >
                                                    {if schedule.active { "Pause" } else { "Resume" }}
                                                </button>
                                                <button
                                                    class="btn"
                                                    on:click=move |_| editing.set(Some(edit_schedule.clone()))
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| delete_id.set(Some(schedule_id.clone()))
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

            <Show when=move || editing.get().is_some()>
                <ScheduleEditDialog editing=editing schedules=schedules on_cancel=on_edit_cancel/>
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    title="Delete Schedule"
                    message="Customers will no longer find departures for this schedule."
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}

/// Modal dialog for editing a schedule's departure time and operating days.
#[component]
fn ScheduleEditDialog(
    editing: RwSignal<Option<Schedule>>,
    schedules: RwSignal<SchedulesState>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    #[cfg(not(feature = "hydrate"))]
    let _ = auth_state;
    let error = RwSignal::new(String::new());
    let draft = RwSignal::new(
        editing
            .get_untracked()
            .as_ref()
            .map(ScheduleDraft::from_schedule)
            .unwrap_or_default(),
    );

    let submit = Callback::new(move |()| {
        let Some(schedule) = editing.get_untracked() else {
            return;
        };
        let current = draft.get_untracked();
        if let Err(message) = validate_schedule_draft(&current) {
            error.set(message.to_owned());
            return;
        }
        schedules.update(|s| s.save_pending = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_schedules::update_schedule(&schedule.id, &current).await {
                Ok(()) => {
                    schedules.update(|s| s.save_pending = false);
                    on_cancel.run(());
                    load_schedules(auth_state, schedules);
                }
                Err(err) => {
                    let message = crate::state::auth::note_api_error(auth_state, &err);
                    error.set(message);
                    schedules.update(|s| s.save_pending = false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (schedule, current);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Schedule"</h2>
                <label class="dialog__label">
                    "Departure Time"
                    <input
                        class="dialog__input"
                        type="time"
                        prop:value=move || draft.get().departure_time
                        on:input=move |ev| {
                            draft.update(|d| d.departure_time = event_target_value(&ev));
                        }
                    />
                </label>
                <div class="wizard__days">
                    {WEEK_DAYS
                        .into_iter()
                        .map(|day| {
                            view! {
                                <label class="wizard__day">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            draft.get().days_of_week.iter().any(|d| d == day)
                                        }
                                        on:change=move |_| draft.update(|d| d.toggle_day(day))
                                    />
                                    {day_label(day)}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <label class="dialog__amenity">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().active
                        on:change=move |_| draft.update(|d| d.active = !d.active)
                    />
                    "Active"
                </label>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || schedules.get().save_pending
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
fn load_schedules(auth_state: RwSignal<AuthState>, schedules: RwSignal<SchedulesState>) {
    leptos::task::spawn_local(async move {
        match crate::net::api_schedules::list_schedules().await {
            Ok(items) => schedules.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(err) => {
                let message = crate::state::auth::note_api_error(auth_state, &err);
                schedules.update(|s| {
                    s.loading = false;
                    s.error = Some(message);
                });
            }
        }
    });
}
