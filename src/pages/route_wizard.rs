//! Route-creation wizard: route details → segments → fares → schedule.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wizard collects a full [`RouteDraft`] locally, persisting it to
//! `localStorage` between reloads, and submits the whole sequence at the
//! end. Submission is strictly ordered server-side; if a later step fails,
//! the earlier steps have already happened and the error names the step so
//! the operator knows what state the route is in.

#[cfg(test)]
#[path = "route_wizard_test.rs"]
mod route_wizard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::buses::BusesState;
use crate::state::wizard::{
    DRAFT_STORAGE_KEY, RouteDraft, WizardStage, WizardState, segments_from_stops, validate_all,
    validate_stage,
};
use crate::util::auth::{install_operator_redirect, install_unauth_redirect};
use crate::util::format::{WEEK_DAYS, day_label, parse_price};

/// Text-field rendering of a stored fare, e.g. `Some(1250)` -> `"12.50"`.
pub fn fare_input_value(amount_minor: Option<i64>) -> String {
    match amount_minor {
        Some(minor) => format!("{}.{:02}", minor / 100, minor % 100),
        None => String::new(),
    }
}

/// Toggle a `MON`..`SUN` label's membership in a day list.
pub fn toggle_day(days: &mut Vec<String>, day: &str) {
    if let Some(index) = days.iter().position(|d| d == day) {
        days.remove(index);
    } else {
        days.push(day.to_owned());
    }
}

#[component]
pub fn RouteWizardPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let wizard = expect_context::<RwSignal<WizardState>>();
    let buses = expect_context::<RwSignal<BusesState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth_state, navigate.clone());
    install_operator_redirect(auth_state, navigate.clone());

    // Restore a persisted draft once, then keep the store in sync.
    let restored = RwSignal::new(false);
    Effect::new(move || {
        if restored.get() {
            return;
        }
        restored.set(true);
        if wizard.get_untracked().draft == RouteDraft::default() {
            if let Some(saved) = crate::util::storage::load_json::<RouteDraft>(DRAFT_STORAGE_KEY) {
                wizard.update(|w| w.draft = saved);
            }
        }
    });
    Effect::new(move || {
        let draft = wizard.get().draft;
        if restored.get_untracked() {
            crate::util::storage::save_json(DRAFT_STORAGE_KEY, &draft);
        }
    });

    // The schedule stage needs the fleet for its bus picker.
    let fleet_requested = RwSignal::new(false);
    Effect::new(move || {
        if fleet_requested.get() || !auth_state.get().signed_in() {
            return;
        }
        fleet_requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Ok(items) = crate::net::api_buses::list_buses().await {
                buses.update(|s| s.items = items);
            }
        });
    });

    let on_back = move |_| {
        wizard.update(|w| {
            if let Some(prev) = w.stage.prev() {
                w.stage = prev;
                w.error = None;
            }
        });
    };

    let on_next = move |_| {
        let state = wizard.get_untracked();
        match validate_stage(state.stage, &state.draft) {
            Ok(()) => wizard.update(|w| {
                if let Some(next) = w.stage.next() {
                    w.stage = next;
                    w.error = None;
                }
            }),
            Err(message) => wizard.update(|w| w.error = Some(message)),
        }
    };

    let navigate_done = navigate.clone();
    let on_submit = Callback::new(move |()| {
        let state = wizard.get_untracked();
        if state.submitting {
            return;
        }
        if let Err(message) = validate_all(&state.draft) {
            wizard.update(|w| w.error = Some(message));
            return;
        }
        wizard.update(|w| {
            w.submitting = true;
            w.error = None;
        });

        #[cfg(feature = "hydrate")]
        {
            let navigate_done = navigate_done.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api_routes::create_route_plan(&state.draft).await {
                    Ok(route_id) => {
                        crate::util::storage::remove(DRAFT_STORAGE_KEY);
                        wizard.set(WizardState {
                            completed_route_id: Some(route_id),
                            ..WizardState::default()
                        });
                        navigate_done("/operator/routes", NavigateOptions::default());
                    }
                    Err(err) => {
                        if !crate::net::session::has_session() {
                            auth_state.update(crate::state::auth::sign_out);
                        }
                        wizard.update(|w| {
                            w.submitting = false;
                            w.error = Some(err.to_string());
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate_done;
        }
    });

    let stage = move || wizard.get().stage;
    let stage_class = move |this: WizardStage| {
        move || {
            if stage() == this {
                "wizard__step wizard__step--active"
            } else {
                "wizard__step"
            }
        }
    };

    view! {
        <div class="console-page wizard">
            <header class="console-page__header">
                <h1>"New Route"</h1>
            </header>

            <ol class="wizard__steps">
                <li class=stage_class(WizardStage::Route)>"Route"</li>
                <li class=stage_class(WizardStage::Segments)>"Segments"</li>
                <li class=stage_class(WizardStage::Fares)>"Fares"</li>
                <li class=stage_class(WizardStage::Schedule)>"Schedule"</li>
            </ol>

            <Show when=move || wizard.get().error.is_some()>
                <p class="console-page__error">{move || wizard.get().error.unwrap_or_default()}</p>
            </Show>

            {move || match stage() {
                WizardStage::Route => view! { <RouteStage wizard=wizard/> }.into_any(),
                WizardStage::Segments => view! { <SegmentsStage wizard=wizard/> }.into_any(),
                WizardStage::Fares => view! { <FaresStage wizard=wizard/> }.into_any(),
                WizardStage::Schedule => view! { <ScheduleStage wizard=wizard buses=buses/> }.into_any(),
            }}

            <div class="wizard__actions">
                <Show when=move || stage().prev().is_some()>
                    <button class="btn" on:click=on_back disabled=move || wizard.get().submitting>
                        "Back"
                    </button>
                </Show>
                <Show
                    when=move || stage().next().is_some()
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn--primary"
                                on:click=move |_| on_submit.run(())
                                disabled=move || wizard.get().submitting
                            >
                                {move || {
                                    if wizard.get().submitting { "Publishing..." } else { "Publish Route" }
                                }}
                            </button>
                        }
                    }
                >
                    <button class="btn btn--primary" on:click=on_next>
                        "Next"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn RouteStage(wizard: RwSignal<WizardState>) -> impl IntoView {
    view! {
        <div class="wizard__stage">
            <label class="dialog__label">
                "Route Name"
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="e.g. Coastal Express"
                    prop:value=move || wizard.get().draft.name
                    on:input=move |ev| wizard.update(|w| w.draft.name = event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Origin"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || wizard.get().draft.origin
                    on:input=move |ev| wizard.update(|w| w.draft.origin = event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Destination"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || wizard.get().draft.destination
                    on:input=move |ev| wizard.update(|w| w.draft.destination = event_target_value(&ev))
                />
            </label>
        </div>
    }
}

#[component]
fn SegmentsStage(wizard: RwSignal<WizardState>) -> impl IntoView {
    let on_add_stop = move |_| {
        wizard.update(|w| w.draft.stops.push(String::new()));
    };

    view! {
        <div class="wizard__stage">
            <p class="wizard__hint">
                "Intermediate stops split the route into bookable segments between consecutive points."
            </p>
            {move || {
                let stop_count = wizard.get().draft.stops.len();
                (0..stop_count)
                    .map(|index| {
                        view! {
                            <div class="wizard__stop-row">
                                <input
                                    class="dialog__input"
                                    type="text"
                                    placeholder="Stop name"
                                    prop:value=move || {
                                        wizard.get().draft.stops.get(index).cloned().unwrap_or_default()
                                    }
                                    on:input=move |ev| {
                                        wizard.update(|w| {
                                            if let Some(stop) = w.draft.stops.get_mut(index) {
                                                *stop = event_target_value(&ev);
                                            }
                                        });
                                    }
                                />
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| {
                                        wizard.update(|w| {
                                            if index < w.draft.stops.len() {
                                                w.draft.stops.remove(index);
                                            }
                                        });
                                    }
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button class="btn" on:click=on_add_stop>
                "+ Add Stop"
            </button>

            <div class="wizard__segment-preview">
                {move || {
                    let draft = wizard.get().draft;
                    segments_from_stops(&draft.origin, &draft.stops, &draft.destination)
                        .into_iter()
                        .map(|segment| {
                            view! {
                                <span class="wizard__segment">
                                    {segment.origin_stop} " → " {segment.destination_stop}
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

#[component]
fn FaresStage(wizard: RwSignal<WizardState>) -> impl IntoView {
    view! {
        <div class="wizard__stage">
            <p class="wizard__hint">"Price each segment per seat class. Leave a class blank to not offer it."</p>
            {move || {
                let draft = wizard.get().draft;
                let segments = segments_from_stops(&draft.origin, &draft.stops, &draft.destination);
                segments
                    .into_iter()
                    .enumerate()
                    .map(|(index, segment)| {
                        let inputs = crate::net::types::SeatType::all()
                            .into_iter()
                            .map(|seat_type| {
                                view! {
                                    <label class="wizard__fare-input">
                                        {seat_type.label()}
                                        <input
                                            class="dialog__input"
                                            type="text"
                                            inputmode="decimal"
                                            placeholder="0.00"
                                            prop:value=move || {
                                                fare_input_value(
                                                    wizard.get().draft.fare_amount(index, seat_type),
                                                )
                                            }
                                            on:change=move |ev| {
                                                let raw = event_target_value(&ev);
                                                wizard.update(|w| {
                                                    match parse_price(&raw) {
                                                        Some(minor) => {
                                                            w.draft.set_fare(index, seat_type, minor);
                                                        }
                                                        None => w.draft.clear_fare(index, seat_type),
                                                    }
                                                });
                                            }
                                        />
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>();
                        view! {
                            <div class="wizard__fare-row">
                                <span class="wizard__segment">
                                    {segment.origin_stop} " → " {segment.destination_stop}
                                </span>
                                {inputs}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn ScheduleStage(wizard: RwSignal<WizardState>, buses: RwSignal<BusesState>) -> impl IntoView {
    view! {
        <div class="wizard__stage">
            <label class="dialog__label">
                "Bus"
                <select
                    class="dialog__input"
                    prop:value=move || wizard.get().draft.bus_id
                    on:change=move |ev| wizard.update(|w| w.draft.bus_id = event_target_value(&ev))
                >
                    <option value="">"Pick a bus"</option>
                    {move || {
                        buses
                            .get()
                            .items
                            .into_iter()
                            .map(|bus| {
                                view! {
                                    <option value=bus.id.clone()>
                                        {format!("{} ({})", bus.name, bus.registration_no)}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <label class="dialog__label">
                "Departure Time"
                <input
                    class="dialog__input"
                    type="time"
                    prop:value=move || wizard.get().draft.departure_time
                    on:input=move |ev| {
                        wizard.update(|w| w.draft.departure_time = event_target_value(&ev));
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
                                        wizard.get().draft.days_of_week.iter().any(|d| d == day)
                                    }
                                    on:change=move |_| {
                                        wizard.update(|w| toggle_day(&mut w.draft.days_of_week, day));
                                    }
                                />
                                {day_label(day)}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
