//! Customer-facing trip search and results page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public landing route. Search works signed out; the amenity
//! catalogue is fetched once per page load to resolve names on result cards.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;

use crate::components::trip_card::{TripCard, amenity_names};
use crate::net::types::Amenity;
use crate::state::search::{SearchState, validate_search_input};

/// One-line summary above the result list.
pub fn results_summary(count: usize) -> String {
    match count {
        0 => "No trips found for this day.".to_owned(),
        1 => "1 trip found".to_owned(),
        n => format!("{n} trips found"),
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let amenities = RwSignal::new(Vec::<Amenity>::new());

    let catalogue_requested = RwSignal::new(false);
    Effect::new(move || {
        if catalogue_requested.get() {
            return;
        }
        catalogue_requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_amenities::list_amenities().await {
                Ok(catalogue) => amenities.set(catalogue),
                Err(err) => leptos::logging::warn!("amenity catalogue unavailable: {err}"),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if search.get().loading {
            return;
        }
        let state = search.get();
        let (from, to, date) = match validate_search_input(&state.from, &state.to, &state.date) {
            Ok(values) => values,
            Err(message) => {
                search.update(|s| s.error = Some(message.to_owned()));
                return;
            }
        };
        search.update(|s| {
            s.loading = true;
            s.error = None;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_search::search(&from, &to, &date).await {
                Ok(results) => search.update(|s| {
                    s.results = results;
                    s.searched = true;
                    s.loading = false;
                }),
                Err(err) => search.update(|s| {
                    s.error = Some(err.to_string());
                    s.loading = false;
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (from, to, date);
        }
    };

    view! {
        <div class="search-page">
            <form class="search-form" on:submit=on_submit>
                <input
                    class="search-input"
                    type="text"
                    placeholder="From"
                    prop:value=move || search.get().from
                    on:input=move |ev| search.update(|s| s.from = event_target_value(&ev))
                />
                <button
                    class="btn search-form__swap"
                    type="button"
                    title="Swap origin and destination"
                    on:click=move |_| search.update(SearchState::swap_endpoints)
                >
                    "⇄"
                </button>
                <input
                    class="search-input"
                    type="text"
                    placeholder="To"
                    prop:value=move || search.get().to
                    on:input=move |ev| search.update(|s| s.to = event_target_value(&ev))
                />
                <input
                    class="search-input"
                    type="date"
                    prop:value=move || search.get().date
                    on:input=move |ev| search.update(|s| s.date = event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || search.get().loading>
                    "Search"
                </button>
            </form>

            <Show when=move || search.get().error.is_some()>
                <p class="search-page__error">
                    {move || search.get().error.unwrap_or_default()}
                </p>
            </Show>

            <Show
                when=move || !search.get().loading
                fallback=|| view! { <p class="search-page__status">"Searching..."</p> }
            >
                <Show when=move || search.get().searched>
                    <p class="search-page__summary">
                        {move || results_summary(search.get().results.len())}
                    </p>
                    <div class="search-page__results">
                        {move || {
                            let catalogue = amenities.get();
                            search
                                .get()
                                .results
                                .into_iter()
                                .map(|trip| {
                                    let names = amenity_names(&trip, &catalogue);
                                    view! { <TripCard trip=trip amenities=names/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
