//! Result card for one searched trip.
//!
//! DESIGN
//! ======
//! Keeps result presentation consistent while the search page owns
//! fetching and amenity-name resolution.

#[cfg(test)]
#[path = "trip_card_test.rs"]
mod trip_card_test;

use leptos::prelude::*;

use crate::net::types::{Amenity, TripResult};
use crate::util::format::{format_duration, format_price};

/// Resolve a trip's amenity ids against the catalogue, dropping unknowns.
pub fn amenity_names(trip: &TripResult, catalogue: &[Amenity]) -> Vec<String> {
    trip.amenity_ids
        .iter()
        .filter_map(|id| catalogue.iter().find(|a| &a.id == id))
        .map(|a| a.name.clone())
        .collect()
}

/// A single trip row: times, duration, fares per seat class, amenities.
#[component]
pub fn TripCard(trip: TripResult, amenities: Vec<String>) -> impl IntoView {
    let duration = format_duration(&trip.departure_time, &trip.arrival_time).unwrap_or_default();
    let quotes = trip
        .seat_types
        .iter()
        .map(|quote| {
            view! {
                <span class="trip-card__quote">
                    <span class="trip-card__seat-type">{quote.seat_type.label()}</span>
                    " "
                    <span class="trip-card__price">{format_price(quote.amount_minor)}</span>
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <article class="trip-card">
            <div class="trip-card__header">
                <span class="trip-card__route-name">{trip.route_name.clone()}</span>
                <span class="trip-card__cities">
                    {trip.origin.clone()} " → " {trip.destination.clone()}
                </span>
            </div>
            <div class="trip-card__times">
                <span class="trip-card__depart">{trip.departure_time.clone()}</span>
                <span class="trip-card__duration">{duration}</span>
                <span class="trip-card__arrive">{trip.arrival_time.clone()}</span>
            </div>
            <div class="trip-card__quotes">{quotes}</div>
            <Show when={
                let has_amenities = !amenities.is_empty();
                move || has_amenities
            }>
                <div class="trip-card__amenities">{amenities.join(" · ")}</div>
            </Show>
        </article>
    }
}
