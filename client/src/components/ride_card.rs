//! Card component for one ride in the dashboard list.

use leptos::prelude::*;
use rides::RideOffer;

/// A single ride offer rendered as a list item.
#[component]
pub fn RideCard(ride: RideOffer) -> impl IntoView {
    view! {
        <li class="ride-card">
            <span class="ride-card__heading">{ride.heading()}</span>
            <span class="ride-card__route">{ride.route.clone()}</span>
            <span class="ride-card__departure">"🕓 " {ride.departure_label()}</span>
            <span class="ride-card__seats">"💺 Cupos: " {ride.available_seats.to_string()}</span>
            <span class="ride-card__fare">"💰 " {ride.fare_label()}</span>
            <span class="ride-card__status">{ride.status.label()}</span>
        </li>
    }
}
