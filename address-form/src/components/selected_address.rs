//! Selected address summary

use leptos::prelude::*;
use shared::dto::AddressSuggestion;
use shared::utils::format_coordinates;

#[component]
pub fn SelectedAddress(address: AddressSuggestion) -> impl IntoView {
    let coordinates = address
        .coordinates()
        .map(|(lat, lon)| format_coordinates(lat, lon));

    view! {
        <div class="selected-address">
            <p><strong>"Selected address:"</strong></p>
            <p class="address-value">{address.value}</p>
            {coordinates.map(|coords| view! {
                <p class="geo-info">"Coordinates: " {coords}</p>
            })}
        </div>
    }
}
