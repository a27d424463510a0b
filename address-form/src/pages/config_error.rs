//! Shown instead of the form when the DaData token is missing.

use leptos::prelude::*;
use lib_core::config::DADATA_TOKEN_VAR;

#[component]
pub fn ConfigErrorPage() -> impl IntoView {
    view! {
        <div class="address-form-container">
            <div class="error-message">
                <h3>"Configuration error"</h3>
                <p>{format!("{} is not configured", DADATA_TOKEN_VAR)}</p>
                <p>{format!("Set {} in the build environment and rebuild the app", DADATA_TOKEN_VAR)}</p>
            </div>
        </div>
    }
}
