//! Root component: loads configuration and query parameters once, provides them as context.

use leptos::prelude::*;
use lib_core::config::FormConfig;

use crate::pages::AddressPage;
use crate::services::Services;
use crate::state::form::provide_form_context;
use crate::utils::url::read_query_params;

#[component]
pub fn App() -> impl IntoView {
    let config = FormConfig::from_build_env();
    if let Err(err) = config.validate() {
        log::warn!("Configuration incomplete: {}", err);
    }
    log::debug!("Config: {:?}", config);

    // Read exactly once per page load; immutable afterwards
    let params = read_query_params();

    provide_context(Services::from_config(&config));
    provide_context(config);
    provide_context(params);
    provide_form_context();

    view! {
        <main class="app-container">
            <AddressPage/>
        </main>
    }
}
