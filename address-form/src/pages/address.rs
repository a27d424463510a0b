//! Address Page - pick an address and send it to the webhook

use leptos::prelude::*;
use lib_core::config::FormConfig;
use lib_core::error::ConfigError;
use lib_core::form::{dismiss_after, submit_address};
use lib_core::query::QueryParams;
use shared::dto::AddressSuggestion;

use crate::components::{AddressSuggestions, DebugInfo, ErrorNotice, SelectedAddress, SuccessNotice};
use crate::pages::ConfigErrorPage;
use crate::services::{Services, TimerDelay};
use crate::state::form::use_form_context;

/// What the page renders for a given configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PageContent {
    Form,
    /// No DaData token: nothing that could reach the network is mounted.
    ConfigError(ConfigError),
}

impl PageContent {
    pub(crate) fn for_config(config: &FormConfig) -> Self {
        match config.dadata_token() {
            Ok(_) => PageContent::Form,
            Err(err) => PageContent::ConfigError(err),
        }
    }
}

#[component]
pub fn AddressPage() -> impl IntoView {
    let config = expect_context::<FormConfig>();
    match PageContent::for_config(&config) {
        PageContent::Form => view! { <AddressFormView config=config/> }.into_any(),
        PageContent::ConfigError(err) => {
            log::error!("Rendering configuration error: {}", err);
            view! { <ConfigErrorPage/> }.into_any()
        }
    }
}

#[component]
fn AddressFormView(config: FormConfig) -> impl IntoView {
    let form = use_form_context();
    let services = expect_context::<Services>();
    let params = expect_context::<QueryParams>();

    let propagated = params.propagated(config.forward_all_params);
    let success_display = config.success_display;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let client = services.webhook.clone();
        let params = propagated.clone();
        leptos::task::spawn_local(async move {
            if submit_address(&form, &client, params).await.is_ok() {
                log::info!("Address delivered to webhook");
                dismiss_after(&form, &TimerDelay, success_display).await;
            }
        });
    };

    view! {
        <div class="address-form-container">
            <h1>"Delivery address"</h1>

            <DebugInfo
                user_id=params.user_id().map(str::to_string)
                session_id=params.session_id().map(str::to_string)
            />

            <form on:submit=on_submit novalidate=true>
                <div class="form-group">
                    <label for="address">
                        "Enter an address: " <span class="required">"*"</span>
                    </label>
                    <AddressSuggestions
                        value=Signal::derive(move || form.address())
                        on_change={move |selected: Option<AddressSuggestion>| form.select(selected)}
                        input_id="address"
                    />
                    <small class="help-text">"Start typing and suggestions will appear"</small>
                </div>

                {move || form.address().map(|address| view! { <SelectedAddress address=address/> })}

                {move || form.error().map(|message| view! { <ErrorNotice message=message/> })}

                {move || form.is_success().then(|| view! { <SuccessNotice/> })}

                <button
                    type="submit"
                    class="submit-button"
                    disabled=move || !form.can_submit()
                >
                    {move || if form.is_submitting() { "Sending..." } else { "Send address" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use async_trait::async_trait;
    use lib_core::error::{SuggestError, TransportError};
    use lib_core::suggest::{DaDataClient, SuggestionProvider};
    use lib_core::transport::{HttpRequest, HttpResponse, HttpTransport};

    #[derive(Default)]
    struct CountingTransport {
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl HttpTransport for CountingTransport {
        async fn post_json(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            Ok(HttpResponse {
                status: 200,
                body: r#"{"suggestions":[]}"#.to_string(),
            })
        }
    }

    #[test]
    fn test_missing_token_renders_config_error() {
        for token in [None, Some("   ".to_string())] {
            let config = FormConfig::new(token, Some("https://hooks.example.com/a".to_string()));
            assert_eq!(
                PageContent::for_config(&config),
                PageContent::ConfigError(ConfigError::MissingDadataToken)
            );
        }
    }

    #[test]
    fn test_token_renders_form_even_without_webhook() {
        let config = FormConfig::new(Some("token".to_string()), None);
        assert_eq!(PageContent::for_config(&config), PageContent::Form);
    }

    #[test]
    fn test_missing_token_never_reaches_network() {
        let config = FormConfig::new(None, Some("https://hooks.example.com/a".to_string()));
        let client = DaDataClient::from_config(CountingTransport::default(), &config);

        let result = futures::executor::block_on(client.suggest("Москва", 10));

        assert_eq!(result, Err(SuggestError::Config(ConfigError::MissingDadataToken)));
        assert_eq!(client.transport().calls.get(), 0);
    }
}
