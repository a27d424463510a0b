//! # Services
//!
//! Browser-side wiring of the `lib-core` clients.

pub mod delay;
pub mod http;

use lib_core::config::FormConfig;
use lib_core::suggest::DaDataClient;
use lib_core::webhook::WebhookClient;

pub use delay::TimerDelay;
pub use http::FetchTransport;

/// Clients shared through context. Cheap to clone.
#[derive(Clone)]
pub struct Services {
    pub webhook: WebhookClient<FetchTransport>,
    pub suggestions: DaDataClient<FetchTransport>,
}

impl Services {
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            webhook: WebhookClient::from_config(FetchTransport, config),
            suggestions: DaDataClient::from_config(FetchTransport, config),
        }
    }
}
