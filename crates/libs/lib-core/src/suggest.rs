//! # Address Suggestions
//!
//! Autocomplete backend for the address input. The form treats it as an opaque capability
//! (text in, ranked suggestions out) behind [`SuggestionProvider`]; [`DaDataClient`] is the
//! production implementation.

use std::time::Duration;

use async_trait::async_trait;
use shared::dto::{AddressSuggestion, SuggestRequest, SuggestResponse};

use crate::config::FormConfig;
use crate::error::{ConfigError, SuggestError};
use crate::transport::{HttpRequest, HttpTransport};

/// DaData address suggestion endpoint
pub const DADATA_SUGGEST_URL: &str =
    "https://suggestions.dadata.ru/suggestions/api/4_1/rs/suggest/address";

/// DaData rejects `count` above this
pub const MAX_SUGGESTIONS: usize = 20;

const SUGGEST_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait(?Send)]
pub trait SuggestionProvider {
    /// Up to `count` suggestions for `query`, best match first.
    async fn suggest(&self, query: &str, count: usize) -> Result<Vec<AddressSuggestion>, SuggestError>;
}

#[derive(Clone)]
pub struct DaDataClient<T> {
    transport: T,
    token: Option<String>,
}

impl<T: HttpTransport> DaDataClient<T> {
    pub fn new(transport: T, token: Option<String>) -> Self {
        Self { transport, token }
    }

    pub fn from_config(transport: T, config: &FormConfig) -> Self {
        Self::new(transport, config.dadata_token.clone())
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport> SuggestionProvider for DaDataClient<T> {
    async fn suggest(&self, query: &str, count: usize) -> Result<Vec<AddressSuggestion>, SuggestError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let token = self
            .token
            .as_deref()
            .ok_or(ConfigError::MissingDadataToken)?;

        let body = serde_json::to_string(&SuggestRequest {
            query: query.to_string(),
            count: count.clamp(1, MAX_SUGGESTIONS),
        })
        .map_err(|e| SuggestError::Decode(e.to_string()))?;

        let request = HttpRequest::json(DADATA_SUGGEST_URL, body, SUGGEST_TIMEOUT)
            .with_header("Authorization", format!("Token {}", token));

        let response = self.transport.post_json(request).await?;
        if !response.is_success() {
            tracing::warn!(status = response.status, "DaData rejected suggestion request");
            return Err(SuggestError::Rejected {
                status: response.status,
            });
        }

        let parsed: SuggestResponse = serde_json::from_str(&response.body)
            .map_err(|e| SuggestError::Decode(e.to_string()))?;
        tracing::debug!(count = parsed.suggestions.len(), "Received suggestions");

        Ok(parsed.suggestions)
    }
}
