//! # Webhook Client
//!
//! Delivers the selected address to the configured webhook. One attempt per submission:
//! no retries, no backoff, no queue.
//!
//! Every failure is normalized into [`SubmitError`]:
//!
//! | Situation                         | Error                          |
//! |-----------------------------------|--------------------------------|
//! | URL missing or malformed          | `Config` (no request is made)  |
//! | Non-2xx status                    | `Rejected { status }`          |
//! | No response / timeout             | `Unreachable`                  |
//! | Anything else                     | `Unknown`                      |

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use shared::dto::{AddressSuggestion, WebhookPayload};

use crate::config::{validate_webhook_url, FormConfig};
use crate::error::{ConfigError, SubmitError};
use crate::transport::{HttpRequest, HttpTransport};

/// Client for the address-submitted webhook.
#[derive(Clone)]
pub struct WebhookClient<T> {
    transport: T,
    webhook_url: Option<String>,
    timeout: Duration,
}

impl<T: HttpTransport> WebhookClient<T> {
    pub fn new(transport: T, webhook_url: Option<String>, timeout: Duration) -> Self {
        Self {
            transport,
            webhook_url,
            timeout,
        }
    }

    pub fn from_config(transport: T, config: &FormConfig) -> Self {
        Self::new(transport, config.webhook_url.clone(), config.webhook_timeout)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Post `address` plus `params` to the webhook.
    ///
    /// Returns the response body: parsed JSON when it is JSON, the raw text as a JSON string
    /// otherwise, `null` when empty.
    pub async fn send_address_data(
        &self,
        address: AddressSuggestion,
        params: BTreeMap<String, String>,
    ) -> Result<Value, SubmitError> {
        let url = self
            .webhook_url
            .as_deref()
            .ok_or(ConfigError::MissingWebhookUrl)?;
        let url = validate_webhook_url(url)?;

        let payload = WebhookPayload::new(address, params, Utc::now());
        let body = serde_json::to_string(&payload)
            .map_err(|e| SubmitError::Unknown(format!("Failed to encode payload: {}", e)))?;

        tracing::info!(
            url = %url,
            params = payload.params.len(),
            timestamp = %payload.timestamp,
            "Sending address to webhook"
        );
        tracing::debug!(payload = %body, "Webhook payload");

        let start = Utc::now();
        let request = HttpRequest::json(url.as_str(), body, self.timeout);
        let response = self.transport.post_json(request).await.map_err(|e| {
            tracing::error!(error = %e, "Webhook request failed");
            SubmitError::from(e)
        })?;
        let elapsed_ms = (Utc::now() - start).num_milliseconds();

        if !response.is_success() {
            tracing::warn!(status = response.status, elapsed_ms, "Webhook rejected submission");
            return Err(SubmitError::Rejected {
                status: response.status,
            });
        }

        tracing::info!(status = response.status, elapsed_ms, "Webhook accepted submission");
        Ok(parse_body(&response.body))
    }
}

fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
