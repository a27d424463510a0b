//! # Webhook Payload
//!
//! The "address submitted" event posted to the webhook:
//!
//! ```text
//! POST <WEBHOOK_URL>
//! Content-Type: application/json
//!
//! {
//!   "address": { "value": "...", "unrestricted_value": "...", "data": { ... } },
//!   "user_id": "123",
//!   "session_id": "abc",
//!   "timestamp": "2024-05-01T10:15:30.123Z",
//!   "source": "address_form"
//! }
//! ```
//!
//! Propagated query parameters are flattened into the top level. Keys that would clash with
//! `address`, `timestamp` or `source` are dropped so the object never carries duplicates.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::suggestion::AddressSuggestion;

/// Fixed `source` tag identifying this form to the webhook consumer.
pub const SOURCE_TAG: &str = "address_form";

/// Top-level keys owned by the payload itself.
pub const RESERVED_KEYS: &[&str] = &["address", "timestamp", "source"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookPayload {
    pub address: AddressSuggestion,
    #[serde(flatten)]
    pub params: BTreeMap<String, String>,
    pub timestamp: String,
    pub source: String,
}

impl WebhookPayload {
    /// Build a payload stamped with `generated_at`.
    pub fn new<I>(address: AddressSuggestion, params: I, generated_at: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let params = params
            .into_iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .collect();

        Self {
            address,
            params,
            timestamp: format_timestamp(generated_at),
            source: SOURCE_TAG.to_string(),
        }
    }
}

/// ISO-8601 in UTC with millisecond precision and a `Z` suffix.
pub fn format_timestamp(moment: DateTime<Utc>) -> String {
    moment.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::suggestion::AddressData;
    use chrono::TimeZone;

    fn address() -> AddressSuggestion {
        AddressSuggestion {
            value: "г Казань, ул Баумана, д 1".to_string(),
            unrestricted_value: "420111, г Казань, ул Баумана, д 1".to_string(),
            data: AddressData::default(),
        }
    }

    #[test]
    fn test_payload_shape() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 30).unwrap();
        let payload = WebhookPayload::new(
            address(),
            [
                ("user_id".to_string(), "42".to_string()),
                ("session_id".to_string(), "s-1".to_string()),
            ],
            at,
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["user_id"], "42");
        assert_eq!(json["session_id"], "s-1");
        assert_eq!(json["timestamp"], "2024-05-01T10:15:30.000Z");
        assert_eq!(json["source"], SOURCE_TAG);
        assert_eq!(json["address"]["value"], "г Казань, ул Баумана, д 1");
    }

    #[test]
    fn test_reserved_keys_are_not_overridden() {
        let payload = WebhookPayload::new(
            address(),
            [
                ("source".to_string(), "spoofed".to_string()),
                ("address".to_string(), "nowhere".to_string()),
                ("utm_campaign".to_string(), "spring".to_string()),
            ],
            Utc::now(),
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["source"], SOURCE_TAG);
        assert!(json["address"].is_object());
        assert_eq!(json["utm_campaign"], "spring");
        assert_eq!(payload.params.len(), 1);
    }

    #[test]
    fn test_absent_identifiers_are_omitted() {
        let payload = WebhookPayload::new(address(), Vec::new(), Utc::now());
        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("user_id"));
        assert!(!object.contains_key("session_id"));
        assert_eq!(object.len(), 3);
    }
}
