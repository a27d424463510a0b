//! # Centralized Error Handling
//!
//! Error types shared by the clients and the form. They follow the `thiserror` pattern:
//! each variant's `Display` text is exactly what the form shows inline.
//!
//! ## Error Categories
//!
//! 1. **Configuration** - [`ConfigError`]: token or webhook URL absent or unusable.
//!    Fatal to the affected feature; fixing it needs a rebuild.
//! 2. **Transport** - [`TransportError`]: raw outcome of an HTTP attempt that produced no status.
//! 3. **Submission** - [`SubmitError`]: the single error channel of the webhook client and
//!    the form. Everything but [`SubmitError::Config`] is recoverable by resubmitting.
//! 4. **Suggestions** - [`SuggestError`]: autocomplete failures. Shown as an empty dropdown.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::SubmitError;
//!
//! let err = SubmitError::Rejected { status: 500 };
//! assert!(err.to_string().contains("500"));
//! ```

use thiserror::Error;

/// Missing or unusable configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DADATA_TOKEN is not configured")]
    MissingDadataToken,

    #[error("WEBHOOK_URL is not configured")]
    MissingWebhookUrl,

    /// The webhook URL is set but is not an absolute http(s) URL.
    #[error("WEBHOOK_URL is not a valid http(s) URL: {0}")]
    InvalidWebhookUrl(String),
}

/// An HTTP attempt that did not produce a status code.
///
/// A response with any status, including 4xx/5xx, is not a transport error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Request went out but nothing came back: connection refused, DNS failure, timeout.
    #[error("no response: {0}")]
    NoResponse(String),

    /// Request could not be built, or the response body could not be read.
    #[error("transport failure: {0}")]
    Other(String),
}

/// Errors surfaced by [`crate::webhook::WebhookClient`] and the form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Submit pressed with no address chosen from the list.
    #[error("Please select an address from the list")]
    Validation,

    /// Submit pressed while a previous submission is still in flight.
    #[error("A submission is already in progress")]
    Busy,

    /// Webhook answered with a non-2xx status.
    #[error("Webhook returned error: {status}")]
    Rejected { status: u16 },

    /// No response within the timeout, or the host could not be reached.
    #[error("Webhook is not responding. Check the URL and server availability")]
    Unreachable,

    /// Anything else. The detail is logged, not shown.
    #[error("Unknown error while sending data")]
    Unknown(String),
}

impl From<TransportError> for SubmitError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::NoResponse(_) => SubmitError::Unreachable,
            TransportError::Other(detail) => SubmitError::Unknown(detail),
        }
    }
}

/// Errors from the suggestion provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SuggestError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Suggestion service returned error: {status}")]
    Rejected { status: u16 },

    #[error("Suggestion service is not responding")]
    Unreachable,

    #[error("Failed to parse suggestions: {0}")]
    Decode(String),

    #[error("Suggestion request failed: {0}")]
    Transport(String),
}

impl From<TransportError> for SuggestError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::NoResponse(_) => SuggestError::Unreachable,
            TransportError::Other(detail) => SuggestError::Transport(detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_messages() {
        assert_eq!(
            SubmitError::Rejected { status: 500 }.to_string(),
            "Webhook returned error: 500"
        );
        assert!(SubmitError::Unreachable.to_string().contains("not responding"));
        assert_eq!(
            SubmitError::from(ConfigError::MissingWebhookUrl).to_string(),
            "WEBHOOK_URL is not configured"
        );
        assert_eq!(
            SubmitError::Unknown("boom".into()).to_string(),
            "Unknown error while sending data"
        );
    }

    #[test]
    fn test_transport_error_mapping() {
        assert_eq!(
            SubmitError::from(TransportError::NoResponse("timed out".into())),
            SubmitError::Unreachable
        );
        assert_eq!(
            SubmitError::from(TransportError::Other("bad header".into())),
            SubmitError::Unknown("bad header".into())
        );
        assert_eq!(
            SuggestError::from(TransportError::NoResponse("refused".into())),
            SuggestError::Unreachable
        );
    }
}
