//! # Form Configuration
//!
//! Configuration is an explicit [`FormConfig`] value handed to the clients and the form at
//! construction time. Nothing reads the environment behind the caller's back.
//!
//! [`FormConfig::from_build_env`] bakes the values in at compile time with `option_env!`,
//! which is how the WebAssembly build receives `DADATA_TOKEN` and `WEBHOOK_URL`.
//!
//! ```rust
//! use lib_core::config::FormConfig;
//!
//! let config = FormConfig::new(Some("token".into()), Some("https://hooks.example.com/a".into()));
//! assert!(config.validate().is_ok());
//! assert_eq!(config.suggestion_count, 10);
//! ```

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DADATA_TOKEN_VAR: &str = "DADATA_TOKEN";

pub const DEFAULT_SUGGESTION_COUNT: usize = 10;
pub const DEFAULT_SUGGEST_DEBOUNCE: Duration = Duration::from_millis(300);
pub const DEFAULT_WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

/// Everything the form needs to know about its surroundings.
#[derive(Clone, PartialEq)]
pub struct FormConfig {
    /// DaData API token. Without it the form renders a configuration error.
    pub dadata_token: Option<String>,

    /// Destination for submissions. Without it every submit fails before any request.
    pub webhook_url: Option<String>,

    /// Forward every query parameter, not just `user_id` / `session_id`.
    pub forward_all_params: bool,

    /// Suggestions requested per keystroke burst
    pub suggestion_count: usize,

    /// Quiet period after the last keystroke before suggestions are requested
    pub suggest_debounce: Duration,

    /// Upper bound on a single webhook request
    pub webhook_timeout: Duration,

    /// How long the success banner stays up
    pub success_display: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            dadata_token: None,
            webhook_url: None,
            forward_all_params: true,
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
            suggest_debounce: DEFAULT_SUGGEST_DEBOUNCE,
            webhook_timeout: DEFAULT_WEBHOOK_TIMEOUT,
            success_display: DEFAULT_SUCCESS_DISPLAY,
        }
    }
}

impl FormConfig {
    /// Build a config from raw values. Blank strings count as absent.
    pub fn new(dadata_token: Option<String>, webhook_url: Option<String>) -> Self {
        Self {
            dadata_token: non_blank(dadata_token),
            webhook_url: non_blank(webhook_url),
            ..Self::default()
        }
    }

    /// Load configuration captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("DADATA_TOKEN"),
            option_env!("WEBHOOK_URL"),
            option_env!("FORWARD_ALL_PARAMS"),
        )
    }

    fn from_values(token: Option<&str>, url: Option<&str>, forward: Option<&str>) -> Self {
        let mut config = Self::new(token.map(str::to_string), url.map(str::to_string));
        if let Some(flag) = forward {
            config.forward_all_params = parse_flag(flag);
        }
        config
    }

    /// The DaData token, or the error the form should render instead of the input.
    pub fn dadata_token(&self) -> Result<&str, ConfigError> {
        self.dadata_token
            .as_deref()
            .ok_or(ConfigError::MissingDadataToken)
    }

    /// The webhook URL as configured, without validation.
    pub fn webhook_url(&self) -> Result<&str, ConfigError> {
        self.webhook_url
            .as_deref()
            .ok_or(ConfigError::MissingWebhookUrl)
    }

    /// Check both required values. Used at startup to log problems early.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dadata_token()?;
        validate_webhook_url(self.webhook_url()?)?;
        Ok(())
    }
}

// Keep the token out of logs.
impl fmt::Debug for FormConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormConfig")
            .field("dadata_token", &self.dadata_token.as_ref().map(|_| "<redacted>"))
            .field("webhook_url", &self.webhook_url)
            .field("forward_all_params", &self.forward_all_params)
            .field("suggestion_count", &self.suggestion_count)
            .field("suggest_debounce", &self.suggest_debounce)
            .field("webhook_timeout", &self.webhook_timeout)
            .field("success_display", &self.success_display)
            .finish()
    }
}

/// Parse a webhook URL, accepting only absolute `http` / `https` URLs.
pub fn validate_webhook_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidWebhookUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidWebhookUrl(format!(
            "unsupported scheme '{}'",
            other
        ))),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
