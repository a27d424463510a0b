//! # Core Library
//!
//! Framework-independent logic for the address form: configuration, errors, query
//! parameters, the HTTP seam, the DaData and webhook clients, debouncing and form state.
//! The browser crate supplies a fetch-based transport and timers; everything here builds
//! and tests natively.

pub mod config;
pub mod debounce;
pub mod delay;
pub mod error;
pub mod form;
pub mod query;
pub mod suggest;
pub mod transport;
pub mod webhook;

// Re-export commonly used types
pub use config::FormConfig;
pub use error::{ConfigError, SubmitError, SuggestError, TransportError};
pub use form::{AddressForm, FormPhase, FormStore};
pub use query::QueryParams;
pub use webhook::WebhookClient;
