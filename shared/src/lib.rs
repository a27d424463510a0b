//! # Shared Data Transfer Objects Library
//!
//! This library defines the contracts between the address form and the services around it:
//! the DaData suggestions API it reads from and the webhook it posts to.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::suggestion`]**: DaData address suggestion types
//!   - **[`dto::webhook`]**: Webhook payload and timestamp formatting
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_coordinates`]**: Format a lat/lon pair for display
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::{AddressSuggestion, WebhookPayload};
//!
//! let raw = r#"{"value": "г Москва", "unrestricted_value": "г Москва", "data": {}}"#;
//! let address: AddressSuggestion = serde_json::from_str(raw).unwrap();
//!
//! let payload = WebhookPayload::new(address, Vec::new(), chrono::Utc::now());
//! assert_eq!(payload.source, "address_form");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
