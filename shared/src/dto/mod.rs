//! # Data Transfer Objects (DTOs)
//!
//! Wire types exchanged with the two external services the form talks to.
//!
//! ## Module Organization
//!
//! - [`suggestion`] - DaData address suggestions (inbound)
//! - [`webhook`] - Address-submitted event (outbound)
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case, matching both DaData and the webhook consumer
//! - **Optional fields**: DaData sends explicit `null`s, so suggestion fields are kept as
//!   `null` rather than skipped; webhook identifiers are omitted when absent
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod suggestion;
pub mod webhook;

pub use suggestion::*;
pub use webhook::*;
