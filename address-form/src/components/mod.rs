//! UI Components

pub mod address_suggestions;
pub mod notice;
pub mod selected_address;

pub use address_suggestions::AddressSuggestions;
pub use notice::{DebugInfo, ErrorNotice, SuccessNotice};
pub use selected_address::SelectedAddress;
