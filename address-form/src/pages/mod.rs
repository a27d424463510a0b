//! Page modules

pub mod address;
pub mod config_error;

pub use address::AddressPage;
pub use config_error::ConfigErrorPage;
