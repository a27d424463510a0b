//! Application state

pub mod form;
