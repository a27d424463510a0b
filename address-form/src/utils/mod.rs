//! Browser utilities

pub mod url;
