//! # Shared Utility Functions
//!
//! Display helpers used by the form's components.

/// Format a coordinate pair as `"lat, lon"`.
///
/// DaData sends coordinates as decimal strings; they are shown as-is, only trimmed.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_coordinates;
///
/// assert_eq!(format_coordinates("55.8210", " 37.8167"), "55.8210, 37.8167");
/// ```
pub fn format_coordinates(lat: &str, lon: &str) -> String {
    format!("{}, {}", lat.trim(), lon.trim())
}
