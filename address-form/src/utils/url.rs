//! URL utility functions for reading query parameters

use lib_core::query::QueryParams;
use web_sys::window;

/// Read the current page's query string.
///
/// Missing window or location yields an empty map; there is no failure case.
pub fn read_query_params() -> QueryParams {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    let params = QueryParams::parse(&search);
    log::info!(
        "Query params: user_id={}, session_id={}, total={}",
        params.user_id().unwrap_or("not provided"),
        params.session_id().unwrap_or("not provided"),
        params.len()
    );
    params
}
