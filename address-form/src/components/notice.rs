//! Inline banners

use leptos::prelude::*;

#[component]
pub fn ErrorNotice(message: String) -> impl IntoView {
    view! {
        <div class="error-message" role="alert">
            <strong>"Error: "</strong>
            {message}
        </div>
    }
}

#[component]
pub fn SuccessNotice() -> impl IntoView {
    view! {
        <div class="success-message" role="status">
            <strong>"Success! "</strong>
            "The address has been sent for processing"
        </div>
    }
}

/// Identifiers taken from the page URL. Renders nothing when both are absent.
#[component]
pub fn DebugInfo(user_id: Option<String>, session_id: Option<String>) -> impl IntoView {
    if user_id.is_none() && session_id.is_none() {
        return None;
    }

    Some(view! {
        <div class="debug-info">
            <p><strong>"Debug information:"</strong></p>
            {user_id.map(|id| view! { <p>"User ID: " <code>{id}</code></p> })}
            {session_id.map(|id| view! { <p>"Session ID: " <code>{id}</code></p> })}
        </div>
    })
}
