//! Address input with a debounced DaData dropdown.

use leptos::prelude::*;
use lib_core::config::FormConfig;
use lib_core::debounce::Debouncer;
use lib_core::suggest::SuggestionProvider;
use shared::dto::AddressSuggestion;

use crate::services::{Services, TimerDelay};

#[component]
pub fn AddressSuggestions(
    /// Currently selected suggestion, owned by the caller.
    #[prop(into)]
    value: Signal<Option<AddressSuggestion>>,
    /// Called with the picked suggestion.
    #[prop(into)]
    on_change: Callback<Option<AddressSuggestion>>,
    #[prop(into, optional)] input_id: Option<String>,
    #[prop(into, optional)] placeholder: Option<String>,
) -> impl IntoView {
    let services = expect_context::<Services>();
    let config = expect_context::<FormConfig>();
    let count = config.suggestion_count;
    let debouncer = StoredValue::new(Debouncer::new(config.suggest_debounce));

    let (query, set_query) = signal(String::new());
    let (suggestions, set_suggestions) = signal(Vec::<AddressSuggestion>::new());
    let (open, set_open) = signal(false);
    let (highlighted, set_highlighted) = signal(None::<usize>);

    sync_query_with_selection(value, set_query);

    let close = move || {
        debouncer.with_value(Debouncer::cancel);
        set_open.set(false);
        set_highlighted.set(None);
    };

    let choose = move |index: usize| {
        let picked = suggestions.with_untracked(|list| list.get(index).cloned());
        if let Some(picked) = picked {
            log::debug!("Address selected: {}", picked.value);
            set_query.set(picked.value.clone());
            on_change.run(Some(picked));
        }
        close();
    };

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        set_query.set(text.clone());
        set_highlighted.set(None);

        let debouncer = debouncer.get_value();
        let ticket = debouncer.schedule();
        let client = services.suggestions.clone();
        leptos::task::spawn_local(async move {
            if !debouncer.settle(&ticket, &TimerDelay).await {
                return;
            }

            let result = client.suggest(&text, count).await;
            if !ticket.is_current() {
                log::debug!("Dropping stale suggestions for '{}'", text);
                return;
            }

            match result {
                Ok(list) => {
                    set_open.set(!list.is_empty());
                    set_suggestions.set(list);
                }
                Err(e) => {
                    log::warn!("Suggestion request failed: {}", e);
                    set_suggestions.set(Vec::new());
                    set_open.set(false);
                }
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            close();
            return;
        }
        let len = suggestions.with_untracked(Vec::len);
        if len == 0 {
            return;
        }
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                set_open.set(true);
                set_highlighted.update(|h| *h = Some(h.map_or(0, |i| (i + 1) % len)));
            }
            "ArrowUp" => {
                ev.prevent_default();
                set_open.set(true);
                set_highlighted.update(|h| *h = Some(h.map_or(len - 1, |i| (i + len - 1) % len)));
            }
            "Enter" => {
                if let Some(index) = highlighted.get_untracked().filter(|_| open.get_untracked()) {
                    ev.prevent_default();
                    choose(index);
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="suggestions-container">
            <input
                type="text"
                class="suggestions-input"
                id=input_id
                placeholder=placeholder.unwrap_or_else(|| "Start typing an address...".to_string())
                autocomplete="off"
                required=true
                prop:value=move || query.get()
                on:input=on_input
                on:keydown=on_keydown
                on:focus=move |_| set_open.set(suggestions.with_untracked(|list| !list.is_empty()))
                on:blur=move |_| close()
            />
            {move || {
                if !open.get() {
                    return None;
                }
                let items = suggestions
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, suggestion)| {
                        let is_active = move || highlighted.get() == Some(index);
                        view! {
                            <li
                                class="suggestions-item"
                                class:suggestions-item-current=is_active
                                // mousedown fires before the input's blur closes the list
                                on:mousedown=move |ev| {
                                    ev.prevent_default();
                                    choose(index);
                                }
                                on:mouseenter=move |_| set_highlighted.set(Some(index))
                            >
                                {suggestion.value}
                            </li>
                        }
                    })
                    .collect_view();
                Some(view! { <ul class="suggestions-list">{items}</ul> })
            }}
        </div>
    }
}

/// Mirror the selection into the input text.
///
/// Only a change of selection rewrites the text. Other form updates (submitting, errors, the
/// success banner going away) leave whatever the user typed alone.
pub(crate) fn sync_query_with_selection(
    value: Signal<Option<AddressSuggestion>>,
    set_query: WriteSignal<String>,
) {
    let selected = Memo::new(move |_| value.get());
    Effect::new(move || {
        let text = selected.with(|s| s.as_ref().map(|s| s.value.clone()).unwrap_or_default());
        set_query.set(text);
    });
}
