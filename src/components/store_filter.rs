//! Store Filter Component
//!
//! Dropdown selecting which store's items the list screen shows.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Store filter dropdown (All Stores / one store)
#[component]
pub fn StoreFilter() -> impl IntoView {
    let store = use_app_store();
    let (open, set_open) = signal(false);

    let selected_store = move || {
        let selected = store.selected_store_id().get()?;
        store
            .stores()
            .get()
            .into_iter()
            .find(|s| s.id == selected)
    };

    let select = move |store_id: Option<u32>| {
        store.selected_store_id().set(store_id);
        set_open.set(false);
    };

    view! {
        <button class="store-filter" on:click=move |_| set_open.set(true)>
            <span class="store-filter-icon">
                {move || selected_store().map(|s| s.icon).unwrap_or_else(|| "🏪".to_string())}
            </span>
            <span class="store-filter-text">
                {move || selected_store().map(|s| s.name).unwrap_or_else(|| "All Stores".to_string())}
            </span>
            <span class="dropdown-caret">"▼"</span>
        </button>

        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| set_open.set(false)>
                <div class="dropdown" on:click=move |ev| ev.stop_propagation()>
                    <div class="dropdown-title">"Select Store"</div>

                    <button
                        class=move || {
                            if store.selected_store_id().get().is_none() {
                                "dropdown-option selected"
                            } else {
                                "dropdown-option"
                            }
                        }
                        on:click=move |_| select(None)
                    >
                        <span class="dropdown-option-icon">"🏪"</span>
                        <span class="dropdown-option-text">"All Stores"</span>
                        <Show when=move || store.selected_store_id().get().is_none()>
                            <span class="checkmark">"✓"</span>
                        </Show>
                    </button>

                    <For
                        each=move || store.stores().get()
                        key=|s| s.id
                        children=move |s| {
                            let id = s.id;
                            let is_selected = move || store.selected_store_id().get() == Some(id);
                            view! {
                                <button
                                    class=move || {
                                        if is_selected() { "dropdown-option selected" } else { "dropdown-option" }
                                    }
                                    on:click=move |_| select(Some(id))
                                >
                                    <span class="dropdown-option-icon">{s.icon.clone()}</span>
                                    <span class="dropdown-option-text">{s.name.clone()}</span>
                                    <Show when=is_selected>
                                        <span class="checkmark">"✓"</span>
                                    </Show>
                                </button>
                            }
                        }
                    />

                    <button class="dropdown-close" on:click=move |_| set_open.set(false)>
                        "Cancel"
                    </button>
                </div>
            </div>
        </Show>
    }
}
