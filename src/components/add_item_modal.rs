//! Add Item Modal
//!
//! Bottom-sheet form for creating a shopping item: name, quantity,
//! store chip picker, and an optional need-by date. Submits a statically
//! validated payload; nothing is sent for a blank name or no store.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::dialog;
use crate::models::{ShoppingItemCreate, DEFAULT_QUANTITY};
use crate::store::{store_add_item, use_app_store, AppStateStoreFields};

/// Modal form for adding an item
#[component]
pub fn AddItemModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(DEFAULT_QUANTITY.to_string());
    let (selected_store_id, set_selected_store_id) = signal::<Option<u32>>(None);
    let (need_by_date, set_need_by_date) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(store_id) = selected_store_id.get() else {
            return;
        };
        if name.get().trim().is_empty() {
            return;
        }

        let mut payload = ShoppingItemCreate::new(name.get().trim(), store_id);
        let qty = quantity.get().trim().to_string();
        if !qty.is_empty() {
            payload.quantity = qty;
        }
        // The date input yields YYYY-MM-DD; anything else stays unset
        payload.need_by_date = NaiveDate::parse_from_str(&need_by_date.get(), "%Y-%m-%d").ok();

        spawn_local(async move {
            match api::items::create(&payload).await {
                Ok(new_item) => store_add_item(&store, new_item),
                Err(_) => dialog::alert("Failed to add item"),
            }
        });

        on_close.run(());
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <form
                class="modal-sheet"
                on:click=move |ev| ev.stop_propagation()
                on:submit=submit
            >
                <h2>"Add Item"</h2>

                <input
                    type="text"
                    class="form-input"
                    placeholder="Item name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />

                <input
                    type="text"
                    class="form-input"
                    placeholder="Quantity (e.g., 1, 2 lbs, 1 dozen)"
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                />

                <label class="form-label">"Select Store:"</label>
                <div class="store-chip-row">
                    <For
                        each=move || store.stores().get()
                        key=|s| s.id
                        children=move |s| {
                            let id = s.id;
                            let color = s.color.clone();
                            let is_selected = move || selected_store_id.get() == Some(id);
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if is_selected() { "store-chip selected" } else { "store-chip" }
                                    }
                                    style:background-color=move || {
                                        if is_selected() { color.clone() } else { String::new() }
                                    }
                                    on:click=move |_| set_selected_store_id.set(Some(id))
                                >
                                    <span class="store-chip-icon">{s.icon.clone()}</span>
                                    <span class="store-chip-name">{s.name.clone()}</span>
                                </button>
                            }
                        }
                    />
                </div>

                <label class="form-label">"Need By Date (Optional):"</label>
                <input
                    type="date"
                    class="form-input"
                    prop:value=move || need_by_date.get()
                    on:input=move |ev| set_need_by_date.set(event_target_value(&ev))
                />

                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="submit-btn"
                        disabled=move || {
                            name.get().trim().is_empty() || selected_store_id.get().is_none()
                        }
                    >
                        "Add"
                    </button>
                </div>
            </form>
        </div>
    }
}
