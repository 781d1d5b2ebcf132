//! Shopping List Screen
//!
//! Unchecked items grouped under colored store headers, a completed
//! section, a store filter, and a floating add button. Swiping a row
//! right toggles its checked state; swiping left deletes it. Local state
//! changes only after the server confirms the mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AddItemModal, StoreFilter, SwipeableRow};
use crate::context::AppContext;
use crate::dialog;
use crate::grouping::{filter_by_store, group_unchecked_by_store, partition_checked};
use crate::models::{ShoppingItem, ShoppingItemUpdate};
use crate::store::{
    store_remove_item, store_update_item, use_app_store, AppStore, AppStateStoreFields,
};

fn toggle_check(store: AppStore, item: &ShoppingItem) {
    let id = item.id;
    let patch = ShoppingItemUpdate::checked(!item.is_checked);
    spawn_local(async move {
        match api::items::update(id, &patch).await {
            Ok(updated) => store_update_item(&store, updated),
            Err(_) => dialog::alert("Failed to update item"),
        }
    });
}

fn delete_item(store: AppStore, item_id: u32) {
    spawn_local(async move {
        match api::items::delete(item_id).await {
            Ok(_) => store_remove_item(&store, item_id),
            Err(_) => dialog::alert("Failed to delete item"),
        }
    });
}

/// Main shopping list screen
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (show_add_modal, set_show_add_modal) = signal(false);

    let visible_items = Memo::new(move |_| {
        filter_by_store(&store.items().get(), store.selected_store_id().get())
    });
    let unchecked_count = move || partition_checked(&visible_items.get()).0.len();
    let checked_items = move || partition_checked(&visible_items.get()).1;

    view! {
        <div class="screen">
            <header class="screen-header">
                <div class="screen-title-row">
                    <h1>"Shopping List"</h1>
                    <button class="refresh-btn" on:click=move |_| ctx.reload()>"⟳"</button>
                </div>
                <StoreFilter />
                <p class="subtitle">
                    {move || {
                        let n = unchecked_count();
                        format!("{} item{} to buy", n, if n == 1 { "" } else { "s" })
                    }}
                </p>
            </header>

            <Show
                when=move || !ctx.loading.get()
                fallback=|| view! { <p class="loading-text">"Loading..."</p> }
            >
                <div class="screen-content">
                    // Unchecked items grouped by store
                    <For
                        each=move || group_unchecked_by_store(&visible_items.get())
                        key=|(store_id, _)| *store_id
                        children=move |(store_id, group_items)| {
                            let header_store = Memo::new(move |_| {
                                store
                                    .stores()
                                    .get()
                                    .into_iter()
                                    .find(|s| s.id == store_id)
                            });
                            view! {
                                <section class="store-section">
                                    <div
                                        class="store-header"
                                        style:background-color=move || {
                                            header_store.get().map(|s| s.color).unwrap_or_default()
                                        }
                                    >
                                        <span class="store-icon">
                                            {move || header_store.get().map(|s| s.icon).unwrap_or_default()}
                                        </span>
                                        <span class="store-name">
                                            {move || header_store.get().map(|s| s.name).unwrap_or_default()}
                                        </span>
                                        <span class="item-count">{group_items.len()}</span>
                                    </div>

                                    {group_items
                                        .into_iter()
                                        .map(|item| {
                                            let toggle = item.clone();
                                            let item_id = item.id;
                                            view! {
                                                <SwipeableRow
                                                    on_swipe_right=Callback::new(move |_| toggle_check(store, &toggle))
                                                    on_swipe_left=Callback::new(move |_| delete_item(store, item_id))
                                                >
                                                    <div class="item-card">
                                                        <div class="item-name">{item.name.clone()}</div>
                                                        <div class="item-quantity">{item.quantity.clone()}</div>
                                                        {item.need_by_date.map(|date| view! {
                                                            <div class="item-date">
                                                                {format!("Need by: {}", date.format("%-m/%-d/%Y"))}
                                                            </div>
                                                        })}
                                                    </div>
                                                </SwipeableRow>
                                            }
                                        })
                                        .collect_view()}
                                </section>
                            }
                        }
                    />

                    // Completed section; swipe right unchecks
                    <Show when=move || !checked_items().is_empty()>
                        <section class="checked-section">
                            <div class="checked-title">
                                {move || format!("✓ Completed ({})", checked_items().len())}
                            </div>
                            <For
                                each=checked_items
                                key=|item| item.id
                                children=move |item| {
                                    let toggle = item.clone();
                                    let item_id = item.id;
                                    view! {
                                        <SwipeableRow
                                            right_icon="↩"
                                            on_swipe_right=Callback::new(move |_| toggle_check(store, &toggle))
                                            on_swipe_left=Callback::new(move |_| delete_item(store, item_id))
                                        >
                                            <div class="item-card checked">
                                                <div class="item-name strikethrough">{item.name.clone()}</div>
                                                <div class="item-quantity">{item.quantity.clone()}</div>
                                            </div>
                                        </SwipeableRow>
                                    }
                                }
                            />
                        </section>
                    </Show>
                </div>
            </Show>

            // Floating add button
            <button class="fab" on:click=move |_| set_show_add_modal.set(true)>"+"</button>

            <Show when=move || show_add_modal.get()>
                <AddItemModal on_close=Callback::new(move |_| set_show_add_modal.set(false)) />
            </Show>
        </div>
    }
}
