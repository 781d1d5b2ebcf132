//! Shopping List App
//!
//! Root component: bottom-tab navigation between the shopping list and
//! the store management screen, plus the initial data load.

use futures_util::future::try_join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ItemList, StoresScreen};
use crate::context::AppContext;
use crate::dialog;
use crate::store::{AppState, AppStateStoreFields};

/// Bottom-tab selection
#[derive(Clone, Copy, PartialEq)]
enum Tab {
    List,
    Stores,
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (active_tab, set_active_tab) = signal(Tab::List);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (loading, set_loading) = signal(true);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (loading, set_loading));
    provide_context(ctx);

    // Load items and stores together on mount and on every reload.
    // Both requests must succeed; on any failure neither collection is
    // touched, so the screen never shows store-less items.
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match try_join(api::items::get_all(), api::stores::get_all()).await {
                Ok((items, stores)) => {
                    store.items().set(items);
                    store.stores().set(stores);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] load failed: {}", err).into());
                    dialog::alert("Failed to load data");
                }
            }
            ctx.set_loading(false);
        });
    });

    view! {
        <div class="app-container">
            <div class="app-content">
                {move || match active_tab.get() {
                    Tab::List => view! { <ItemList /> }.into_any(),
                    Tab::Stores => view! { <StoresScreen /> }.into_any(),
                }}
            </div>

            // Bottom navigation
            <nav class="bottom-nav">
                <button
                    class=move || if active_tab.get() == Tab::List { "nav-item active" } else { "nav-item" }
                    on:click=move |_| set_active_tab.set(Tab::List)
                >
                    <div class="nav-icon">"🛒"</div>
                    <div class="nav-label">"List"</div>
                </button>
                <button
                    class=move || if active_tab.get() == Tab::Stores { "nav-item active" } else { "nav-item" }
                    on:click=move |_| set_active_tab.set(Tab::Stores)
                >
                    <div class="nav-icon">"🏪"</div>
                    <div class="nav-label">"Stores"</div>
                </button>
            </nav>
        </div>
    }
}
