//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The
//! collections here are caches of the server's state: they are only ever
//! mutated by completion handlers of API calls, never speculatively.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ShoppingItem, Store as ShopStore};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All shopping items
    pub items: Vec<ShoppingItem>,
    /// All stores
    pub stores: Vec<ShopStore>,
    /// Store filter for the list screen (None = all stores)
    pub selected_store_id: Option<u32>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace an item in the store with its server-confirmed version
pub fn store_update_item(store: &AppStore, updated_item: ShoppingItem) {
    if let Some(item) = store
        .items()
        .write()
        .iter_mut()
        .find(|item| item.id == updated_item.id)
    {
        *item = updated_item;
    }
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: u32) {
    store.items().write().retain(|item| item.id != item_id);
}

/// Prepend a newly created item
pub fn store_add_item(store: &AppStore, item: ShoppingItem) {
    store.items().write().insert(0, item);
}

/// Add a store or replace it by ID after an update
pub fn store_upsert_store(store: &AppStore, updated: ShopStore) {
    let stores_field = store.stores();
    let mut stores = stores_field.write();
    match stores.iter_mut().find(|s| s.id == updated.id) {
        Some(existing) => *existing = updated,
        None => stores.push(updated),
    }
}

/// Remove a store by ID, along with its items. The backend cascades the
/// delete, so items must not be assumed to survive their store.
pub fn store_remove_store(store: &AppStore, store_id: u32) {
    store.stores().write().retain(|s| s.id != store_id);
    store.items().write().retain(|item| item.store_id != store_id);
    if store.selected_store_id().get_untracked() == Some(store_id) {
        store.selected_store_id().set(None);
    }
}
