//! UI Components
//!
//! Reusable Leptos components.

mod add_item_modal;
mod item_list;
mod store_filter;
mod stores_screen;
mod swipeable_row;

pub use add_item_modal::AddItemModal;
pub use item_list::ItemList;
pub use store_filter::StoreFilter;
pub use stores_screen::StoresScreen;
pub use swipeable_row::SwipeableRow;
