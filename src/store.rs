//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Mutations go
//! through the pure functions in `list` and replace the items vector
//! wholesale, so observers never see a half-applied operation.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::Item;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Canonical item sequence, in insertion order
    pub items: Vec<Item>,
    /// Monotonic id counter for new items
    pub next_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }
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

/// Mint a fresh item id from the session counter
pub fn store_next_id(store: &AppStore) -> u32 {
    let id = store.next_id().get_untracked();
    store.next_id().set(id + 1);
    id
}

/// Append an item to the list
pub fn store_add_item(store: &AppStore, item: Item) {
    let next = list::add_item(&store.items().get_untracked(), item);
    store.items().set(next);
}

/// Remove an item from the list by ID
pub fn store_delete_item(store: &AppStore, item_id: u32) {
    let next = list::delete_item(&store.items().get_untracked(), item_id);
    store.items().set(next);
}

/// Flip the packed flag on an item by ID
pub fn store_toggle_packed(store: &AppStore, item_id: u32) {
    let next = list::toggle_packed(&store.items().get_untracked(), item_id);
    store.items().set(next);
}

/// Empty the whole list
pub fn store_clear_items(store: &AppStore) {
    store.items().set(list::clear_items());
}
