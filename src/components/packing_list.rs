//! Packing List Component
//!
//! Displays the items in the active sort order, with the sort selector
//! and clear button underneath.

use leptos::prelude::*;

use crate::models::SortMode;
use crate::sort::sort_items;
use crate::store::{
    store_clear_items, store_delete_item, store_toggle_packed, use_app_store, AppStateStoreFields,
};
use crate::components::{ItemRow, SortSelector};

/// Sorted item list with actions row
#[component]
pub fn PackingList() -> impl IntoView {
    let store = use_app_store();

    // Sort mode is display-only state, local to this component
    let (sort_by, set_sort_by) = signal(SortMode::Input);

    let sorted_items = move || sort_items(&store.items().get(), sort_by.get());

    let on_toggle = Callback::new(move |id: u32| {
        store_toggle_packed(&store, id);
    });
    let on_delete = Callback::new(move |id: u32| {
        web_sys::console::log_1(&format!("[LIST] Deleting item #{}", id).into());
        store_delete_item(&store, id);
    });

    view! {
        <div class="list">
            <ul>
                <For
                    each=sorted_items
                    key=|item| {
                        // Key on every displayed field so toggles repaint the row
                        (item.id, item.packed, item.quantity, item.description.clone())
                    }
                    children=move |item| {
                        view! { <ItemRow item=item on_toggle=on_toggle on_delete=on_delete /> }
                    }
                />
            </ul>
            <div class="actions">
                <SortSelector sort_by=sort_by on_change=move |mode| set_sort_by.set(mode) />
                <button on:click=move |_| store_clear_items(&store)>"Clear List"</button>
            </div>
        </div>
    }
}
