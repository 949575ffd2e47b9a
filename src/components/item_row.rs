//! Item Row Component
//!
//! One list row with a packed checkbox, label, and delete button.

use leptos::prelude::*;

use crate::models::Item;

/// Single packing-list row
#[component]
pub fn ItemRow(
    item: Item,
    #[prop(into)] on_toggle: Callback<u32>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let id = item.id;
    let label_class = if item.packed { "item-label packed" } else { "item-label" };

    view! {
        <li class="item-row">
            <input
                type="checkbox"
                prop:checked=item.packed
                on:change=move |_| on_toggle.run(id)
            />
            <span class=label_class>
                {item.quantity} " " {item.description.clone()}
            </span>
            <button class="delete-btn" on:click=move |_| on_delete.run(id)>
                "×"
            </button>
        </li>
    }
}
