//! Add Item Form Component
//!
//! Form for adding new items with a quantity selector.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Item;
use crate::store::{store_add_item, store_next_id, use_app_store};

/// Form with quantity select (1-20) and description input
#[component]
pub fn AddItemForm() -> impl IntoView {
    let store = use_app_store();

    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(1u32);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(item) = Item::from_input(&description.get(), quantity.get(), || {
            store_next_id(&store)
        }) else {
            return;
        };
        web_sys::console::log_1(&format!("[FORM] Added item #{}: {:?}", item.id, item).into());
        store_add_item(&store, item);
        set_description.set(String::new());
        set_quantity.set(1);
    };

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>"What do you need for your trip?"</h3>
            <select
                prop:value=move || quantity.get().to_string()
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    set_quantity.set(select.value().parse().unwrap_or(1));
                }
            >
                {(1..=20u32).map(|num| view! {
                    <option value=num.to_string()>{num}</option>
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="Item..."
                prop:value=move || description.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_description.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
