//! Sort Selector Component
//!
//! Select element for choosing the list's display order.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::SortMode;

/// Sort mode selector for the packing list
#[component]
pub fn SortSelector(
    sort_by: ReadSignal<SortMode>,
    on_change: impl Fn(SortMode) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            prop:value=move || sort_by.get().as_str()
            on:change=move |ev| {
                let target = ev.target().unwrap();
                let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                on_change(SortMode::parse(&select.value()));
            }
        >
            {SortMode::ALL.iter().map(|(_, value, label)| view! {
                <option value=*value>{*label}</option>
            }).collect_view()}
        </select>
    }
}
