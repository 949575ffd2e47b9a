//! Stats Footer Component
//!
//! Read-only completion summary for the whole list.

use leptos::prelude::*;

use crate::stats::summarize;
use crate::store::{use_app_store, AppStateStoreFields};

/// Footer summarizing packing progress
#[component]
pub fn StatsFooter() -> impl IntoView {
    let store = use_app_store();

    view! {
        <footer class="stats">
            {move || summarize(&store.items().get())}
        </footer>
    }
}
