//! Packlist Frontend App
//!
//! Main application component: header, form, list, stats footer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemForm, PackingList, StatsFooter};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Provide the store to all children
    let store = Store::new(AppState::new());
    provide_context(store);

    view! {
        <div class="app">
            <h1 class="logo">"Far Away"</h1>
            <AddItemForm />
            <PackingList />
            <StatsFooter />
        </div>
    }
}
