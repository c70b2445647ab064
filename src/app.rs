//! Pokédex Frontend App
//!
//! Root component: provides the API client and mounts the catalog panel.

use leptos::prelude::*;
use pokedex_core::PokeApi;

use crate::components::PokeList;
use crate::context::ApiContext;

#[component]
pub fn App() -> impl IntoView {
    let api = PokeApi::default();
    log::info!("[APP] Using PokéAPI at {}", api.config().base_url);

    // Provide the client to every card and the panel
    provide_context(ApiContext::new(api));

    view! {
        <main class="app-layout">
            <PokeList />
        </main>
    }
}
