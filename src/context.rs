//! Application Context
//!
//! The PokéAPI client, shared via Leptos Context API.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use pokedex_core::PokeApi;

#[derive(Clone, Copy)]
pub struct ApiContext {
    /// Local storage: the client is only ever touched from the browser thread
    api: StoredValue<PokeApi, LocalStorage>,
}

impl ApiContext {
    pub fn new(api: PokeApi) -> Self {
        Self {
            api: StoredValue::new_local(api),
        }
    }

    /// Cheap handle to move into a spawned fetch
    pub fn api(&self) -> PokeApi {
        self.api.get_value()
    }

    /// How many entries a type filter shows
    pub fn filter_cap(&self) -> usize {
        self.api.with_value(|api| api.config().filter_cap)
    }
}

/// Get the API context, provided by `App`
pub fn use_api() -> ApiContext {
    expect_context::<ApiContext>()
}
