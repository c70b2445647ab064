//! Pokémon List Component
//!
//! Loads the catalog on mount, renders the type filter sidebar and a grid of
//! cards for the displayed entries.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pokedex_core::{CatalogSource, Category, ListEntry, Panel, PanelStatus};

use crate::components::{PokeCard, TypeFilter};
use crate::context::use_api;

#[component]
pub fn PokeList() -> impl IntoView {
    let ctx = use_api();
    let panel = RwSignal::new(Panel::new(ctx.filter_cap()));

    // Only rebuild the layout when the status flips, not on every list change
    let status = Memo::new(move |_| panel.with(|p| p.status().clone()));
    let selection = Signal::derive(move || panel.with(|p| p.selection()));

    // Load the catalog once on mount; the panel starts out loading
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let page = api.fetch_catalog().await;
            panel.update(|p| p.finish_catalog_load(page));
        });
    });

    let on_select = move |category: &'static Category| {
        let Some(ticket) = panel.try_update(|p| p.select_filter(category)).flatten() else {
            log::warn!("[PokeList] catalog not loaded, ignoring '{}' filter", category.name);
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let page = api.fetch_by_category(ticket.category.name).await;
            panel.update(|p| {
                p.finish_filter(ticket, page);
            });
        });
    };

    let on_clear = move || panel.update(|p| p.clear_filter());

    view! {
        {move || match status.get() {
            PanelStatus::Loading => view! {
                <div class="loading">"Loading Pokemon..."</div>
            }.into_any(),
            PanelStatus::Failed(message) => view! {
                <div class="error">{message}</div>
            }.into_any(),
            PanelStatus::Ready => view! {
                <div class="poke-list">
                    <div class="title">"Pokédex"</div>

                    <div class="container">
                        <TypeFilter
                            selection=selection
                            on_select=on_select
                            on_clear=on_clear
                        />

                        <div class="main-content">
                            {move || panel.with(|p| p.filter_notice().map(str::to_string)).map(|notice| view! {
                                <div class="filter-notice">{notice}</div>
                            })}

                            <div class="pokemon-grid">
                                <For
                                    each=move || panel.with(|p| p.displayed().to_vec())
                                    key=|entry| entry.url.clone()
                                    children=move |entry: ListEntry| view! {
                                        <PokeCard name=entry.name url=entry.url />
                                    }
                                />
                            </div>

                            <p class="item-count">
                                {move || format!("{} Pokémon shown", panel.with(|p| p.displayed().len()))}
                            </p>
                        </div>
                    </div>
                </div>
            }.into_any(),
        }}
    }
}
