//! Pokémon Card Component
//!
//! One catalog entry. Fetches its own detail record whenever `url` changes
//! and renders the loading / error / loaded / empty state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pokedex_core::{type_color, CardSlot, CardState, CatalogSource, DetailRecord};

use crate::context::use_api;

#[component]
pub fn PokeCard(
    #[prop(into)] name: Signal<String>,
    #[prop(into)] url: Signal<String>,
) -> impl IntoView {
    let ctx = use_api();
    let slot = RwSignal::new(CardSlot::default());

    // Re-fetch on every url change; the slot drops responses for older urls
    Effect::new(move |_| {
        let url = url.get();
        let Some(ticket) = slot.try_update(|s| s.bind(&url)).flatten() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let record = api.fetch_details(&ticket.url).await;
            slot.update(|s| {
                s.resolve(&ticket, record);
            });
        });
    });

    view! {
        <div class="card-host" data-name=move || name.get()>
            {move || slot.with(|s| match s.state() {
                CardState::Loading => view! {
                    <div class="card">
                        <div class="loading">
                            <span>"Loading..."</span>
                        </div>
                    </div>
                }.into_any(),
                CardState::Failed => view! {
                    <div class="card-error">"Error!"</div>
                }.into_any(),
                CardState::Loaded(record) => view! {
                    <CardBody record=record.clone() />
                }.into_any(),
                CardState::Empty => view! {
                    <div class="card">
                        <div class="no-data">"No data"</div>
                    </div>
                }.into_any(),
            })}
        </div>
    }
}

#[component]
fn CardBody(record: DetailRecord) -> impl IntoView {
    let dots = dot_styles(&record).into_iter().zip(record.types.clone()).map(|(style, type_name)| {
        view! {
            <span class="type-dot" style=style title=type_name></span>
        }
    }).collect_view();

    view! {
        <div class="card">
            <div class="card-top">
                <div class="pokedex-number">{pokedex_number(record.id)}</div>
                <img class="pokemon-image" src=record.sprite_url.clone() alt=record.name.clone() />
            </div>
            <div class="card-bottom">
                <div class="pokemon-name">{record.name.clone()}</div>
                <div class="types">{dots}</div>
            </div>
        </div>
    }
}

fn pokedex_number(id: u32) -> String {
    format!("#{}", id)
}

fn dot_style(type_name: &str) -> String {
    format!("background-color: {};", type_color(type_name))
}

/// One style per type, in the record's type order
fn dot_styles(record: &DetailRecord) -> Vec<String> {
    record.types.iter().map(|t| dot_style(t)).collect()
}
