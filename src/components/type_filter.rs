//! Type Filter Component
//!
//! Sidebar checklist of the fixed elemental types. Single selection: each
//! checkbox's `checked` is derived from the current selection.

use leptos::prelude::*;
use pokedex_core::{Category, CATEGORIES};

#[component]
pub fn TypeFilter(
    selection: Signal<Option<&'static Category>>,
    on_select: impl Fn(&'static Category) + Copy + Send + Sync + 'static,
    on_clear: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="filter-sidebar">
            <div class="filter-title">"Filter"</div>

            <div class="filter-section">
                <h3>"Type"</h3>
                {CATEGORIES.iter().map(|category| {
                    let is_checked = move || selection.get().is_some_and(|c| c.name == category.name);
                    view! {
                        <div class="filter-option">
                            <input
                                type="checkbox"
                                id=category.name
                                value=category.name
                                prop:checked=is_checked
                                on:change=move |_| on_select(category)
                            />
                            <div
                                class="type-indicator"
                                style=format!("background: {};", category.color)
                            ></div>
                            <label for=category.name>{category.label}</label>
                        </div>
                    }
                }).collect_view()}
            </div>

            <Show when=move || selection.get().is_some()>
                <button class="clear-filter-btn" on:click=move |_| on_clear()>
                    "Show all"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::{find_category, Panel};

    #[test]
    fn test_type_filter_builds_with_panel_callbacks() {
        let owner = Owner::new();
        owner.with(|| {
            let panel = RwSignal::new(Panel::default());
            let selection = Signal::derive(move || find_category("fire"));
            let on_select = move |category: &'static Category| {
                panel.update(|p| {
                    p.select_filter(category);
                });
            };
            let on_clear = move || panel.update(|p| p.clear_filter());

            let _view = view! {
                <TypeFilter selection=selection on_select=on_select on_clear=on_clear />
            };
            assert_eq!(selection.get_untracked().map(|c| c.label), Some("Fire"));
        });
    }
}
