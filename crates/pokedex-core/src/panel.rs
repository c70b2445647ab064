//! List/Filter Panel State
//!
//! Catalog load, single type selection and the displayed entry list.

use crate::categories::Category;
use crate::config::DEFAULT_FILTER_CAP;
use crate::models::{CatalogPage, CategoryPage, ListEntry};
use crate::source::CatalogSource;

pub const CATALOG_ERROR: &str = "Failed to load Pokemon";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Handed out by [`Panel::select_filter`]; resolve with the category response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTicket {
    pub category: &'static Category,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    status: PanelStatus,
    /// Full catalog, kept so the filter can be cleared
    master: Vec<ListEntry>,
    displayed: Vec<ListEntry>,
    selection: Option<&'static Category>,
    filter_generation: u64,
    /// Shown above the grid when the last filter request failed
    filter_notice: Option<String>,
    filter_cap: usize,
    catalog_loaded: bool,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(DEFAULT_FILTER_CAP)
    }
}

impl Panel {
    pub fn new(filter_cap: usize) -> Self {
        Self {
            status: PanelStatus::Loading,
            master: Vec::new(),
            displayed: Vec::new(),
            selection: None,
            filter_generation: 0,
            filter_notice: None,
            filter_cap,
            catalog_loaded: false,
        }
    }

    pub fn status(&self) -> &PanelStatus {
        &self.status
    }

    pub fn displayed(&self) -> &[ListEntry] {
        &self.displayed
    }

    pub fn master(&self) -> &[ListEntry] {
        &self.master
    }

    pub fn selection(&self) -> Option<&'static Category> {
        self.selection
    }

    pub fn is_selected(&self, category: &Category) -> bool {
        self.selection.is_some_and(|c| c.name == category.name)
    }

    pub fn filter_notice(&self) -> Option<&str> {
        self.filter_notice.as_deref()
    }

    pub fn begin_catalog_load(&mut self) {
        self.status = PanelStatus::Loading;
    }

    pub fn finish_catalog_load(&mut self, page: Option<CatalogPage>) {
        match page {
            Some(page) => {
                log::info!("[PokeList] loaded {} entries", page.results.len());
                self.master = page.results;
                self.displayed = self.master.clone();
                self.catalog_loaded = true;
                self.status = PanelStatus::Ready;
            }
            None => {
                self.status = PanelStatus::Failed(CATALOG_ERROR.to_string());
            }
        }
    }

    /// Select one category, replacing any previous selection.
    ///
    /// Refused (returns `None`) until the catalog has loaded: a failed initial
    /// load leaves nothing to filter and there is no retry.
    pub fn select_filter(&mut self, category: &'static Category) -> Option<FilterTicket> {
        if !self.catalog_loaded {
            return None;
        }
        self.selection = Some(category);
        self.filter_notice = None;
        self.status = PanelStatus::Loading;
        self.filter_generation += 1;
        Some(FilterTicket { category, generation: self.filter_generation })
    }

    /// Apply a category response. Returns `false` for a superseded selection.
    pub fn finish_filter(&mut self, ticket: FilterTicket, page: Option<CategoryPage>) -> bool {
        if ticket.generation != self.filter_generation {
            log::debug!("[PokeList] dropping stale '{}' response", ticket.category.name);
            return false;
        }
        match page {
            Some(page) => {
                self.displayed = page.entries(self.filter_cap);
                log::info!("[PokeList] showing {} '{}' entries", self.displayed.len(), ticket.category.name);
            }
            None => {
                log::error!("[PokeList] filter '{}' failed, keeping previous list", ticket.category.name);
                self.filter_notice = Some(format!("Failed to load {} Pokemon", ticket.category.label));
            }
        }
        self.status = PanelStatus::Ready;
        true
    }

    /// Drop the selection and show the whole catalog again
    pub fn clear_filter(&mut self) {
        if !self.catalog_loaded {
            return;
        }
        // Invalidate any in-flight filter request
        self.filter_generation += 1;
        self.selection = None;
        self.filter_notice = None;
        self.displayed = self.master.clone();
        self.status = PanelStatus::Ready;
    }
}

/// Initial mount: fetch the catalog into `panel`
pub async fn load_catalog<S: CatalogSource + ?Sized>(source: &S, panel: &mut Panel) {
    panel.begin_catalog_load();
    let page = source.fetch_catalog().await;
    panel.finish_catalog_load(page);
}

/// Select `category` and fetch its members into `panel`
pub async fn apply_filter<S: CatalogSource + ?Sized>(source: &S, panel: &mut Panel, category: &'static Category) {
    if let Some(ticket) = panel.select_filter(category) {
        let page = source.fetch_by_category(ticket.category.name).await;
        panel.finish_filter(ticket, page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::{find_category, CATEGORIES};
    use crate::source::fake::FakeSource;

    fn cat(name: &str) -> &'static Category {
        find_category(name).unwrap()
    }

    fn ready_panel(names: &[&str]) -> Panel {
        let mut panel = Panel::default();
        panel.finish_catalog_load(Some(CatalogPage {
            count: names.len() as u32,
            next: None,
            previous: None,
            results: names.iter().map(|n| ListEntry::new(*n, format!("https://test/pokemon/{}/", n))).collect(),
        }));
        panel
    }

    async fn loaded_panel(source: &FakeSource) -> Panel {
        let mut panel = Panel::default();
        load_catalog(source, &mut panel).await;
        panel
    }

    #[tokio::test]
    async fn test_catalog_load() {
        let source = FakeSource::with_catalog(&[("bulbasaur", "U1"), ("charmander", "U2")]);
        let panel = loaded_panel(&source).await;

        assert_eq!(panel.status(), &PanelStatus::Ready);
        assert_eq!(panel.displayed().len(), 2);
        assert_eq!(panel.master(), panel.displayed());
        assert_eq!(panel.displayed()[1].url, "U2");
    }

    #[test]
    fn test_select_before_catalog_is_refused() {
        let mut panel = Panel::default();
        assert!(panel.select_filter(cat("fire")).is_none());
        assert_eq!(panel.status(), &PanelStatus::Loading);
    }

    #[tokio::test]
    async fn test_catalog_failure() {
        let source = FakeSource::default();
        let mut panel = loaded_panel(&source).await;

        assert_eq!(panel.status(), &PanelStatus::Failed(CATALOG_ERROR.to_string()));
        assert!(panel.displayed().is_empty());

        // No filtering possible after a failed load
        apply_filter(&source, &mut panel, cat("fire")).await;
        assert_eq!(source.requests(), vec!["catalog"]);
        assert!(panel.selection().is_none());
    }

    #[tokio::test]
    async fn test_every_category_single_request_single_selection() {
        let mut source = FakeSource::with_catalog(&[("bulbasaur", "U1")]);
        for category in CATEGORIES.iter() {
            source = source.category(category.name, 3);
        }
        let mut panel = loaded_panel(&source).await;

        for category in CATEGORIES.iter() {
            let before = source.requests().len();
            apply_filter(&source, &mut panel, category).await;

            let requests = source.requests();
            assert_eq!(requests.len(), before + 1);
            assert_eq!(requests.last().unwrap(), &format!("type:{}", category.name));

            let checked: Vec<_> = CATEGORIES.iter().filter(|c| panel.is_selected(c)).collect();
            assert_eq!(checked, vec![category]);
        }
    }

    #[tokio::test]
    async fn test_filter_caps_at_twenty() {
        let source = FakeSource::with_catalog(&[("bulbasaur", "U1")])
            .category("water", 150)
            .category("ice", 7);
        let mut panel = loaded_panel(&source).await;

        apply_filter(&source, &mut panel, cat("water")).await;
        assert_eq!(panel.displayed().len(), 20);
        assert_eq!(panel.displayed()[0].name, "water-0");

        apply_filter(&source, &mut panel, cat("ice")).await;
        assert_eq!(panel.displayed().len(), 7);
        assert_eq!(panel.status(), &PanelStatus::Ready);
    }

    #[tokio::test]
    async fn test_filter_failure_keeps_previous_list() {
        let source = FakeSource::with_catalog(&[("bulbasaur", "U1"), ("charmander", "U2")]).category("fire", 2);
        let mut panel = loaded_panel(&source).await;
        apply_filter(&source, &mut panel, cat("fire")).await;
        let shown = panel.displayed().to_vec();

        apply_filter(&source, &mut panel, cat("ghost")).await;
        assert_eq!(panel.displayed(), shown.as_slice());
        assert_eq!(panel.status(), &PanelStatus::Ready);
        assert_eq!(panel.selection(), Some(cat("ghost")));
        assert_eq!(panel.filter_notice(), Some("Failed to load Ghost Pokemon"));

        // The notice goes away on the next selection
        apply_filter(&source, &mut panel, cat("fire")).await;
        assert!(panel.filter_notice().is_none());
    }

    #[test]
    fn test_stale_filter_response_dropped() {
        let source = FakeSource::default().category("fire", 5).category("water", 2);
        let mut panel = ready_panel(&["bulbasaur"]);

        let fire = panel.select_filter(cat("fire")).unwrap();
        let water = panel.select_filter(cat("water")).unwrap();
        assert!(panel.finish_filter(water, source.categories.get("water").cloned()));
        assert!(!panel.finish_filter(fire, source.categories.get("fire").cloned()));

        assert_eq!(panel.displayed().len(), 2);
        assert_eq!(panel.selection(), Some(cat("water")));
    }

    #[tokio::test]
    async fn test_clear_filter_restores_catalog() {
        let source = FakeSource::with_catalog(&[("bulbasaur", "U1"), ("charmander", "U2"), ("squirtle", "U3")])
            .category("grass", 1);
        let mut panel = loaded_panel(&source).await;

        apply_filter(&source, &mut panel, cat("grass")).await;
        assert_eq!(panel.displayed().len(), 1);

        panel.clear_filter();
        assert!(panel.selection().is_none());
        assert_eq!(panel.displayed().len(), 3);
    }

    #[test]
    fn test_clear_filter_invalidates_inflight() {
        let mut panel = ready_panel(&["bulbasaur"]);
        let ticket = panel.select_filter(cat("bug")).unwrap();
        panel.clear_filter();

        let page = CategoryPage { name: "bug".into(), pokemon: vec![] };
        assert!(!panel.finish_filter(ticket, Some(page)));
        assert_eq!(panel.displayed().len(), 1);
    }
}
