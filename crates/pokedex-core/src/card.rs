//! Card State
//!
//! Load state of one item card. Every bind to a new url bumps a generation
//! counter; a detail response only lands if it carries the current generation,
//! so a slow response for an old url can never overwrite a newer one.

use crate::models::DetailRecord;
use crate::source::CatalogSource;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CardState {
    /// No url bound (or the empty url)
    #[default]
    Empty,
    Loading,
    Loaded(DetailRecord),
    Failed,
}

/// Handed out by [`CardSlot::bind`]; the caller fetches `url` and resolves with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTicket {
    pub url: String,
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSlot {
    state: CardState,
    generation: u64,
}

impl CardSlot {
    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn record(&self) -> Option<&DetailRecord> {
        match &self.state {
            CardState::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// Bind a new url. Returns the fetch to perform, or `None` for the empty url.
    pub fn bind(&mut self, url: &str) -> Option<CardTicket> {
        self.generation += 1;
        if url.is_empty() {
            self.state = CardState::Empty;
            return None;
        }
        self.state = CardState::Loading;
        Some(CardTicket { url: url.to_string(), generation: self.generation })
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale and was dropped.
    pub fn resolve(&mut self, ticket: &CardTicket, record: Option<DetailRecord>) -> bool {
        if ticket.generation != self.generation {
            log::debug!("[PokeCard] dropping stale response for {}", ticket.url);
            return false;
        }
        self.state = match record {
            Some(record) => CardState::Loaded(record),
            None => CardState::Failed,
        };
        true
    }
}

/// Bind `url` and fetch its record from `source`
pub async fn load_card<S: CatalogSource + ?Sized>(source: &S, slot: &mut CardSlot, url: &str) {
    if let Some(ticket) = slot.bind(url) {
        let record = source.fetch_details(&ticket.url).await;
        slot.resolve(&ticket, record);
    }
}
