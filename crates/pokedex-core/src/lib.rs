//! Pokédex Core
//!
//! PokéAPI client, data model and the view state machines driven by the UI.

pub mod card;
pub mod categories;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod panel;
pub mod source;

pub use card::{load_card, CardSlot, CardState, CardTicket};
pub use categories::{find_category, type_color, Category, CATEGORIES, DEFAULT_TYPE_COLOR};
pub use client::PokeApi;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, FailureKind};
pub use models::{CatalogPage, CategoryMember, CategoryPage, DetailRecord, ListEntry};
pub use panel::{apply_filter, load_catalog, FilterTicket, Panel, PanelStatus};
pub use source::CatalogSource;
