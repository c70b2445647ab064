//! UI Components
//!
//! Catalog panel, type filter sidebar and item cards.

mod poke_card;
mod poke_list;
mod type_filter;

pub use poke_card::PokeCard;
pub use poke_list::PokeList;
pub use type_filter::TypeFilter;
