//! Catalog Source
//!
//! The three catalog operations the view state needs. Implemented by
//! [`PokeApi`](crate::client::PokeApi) over HTTP and by fakes in tests.

use async_trait::async_trait;

use crate::models::{CatalogPage, CategoryPage, DetailRecord};

/// Every operation absorbs its own failures and returns `None` instead.
///
/// Not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// The whole catalog in one page
    async fn fetch_catalog(&self) -> Option<CatalogPage>;

    /// One entry's detail record, from an absolute URL
    async fn fetch_details(&self, url: &str) -> Option<DetailRecord>;

    /// Members of one elemental category
    async fn fetch_by_category(&self, category: &str) -> Option<CategoryPage>;
}
