//! PokéAPI HTTP Client
//!
//! One GET per call, no caching or retry. The `try_*` methods surface the
//! failure; the [`CatalogSource`] impl logs it and returns `None`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{CatalogPage, CategoryPage, DetailRecord, PokemonPayload};
use crate::source::CatalogSource;

#[derive(Debug, Clone)]
pub struct PokeApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl Default for PokeApi {
    fn default() -> Self {
        Self::new(ApiConfig::from_build_env())
    }
}

impl PokeApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn try_fetch_catalog(&self) -> ApiResult<CatalogPage> {
        self.get_json(&self.config.catalog_url()).await
    }

    pub async fn try_fetch_details(&self, url: &str) -> ApiResult<DetailRecord> {
        self.get_json::<PokemonPayload>(url).await.map(PokemonPayload::into_record)
    }

    pub async fn try_fetch_by_category(&self, category: &str) -> ApiResult<CategoryPage> {
        self.get_json(&self.config.category_url(category)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        log::debug!("[PokeApi] GET {}", url);
        let request_error = |source| ApiError::Request { url: url.to_string(), source };

        let response = self.client.get(url).send().await.map_err(request_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(request_error)?;
        decode_body(url, status, &body)
    }
}

fn decode_body<T: DeserializeOwned>(url: &str, status: u16, body: &[u8]) -> ApiResult<T> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { url: url.to_string(), status });
    }
    serde_json::from_slice(body).map_err(|source| ApiError::Decode { url: url.to_string(), source })
}

/// Log a failed call and turn it into `None`
fn absorb<T>(operation: &str, result: ApiResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("[PokeApi] {} failed ({:?}): {}", operation, err.kind(), err);
            None
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for PokeApi {
    async fn fetch_catalog(&self) -> Option<CatalogPage> {
        absorb("fetching catalog", self.try_fetch_catalog().await)
    }

    async fn fetch_details(&self, url: &str) -> Option<DetailRecord> {
        absorb("fetching details", self.try_fetch_details(url).await)
    }

    async fn fetch_by_category(&self, category: &str) -> Option<CategoryPage> {
        absorb("fetching by type", self.try_fetch_by_category(category).await)
    }
}
