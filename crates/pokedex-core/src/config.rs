//! Client Configuration

/// PokéAPI v2 root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Large enough to pull the whole catalog in one page
pub const DEFAULT_CATALOG_LIMIT: u32 = 100_000;

/// Entries shown after a type filter is applied
pub const DEFAULT_FILTER_CAP: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    pub catalog_limit: u32,
    pub catalog_offset: u32,
    pub filter_cap: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            catalog_limit: DEFAULT_CATALOG_LIMIT,
            catalog_offset: 0,
            filter_cap: DEFAULT_FILTER_CAP,
        }
    }
}

impl ApiConfig {
    /// Defaults, with the base URL overridable at build time through `POKEDEX_API_BASE`
    pub fn from_build_env() -> Self {
        Self::default().with_base_url(option_env!("POKEDEX_API_BASE").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn catalog_url(&self) -> String {
        format!(
            "{}/pokemon/?limit={}&offset={}",
            self.base_url, self.catalog_limit, self.catalog_offset
        )
    }

    pub fn category_url(&self, category: &str) -> String {
        let segment = percent_encoding::utf8_percent_encode(category, percent_encoding::NON_ALPHANUMERIC);
        format!("{}/type/{}", self.base_url, segment)
    }
}
