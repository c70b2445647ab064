//! Data Models
//!
//! Shapes of the PokéAPI payloads and the resolved records the UI renders.

use serde::Deserialize;

/// A `(name, url)` reference into the catalog, not yet resolved
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ListEntry {
    pub name: String,
    pub url: String,
}

impl ListEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into() }
    }
}

/// One page of `/pokemon/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<ListEntry>,
}

/// `/type/{name}` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryPage {
    #[serde(default)]
    pub name: String,
    pub pokemon: Vec<CategoryMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryMember {
    #[serde(default)]
    pub slot: u8,
    pub pokemon: ListEntry,
}

impl CategoryPage {
    /// Unwrap the nested entries, keeping at most `cap` of them in upstream order
    pub fn entries(&self, cap: usize) -> Vec<ListEntry> {
        self.pokemon
            .iter()
            .take(cap)
            .map(|member| member.pokemon.clone())
            .collect()
    }
}

/// Raw `/pokemon/{id}` payload, reduced to the fields we render
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PokemonPayload {
    id: u32,
    name: String,
    sprites: SpritesPayload,
    types: Vec<TypeSlotPayload>,
}

#[derive(Debug, Clone, Deserialize)]
struct SpritesPayload {
    front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct TypeSlotPayload {
    #[serde(default)]
    slot: u8,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
struct NamedResource {
    name: String,
}

/// Fully resolved view of one entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,
    /// Upstream leaves `front_default` null for some alternate forms
    pub sprite_url: Option<String>,
    pub types: Vec<String>,
}

impl PokemonPayload {
    /// Types come back ordered by slot
    pub(crate) fn into_record(self) -> DetailRecord {
        let mut slots = self.types;
        slots.sort_by_key(|t| t.slot);
        DetailRecord {
            id: self.id,
            name: self.name,
            sprite_url: self.sprites.front_default,
            types: slots.into_iter().map(|t| t.kind.name).collect(),
        }
    }
}
