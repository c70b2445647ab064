//! Elemental Categories
//!
//! Static filter table and the type → color lookup used by cards.

/// A filterable elemental type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category {
    /// Upstream name, also the `/type/{name}` path segment
    pub name: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

const fn category(name: &'static str, label: &'static str, color: &'static str) -> Category {
    Category { name, label, color }
}

/// The filter checklist, in display order
pub static CATEGORIES: [Category; 18] = [
    category("normal", "Normal", "#A8A77A"),
    category("fire", "Fire", "#EE8130"),
    category("water", "Water", "#6390F0"),
    category("electric", "Electric", "#F7D02C"),
    category("grass", "Grass", "#7AC74C"),
    category("ice", "Ice", "#96D9D6"),
    category("fighting", "Fighting", "#C22E28"),
    category("poison", "Poison", "#A33EA1"),
    category("ground", "Ground", "#E2BF65"),
    category("flying", "Flying", "#A98FF3"),
    category("psychic", "Psychic", "#F95587"),
    category("bug", "Bug", "#A6B91A"),
    category("rock", "Rock", "#B6A136"),
    category("ghost", "Ghost", "#735797"),
    category("dragon", "Dragon", "#6F35FC"),
    category("dark", "Dark", "#705746"),
    category("steel", "Steel", "#B7B7CE"),
    category("fairy", "Fairy", "#D685AD"),
];

/// Types that can show up on a card but are not offered as filters
const EXTRA_TYPE_COLORS: &[(&str, &str)] = &[("stellar", "#4E8DD3"), ("unknown", "#A9A9A9")];

pub const DEFAULT_TYPE_COLOR: &str = "#AAA";

pub fn find_category(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name)
}

/// Dot color for a type name, gray when the name is not in the table
pub fn type_color(name: &str) -> &'static str {
    find_category(name)
        .map(|c| c.color)
        .or_else(|| EXTRA_TYPE_COLORS.iter().find(|(n, _)| *n == name).map(|(_, c)| *c))
        .unwrap_or(DEFAULT_TYPE_COLOR)
}
