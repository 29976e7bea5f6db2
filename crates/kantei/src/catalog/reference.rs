//! The immutable reference catalog.

use std::collections::BTreeMap;

use indexmap::IndexSet;

use super::data;
use super::name::normalize_name;
use super::types::{CatalogEntry, Category, CategoryAttribute};

/// Per-category lists of reference entries, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<Category, Vec<CatalogEntry>>,
}

impl Catalog {
    /// The game's built-in reference data for all six categories.
    pub fn builtin() -> Self {
        let mut entries = Vec::new();

        let plain = [
            (Category::Grass, data::GRASS),
            (Category::Staff, data::STAVES),
            (Category::Bracelet, data::BRACELETS),
            (Category::Incense, data::INCENSES),
        ];
        for (category, rows) in plain {
            entries.extend(
                rows.iter()
                    .map(|&(name, buy, sell)| CatalogEntry::new(category, name, buy, sell)),
            );
        }

        entries.extend(data::SCROLLS.iter().map(|&(name, buy, sell, use_on_item)| {
            CatalogEntry::new(Category::Scroll, name, buy, sell)
                .with_attribute(CategoryAttribute::UsageFlag(use_on_item))
        }));

        entries.extend(data::POTS.iter().map(|&(name, buy, sell, pot)| {
            CatalogEntry::new(Category::Pot, name, buy, sell)
                .with_attribute(CategoryAttribute::PotType(pot))
        }));

        Self::from_entries(entries)
    }

    /// Build a catalog from arbitrary entries. Order within a category is
    /// preserved.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut by_category: BTreeMap<Category, Vec<CatalogEntry>> = BTreeMap::new();
        for entry in entries {
            by_category.entry(entry.category).or_default().push(entry);
        }
        Self {
            entries: by_category,
        }
    }

    /// Entries of a category, in catalog order.
    pub fn entries(&self, category: Category) -> &[CatalogEntry] {
        self.entries
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Every entry across all categories.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values().flatten()
    }

    /// Distinct base names of a category, in catalog order.
    pub fn base_names(&self, category: Category) -> IndexSet<&str> {
        self.entries(category)
            .iter()
            .map(|e| e.base_name())
            .collect()
    }

    /// All entries of a category whose base name is `name`.
    pub fn entries_named<'a>(
        &'a self,
        category: Category,
        name: &'a str,
    ) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        let base = normalize_name(name);
        self.entries(category)
            .iter()
            .filter(move |e| e.base_name() == base)
    }

    /// Whether `name` (normalized) is a base name of `category`.
    pub fn contains_name(&self, category: Category, name: &str) -> bool {
        self.entries_named(category, name).next().is_some()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
