//! Reference catalog of item templates per category.

mod data;
mod name;
mod reference;
mod types;

pub use name::{AnnotatedName, normalize_name};
pub use reference::Catalog;
pub use types::{AttributeKind, CatalogEntry, Category, CategoryAttribute, PotType};
