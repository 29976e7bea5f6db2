//! Core type definitions for catalog entries and item attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Item category. Each category decides which optional attribute its items
/// carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 草: price is the only discriminator.
    Grass,
    /// 巻物: carries a usage flag.
    Scroll,
    /// 杖: price is the only discriminator.
    Staff,
    /// 腕輪: price is the only discriminator.
    Bracelet,
    /// お香: price is the only discriminator.
    Incense,
    /// 壺: carries a pot type.
    Pot,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Grass,
        Category::Scroll,
        Category::Staff,
        Category::Bracelet,
        Category::Incense,
        Category::Pot,
    ];

    /// Get the in-game label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Grass => "草",
            Category::Scroll => "巻物",
            Category::Staff => "杖",
            Category::Bracelet => "腕輪",
            Category::Incense => "お香",
            Category::Pot => "壺",
        }
    }

    /// Stable lower-case key used for parsing and serialization.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Grass => "grass",
            Category::Scroll => "scroll",
            Category::Staff => "staff",
            Category::Bracelet => "bracelet",
            Category::Incense => "incense",
            Category::Pot => "pot",
        }
    }

    /// The kind of extra attribute items of this category carry, if any.
    pub fn attribute_kind(&self) -> Option<AttributeKind> {
        match self {
            Category::Scroll => Some(AttributeKind::UsageFlag),
            Category::Pot => Some(AttributeKind::PotType),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(trimmed) || c.label() == trimmed)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// Behavioural sub-kind of a pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PotType {
    /// Items can be put in.
    Empty,
    /// Pushing on it triggers something behind the player.
    Back,
    /// Opens with a surprise.
    Surprise,
}

impl PotType {
    pub fn key(&self) -> &'static str {
        match self {
            PotType::Empty => "empty",
            PotType::Back => "back",
            PotType::Surprise => "surprise",
        }
    }
}

impl fmt::Display for PotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(PotType::Empty),
            "back" => Ok(PotType::Back),
            "surprise" => Ok(PotType::Surprise),
            other => Err(format!("unknown pot type '{}'", other)),
        }
    }
}

/// Which attribute a category carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    UsageFlag,
    PotType,
}

/// Category-specific optional attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CategoryAttribute {
    /// No attribute (or not entered yet).
    #[default]
    None,
    /// Scroll: whether it is read onto another item.
    UsageFlag(bool),
    /// Pot: behavioural sub-kind.
    PotType(PotType),
}

impl CategoryAttribute {
    /// The kind of this attribute, `None` for [`CategoryAttribute::None`].
    pub fn kind(&self) -> Option<AttributeKind> {
        match self {
            CategoryAttribute::None => None,
            CategoryAttribute::UsageFlag(_) => Some(AttributeKind::UsageFlag),
            CategoryAttribute::PotType(_) => Some(AttributeKind::PotType),
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, CategoryAttribute::None)
    }

    /// Whether this attribute may be attached to items of `category`.
    pub fn fits(&self, category: Category) -> bool {
        match self.kind() {
            None => true,
            Some(kind) => category.attribute_kind() == Some(kind),
        }
    }

    pub fn usage_flag(&self) -> Option<bool> {
        match self {
            CategoryAttribute::UsageFlag(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn pot_type(&self) -> Option<PotType> {
        match self {
            CategoryAttribute::PotType(pot) => Some(*pot),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryAttribute::None => f.write_str("-"),
            CategoryAttribute::UsageFlag(true) => f.write_str("use-on-item"),
            CategoryAttribute::UsageFlag(false) => f.write_str("standalone"),
            CategoryAttribute::PotType(pot) => write!(f, "pot:{}", pot),
        }
    }
}

/// One row of the reference catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub category: Category,
    /// Raw catalog name, possibly with a trailing grade marker such as `[4]`.
    pub name: String,
    pub buy_price: u32,
    pub sell_price: u32,
    #[serde(default)]
    pub attribute: CategoryAttribute,
}

impl CatalogEntry {
    pub fn new(
        category: Category,
        name: impl Into<String>,
        buy_price: u32,
        sell_price: u32,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            buy_price,
            sell_price,
            attribute: CategoryAttribute::None,
        }
    }

    /// Attach a category attribute.
    pub fn with_attribute(mut self, attribute: CategoryAttribute) -> Self {
        self.attribute = attribute;
        self
    }

    /// Name with the grade marker stripped.
    pub fn base_name(&self) -> &str {
        super::name::normalize_name(&self.name)
    }
}
