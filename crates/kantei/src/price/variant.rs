//! Blessed and cursed price variants.

use serde::{Deserialize, Serialize};

/// Blessed items sell for twice the catalog price.
pub const BLESSED_MULTIPLIER: u32 = 2;

/// Cursed items sell for floor(catalog price × 0.87). Empirical game data.
pub const CURSED_NUMERATOR: u32 = 87;
pub const CURSED_DENOMINATOR: u32 = 100;

/// Price rule under which an observed price matched a catalog price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceVariant {
    /// Face value.
    #[default]
    Normal,
    /// Catalog price × 2.
    Blessed,
    /// floor(catalog price × 0.87).
    Cursed,
}

impl PriceVariant {
    pub const ALL: [PriceVariant; 3] = [
        PriceVariant::Normal,
        PriceVariant::Blessed,
        PriceVariant::Cursed,
    ];

    /// Display annotation appended to a base name.
    pub fn suffix(&self) -> &'static str {
        match self {
            PriceVariant::Normal => "",
            PriceVariant::Blessed => "（祝）",
            PriceVariant::Cursed => "（呪）",
        }
    }

    /// The shop price of an item whose catalog price is `catalog_price`.
    pub fn apply(&self, catalog_price: u32) -> u64 {
        let price = u64::from(catalog_price);
        match self {
            PriceVariant::Normal => price,
            PriceVariant::Blessed => price * u64::from(BLESSED_MULTIPLIER),
            PriceVariant::Cursed => {
                price * u64::from(CURSED_NUMERATOR) / u64::from(CURSED_DENOMINATOR)
            }
        }
    }

    /// Whether `observed` is this variant's price for `catalog_price`.
    pub fn matches(&self, catalog_price: u32, observed: u32) -> bool {
        self.apply(catalog_price) == u64::from(observed)
    }

    /// Every variant under which `observed` matches `catalog_price`.
    pub fn classify(catalog_price: u32, observed: u32) -> impl Iterator<Item = PriceVariant> {
        PriceVariant::ALL
            .into_iter()
            .filter(move |v| v.matches(catalog_price, observed))
    }
}
