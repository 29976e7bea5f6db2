//! Bidirectional buy/sell price lookup.

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::error::{KanteiError, Result};

/// One-to-one mapping between face-value buy and sell prices, built from
/// the catalog's distinct `(buy, sell)` pairs.
#[derive(Debug, Clone, Default)]
pub struct PriceCodec {
    buy_to_sell: BTreeMap<u32, u32>,
    sell_to_buy: BTreeMap<u32, u32>,
}

impl PriceCodec {
    /// Build the table from a catalog.
    ///
    /// Fails when two entries disagree, i.e. the same buy price maps to two
    /// sell prices or vice versa.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self> {
        let mut codec = Self::default();

        for entry in catalog.iter() {
            let (buy, sell) = (entry.buy_price, entry.sell_price);

            if let Some(&known) = codec.buy_to_sell.get(&buy) {
                if known != sell {
                    return Err(KanteiError::CatalogConflict(format!(
                        "buy price {} maps to sell prices {} and {} ('{}')",
                        buy, known, sell, entry.name
                    )));
                }
            }
            if let Some(&known) = codec.sell_to_buy.get(&sell) {
                if known != buy {
                    return Err(KanteiError::CatalogConflict(format!(
                        "sell price {} maps to buy prices {} and {} ('{}')",
                        sell, known, buy, entry.name
                    )));
                }
            }

            codec.buy_to_sell.insert(buy, sell);
            codec.sell_to_buy.insert(sell, buy);
        }

        Ok(codec)
    }

    /// Face-value sell price for a buy price.
    pub fn sell_for(&self, buy_price: u32) -> Option<u32> {
        self.buy_to_sell.get(&buy_price).copied()
    }

    /// Face-value buy price for a sell price.
    pub fn buy_for(&self, sell_price: u32) -> Option<u32> {
        self.sell_to_buy.get(&sell_price).copied()
    }

    /// Number of distinct price pairs.
    pub fn len(&self) -> usize {
        self.buy_to_sell.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buy_to_sell.is_empty()
    }
}
