//! Attribute updates entered by the player.

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryAttribute, PotType};

/// A partial update of a record's observable attributes. Unset fields are
/// left as they are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_price: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pot_type: Option<PotType>,
}

impl AttributeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the observed buy price.
    pub fn with_buy_price(mut self, price: u32) -> Self {
        self.buy_price = Some(price);
        self
    }

    /// Set the observed sell price.
    pub fn with_sell_price(mut self, price: u32) -> Self {
        self.sell_price = Some(price);
        self
    }

    /// Set whether a scroll is read onto another item.
    pub fn with_usage_flag(mut self, flag: bool) -> Self {
        self.usage_flag = Some(flag);
        self
    }

    /// Set a pot's sub-kind.
    pub fn with_pot_type(mut self, pot: PotType) -> Self {
        self.pot_type = Some(pot);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.buy_price.is_none()
            && self.sell_price.is_none()
            && self.usage_flag.is_none()
            && self.pot_type.is_none()
    }

    pub fn touches_price(&self) -> bool {
        self.buy_price.is_some() || self.sell_price.is_some()
    }

    pub fn touches_attribute(&self) -> bool {
        self.usage_flag.is_some() || self.pot_type.is_some()
    }

    /// The category attributes carried by this update, in a fixed order.
    pub fn attributes(&self) -> Vec<CategoryAttribute> {
        let mut attributes = Vec::new();
        if let Some(flag) = self.usage_flag {
            attributes.push(CategoryAttribute::UsageFlag(flag));
        }
        if let Some(pot) = self.pot_type {
            attributes.push(CategoryAttribute::PotType(pot));
        }
        attributes
    }
}
