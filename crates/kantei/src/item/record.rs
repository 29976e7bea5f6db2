//! Tracked item records.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::catalog::{AnnotatedName, Category, CategoryAttribute};
use crate::price::PriceVariant;

use super::AttributeUpdate;

/// Stable identifier of a tracked record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub(crate) u64);

impl ItemId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How an identity came to be confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationSource {
    /// Chosen by the player.
    Manual,
    /// Derived by the inference engine.
    Deduced,
}

/// Record fields copied from the catalog when an identity was confirmed,
/// as opposed to entered by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backfill {
    /// Buy and sell price.
    pub price: bool,
    pub attribute: bool,
}

impl Backfill {
    pub fn is_empty(&self) -> bool {
        !self.price && !self.attribute
    }
}

/// A confirmed identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    /// Base name (grade marker stripped).
    pub name: String,
    /// Price rule the identity was matched under, kept for display.
    pub variant: PriceVariant,
    pub source: ConfirmationSource,
    /// Fields filled in from the catalog; withdrawn with the confirmation.
    #[serde(default, skip_serializing_if = "Backfill::is_empty")]
    pub backfilled: Backfill,
}

impl Confirmation {
    pub fn manual(name: impl Into<String>, variant: PriceVariant) -> Self {
        Self {
            name: name.into(),
            variant,
            source: ConfirmationSource::Manual,
            backfilled: Backfill::default(),
        }
    }

    pub fn deduced(candidate: &AnnotatedName) -> Self {
        Self {
            name: candidate.base.clone(),
            variant: candidate.variant,
            source: ConfirmationSource::Deduced,
            backfilled: Backfill::default(),
        }
    }

    /// The confirmation as a candidate name.
    pub fn as_candidate(&self) -> AnnotatedName {
        AnnotatedName::new(self.name.clone(), self.variant)
    }
}

/// One player-tracked item slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub category: Category,
    /// Player-assigned label, unique among live records.
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_price: Option<u32>,
    pub attribute: CategoryAttribute,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<Confirmation>,
    /// Candidate identities, in catalog order.
    pub candidates: IndexSet<AnnotatedName>,
}

impl ItemRecord {
    /// A fresh record with nothing entered yet.
    pub fn new(id: ItemId, category: Category, label: impl Into<String>) -> Self {
        Self {
            id,
            category,
            label: label.into(),
            buy_price: None,
            sell_price: None,
            attribute: CategoryAttribute::None,
            confirmed: None,
            candidates: IndexSet::new(),
        }
    }

    /// Whether any attribute that constrains the candidates has been entered.
    pub fn has_attributes(&self) -> bool {
        self.buy_price.is_some() || self.attribute.is_set()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed.is_some()
    }

    /// Base name of the confirmed identity.
    pub fn confirmed_name(&self) -> Option<&str> {
        self.confirmed.as_ref().map(|c| c.name.as_str())
    }

    /// Distinct base names among the candidates.
    pub fn base_candidates(&self) -> IndexSet<&str> {
        self.candidates.iter().map(|c| c.base.as_str()).collect()
    }

    /// Record a confirmation and collapse the candidates onto it.
    pub(crate) fn confirm(&mut self, confirmation: Confirmation) {
        self.candidates = IndexSet::from([confirmation.as_candidate()]);
        self.confirmed = Some(confirmation);
    }

    /// Drop the confirmation and the fields it filled in; candidates are
    /// recomputed by the next pass.
    pub(crate) fn unconfirm(&mut self) {
        let Some(confirmation) = self.confirmed.take() else {
            return;
        };
        if confirmation.backfilled.price {
            self.buy_price = None;
            self.sell_price = None;
        }
        if confirmation.backfilled.attribute {
            self.attribute = CategoryAttribute::None;
        }
    }

    /// Fields the player enters become their own, no longer tied to the
    /// confirmation that filled them in.
    pub(crate) fn claim_entered(&mut self, update: &AttributeUpdate) {
        if let Some(confirmation) = self.confirmed.as_mut() {
            if update.touches_price() {
                confirmation.backfilled.price = false;
            }
            if update.touches_attribute() {
                confirmation.backfilled.attribute = false;
            }
        }
    }
}
