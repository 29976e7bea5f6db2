//! Candidate matching for a single record.

use indexmap::IndexSet;

use crate::catalog::{AnnotatedName, Catalog, CatalogEntry};
use crate::item::ItemRecord;
use crate::price::PriceVariant;

use super::engine::InferenceConfig;
use super::ledger::IdentityLedger;

/// Computes the candidate identities of a record from its attributes, the
/// catalog and the ledger.
#[derive(Debug, Clone, Copy)]
pub struct CandidateMatcher<'a> {
    catalog: &'a Catalog,
    variant_pricing: bool,
}

impl<'a> CandidateMatcher<'a> {
    pub fn new(catalog: &'a Catalog, config: &InferenceConfig) -> Self {
        Self {
            catalog,
            variant_pricing: config.variant_pricing,
        }
    }

    /// Candidates consistent with the record's attributes alone, ignoring
    /// both its confirmation and the ledger.
    ///
    /// A record with no attributes has no candidates.
    pub fn match_attributes(&self, record: &ItemRecord) -> IndexSet<AnnotatedName> {
        if !record.has_attributes() {
            return IndexSet::new();
        }

        let mut candidates = IndexSet::new();
        for entry in self.catalog.entries(record.category) {
            if record.attribute.is_set() && entry.attribute != record.attribute {
                continue;
            }
            for variant in self.price_variants(entry, record.buy_price) {
                candidates.insert(AnnotatedName::new(entry.base_name(), variant));
            }
        }
        candidates
    }

    /// Candidates of the record given everything already confirmed.
    pub fn match_record(
        &self,
        record: &ItemRecord,
        ledger: &IdentityLedger,
    ) -> IndexSet<AnnotatedName> {
        if let Some(confirmation) = &record.confirmed {
            return IndexSet::from([confirmation.as_candidate()]);
        }

        let mut candidates = self.match_attributes(record);

        candidates.retain(|c| match ledger.holder_of(&c.base) {
            Some(holder) => holder == record.id,
            None => true,
        });

        for block in ledger.blocks() {
            if block.has_member(record.id) {
                candidates.retain(|c| block.contains_name(&c.base));
            } else {
                candidates.retain(|c| !block.contains_name(&c.base));
            }
        }

        candidates
    }

    /// Price rules under which `entry` matches the observed buy price. With
    /// no price entered every entry matches at face value.
    fn price_variants(&self, entry: &CatalogEntry, buy_price: Option<u32>) -> Vec<PriceVariant> {
        match buy_price {
            None => vec![PriceVariant::Normal],
            Some(observed) => PriceVariant::classify(entry.buy_price, observed)
                .filter(|v| self.variant_pricing || *v == PriceVariant::Normal)
                .collect(),
        }
    }
}
