//! Main Tracker struct and public API.

use std::collections::BTreeSet;

use indexmap::IndexSet;
use tracing::{info, warn};

use crate::catalog::{AnnotatedName, Catalog, Category, CategoryAttribute, normalize_name};
use crate::error::{KanteiError, Result};
use crate::inference::{
    CandidateMatcher, IdentityLedger, InferenceConfig, InferenceEngine, InferenceReport,
};
use crate::item::{AttributeUpdate, Backfill, Confirmation, ConfirmationSource, ItemId, ItemRecord};
use crate::price::{PriceCodec, PriceVariant};

/// Configuration for a tracker.
#[derive(Debug, Clone, Default)]
pub struct TrackerConfig {
    /// Inference engine configuration.
    pub inference: InferenceConfig,
}

impl TrackerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inference(mut self, inference: InferenceConfig) -> Self {
        self.inference = inference;
        self
    }
}

/// Mutable state: the records and the ledger derived from them.
#[derive(Debug, Clone, Default)]
struct TrackerState {
    records: Vec<ItemRecord>,
    ledger: IdentityLedger,
    next_id: u64,
}

impl TrackerState {
    fn allocate_id(&mut self) -> ItemId {
        self.next_id += 1;
        ItemId(self.next_id)
    }

    fn record_mut(&mut self, id: ItemId) -> Result<&mut ItemRecord> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(KanteiError::UnknownItem(id))
    }

    /// Forget everything that was deduced, keeping attributes and manual
    /// confirmations, so the next run re-derives from the remaining facts.
    fn forget_deductions(&mut self) {
        self.ledger.clear_deduced();
        for record in &mut self.records {
            if record
                .confirmed
                .as_ref()
                .is_some_and(|c| c.source == ConfirmationSource::Deduced)
            {
                record.unconfirm();
            }
        }
    }
}

/// Tracks unidentified items and narrows their identities.
///
/// Every mutation is applied to a copy of the state and inferred to a fixed
/// point; the copy replaces the current state only if that succeeds, so a
/// rejected mutation leaves everything as it was.
///
/// # Example
///
/// ```
/// use kantei::{AttributeUpdate, Category, Tracker};
///
/// let mut tracker = Tracker::new().unwrap();
/// let a = tracker.create_item(Category::Grass, "A").unwrap();
/// tracker.set_attributes(a, AttributeUpdate::new().with_buy_price(40)).unwrap();
///
/// assert_eq!(tracker.confirmed(a).unwrap(), Some("薬草"));
/// ```
#[derive(Debug, Clone)]
pub struct Tracker {
    catalog: Catalog,
    codec: PriceCodec,
    config: TrackerConfig,
    state: TrackerState,
    last_report: InferenceReport,
}

impl Tracker {
    /// Create a tracker over the built-in catalog with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(Catalog::builtin(), TrackerConfig::default())
    }

    /// Create a tracker over a custom catalog.
    pub fn with_config(catalog: Catalog, config: TrackerConfig) -> Result<Self> {
        let codec = PriceCodec::from_catalog(&catalog)?;
        Ok(Self {
            catalog,
            codec,
            config,
            state: TrackerState::default(),
            last_report: InferenceReport::default(),
        })
    }

    // Mutations

    /// Start tracking a new item.
    pub fn create_item(&mut self, category: Category, label: &str) -> Result<ItemId> {
        let label = label.trim();
        if label.is_empty() {
            return Err(KanteiError::EmptyLabel);
        }
        if self.find_by_label(label).is_some() {
            return Err(KanteiError::DuplicateLabel(label.to_string()));
        }

        let mut next = self.state.clone();
        let id = next.allocate_id();
        next.records.push(ItemRecord::new(id, category, label));
        self.commit(next)?;

        info!(item = label, id = %id, category = %category, "item added");
        Ok(id)
    }

    /// Apply observed attributes to a record.
    ///
    /// A sell price alone is translated to a buy price; a buy price fills in
    /// the sell price when the price table knows it.
    pub fn set_attributes(&mut self, id: ItemId, update: AttributeUpdate) -> Result<()> {
        let matcher = CandidateMatcher::new(&self.catalog, &self.config.inference);
        let mut next = self.state.clone();
        let record = next
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(KanteiError::UnknownItem(id))?;

        for attribute in update.attributes() {
            if !attribute.fits(record.category) {
                return Err(KanteiError::AttributeMismatch {
                    label: record.label.clone(),
                    category: record.category,
                    attribute: attribute.to_string(),
                });
            }
            record.attribute = attribute;
        }

        match (update.buy_price, update.sell_price) {
            (Some(buy), sell) => {
                let face_sell = self.codec.sell_for(buy);
                if let Some(sell) = sell {
                    let consistent = match face_sell {
                        Some(expected) => sell == expected,
                        // A blessed or cursed buy price pairs with the face
                        // sell price of the catalog price it derives from.
                        None => self.codec.buy_for(sell).is_some_and(|face_buy| {
                            PriceVariant::classify(face_buy, buy).next().is_some()
                        }),
                    };
                    if !consistent {
                        return Err(KanteiError::NoPriceMatch {
                            category: record.category,
                            price: sell,
                        });
                    }
                }
                record.buy_price = Some(buy);
                record.sell_price = sell.or(face_sell);
            }
            (None, Some(sell)) => {
                let buy = self.codec.buy_for(sell).ok_or(KanteiError::NoPriceMatch {
                    category: record.category,
                    price: sell,
                })?;
                record.buy_price = Some(buy);
                record.sell_price = Some(sell);
            }
            (None, None) => {}
        }
        record.claim_entered(&update);

        let raw = matcher.match_attributes(record);
        if record.has_attributes() && raw.is_empty() {
            return Err(match record.buy_price.filter(|_| update.touches_price()) {
                Some(price) => KanteiError::NoPriceMatch {
                    category: record.category,
                    price,
                },
                None => KanteiError::AttributeMismatch {
                    label: record.label.clone(),
                    category: record.category,
                    attribute: record.attribute.to_string(),
                },
            });
        }

        let raw_bases: BTreeSet<&str> = raw.iter().map(|c| c.base.as_str()).collect();
        if let Some(name) = record.confirmed_name() {
            if !raw_bases.contains(name) {
                return Err(KanteiError::ConflictsWithIdentification {
                    label: record.label.clone(),
                    reason: format!("'{}' does not match these attributes", name),
                });
            }
        }
        for block in next.ledger.blocks_of(id) {
            if !block.names.iter().any(|n| raw_bases.contains(n.as_str())) {
                return Err(KanteiError::ConflictsWithIdentification {
                    label: record.label.clone(),
                    reason: "no member of its identified group matches these attributes"
                        .to_string(),
                });
            }
        }

        self.commit(next)?;
        Ok(())
    }

    /// Confirm a record's identity by hand.
    ///
    /// Unset attributes are filled in from the catalog when every entry of
    /// that name agrees on them.
    pub fn confirm_manually(&mut self, id: ItemId, name: &str) -> Result<()> {
        let base = normalize_name(name).to_string();
        let record = self.record(id).ok_or(KanteiError::UnknownItem(id))?;

        if let Some(current) = record.confirmed_name() {
            if current == base {
                return Ok(());
            }
            return Err(KanteiError::AlreadyConfirmed {
                label: record.label.clone(),
                name: current.to_string(),
            });
        }

        if let Some(holder) = self.state.ledger.holder_of(&base) {
            return Err(KanteiError::NameAlreadyTaken {
                name: base,
                holder: self.label_of(holder),
            });
        }
        if let Some(block) = self.state.ledger.block_with_name(&base) {
            if !block.has_member(id) {
                let holders: Vec<String> =
                    block.members.iter().map(|m| self.label_of(*m)).collect();
                return Err(KanteiError::NameAlreadyTaken {
                    name: base,
                    holder: holders.join(", "),
                });
            }
        }
        if !self.catalog.contains_name(record.category, &base) {
            return Err(KanteiError::UnknownName {
                category: record.category,
                name: base,
            });
        }
        if !record.candidates.is_empty() && !record.candidates.iter().any(|c| c.base == base) {
            return Err(KanteiError::IdentityMismatch {
                label: record.label.clone(),
                name: base,
            });
        }

        let variant = record
            .candidates
            .iter()
            .find(|c| c.base == base)
            .map(|c| c.variant)
            .unwrap_or(PriceVariant::Normal);

        let mut next = self.state.clone();
        next.ledger.confirm(&base, id, ConfirmationSource::Manual)?;
        let record = next.record_mut(id)?;
        record.confirm(Confirmation::manual(base.clone(), variant));
        self.backfill_attributes(record);

        self.commit(next)?;
        info!(item = %self.label_of(id), name = %base, "identified manually");
        Ok(())
    }

    /// Stop tracking a record. Deductions that depended on it are withdrawn
    /// and re-derived from what remains.
    pub fn delete_item(&mut self, id: ItemId) -> Result<()> {
        let mut next = self.state.clone();
        let position = next
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(KanteiError::UnknownItem(id))?;
        let removed = next.records.remove(position);

        let rolled_back = next.ledger.forget_holder(id);
        if rolled_back > 0 {
            next.forget_deductions();
        }

        self.commit(next)?;
        info!(item = %removed.label, rolled_back, "item deleted");
        Ok(())
    }

    /// Stop tracking every record.
    pub fn delete_all(&mut self) {
        self.state.records.clear();
        self.state.ledger.clear();
        self.last_report = InferenceReport::default();
        info!("all items deleted");
    }

    /// Forget every identification, manual ones included, and re-derive
    /// from the attributes the player entered. Fields a manual confirmation
    /// filled in from the catalog are withdrawn with it.
    pub fn reset_identifications(&mut self) -> Result<()> {
        let mut next = self.state.clone();
        next.ledger.clear();
        for record in &mut next.records {
            record.unconfirm();
        }
        self.commit(next)?;
        info!("identifications reset");
        Ok(())
    }

    // Queries

    /// Candidate identities of a record, in catalog order.
    pub fn candidates(&self, id: ItemId) -> Result<&IndexSet<AnnotatedName>> {
        self.record(id)
            .map(|r| &r.candidates)
            .ok_or(KanteiError::UnknownItem(id))
    }

    /// Confirmed base name of a record, if identified.
    pub fn confirmed(&self, id: ItemId) -> Result<Option<&str>> {
        self.record(id)
            .map(|r| r.confirmed_name())
            .ok_or(KanteiError::UnknownItem(id))
    }

    /// Names the player may choose from when confirming by hand: the
    /// current candidates, or the whole category when nothing is entered.
    pub fn selectable_names(&self, id: ItemId) -> Result<Vec<String>> {
        let record = self.record(id).ok_or(KanteiError::UnknownItem(id))?;
        if record.candidates.is_empty() {
            return Ok(self
                .catalog
                .base_names(record.category)
                .into_iter()
                .filter(|name| {
                    self.state.ledger.holder_of(name).is_none()
                        && self
                            .state
                            .ledger
                            .block_with_name(name)
                            .is_none_or(|b| b.has_member(id))
                })
                .map(String::from)
                .collect());
        }
        Ok(record
            .base_candidates()
            .into_iter()
            .map(String::from)
            .collect())
    }

    pub fn record(&self, id: ItemId) -> Option<&ItemRecord> {
        self.state.records.iter().find(|r| r.id == id)
    }

    pub fn find_by_label(&self, label: &str) -> Option<&ItemRecord> {
        let label = label.trim();
        self.state.records.iter().find(|r| r.label == label)
    }

    /// Id of the record with `label`.
    pub fn id_of(&self, label: &str) -> Result<ItemId> {
        self.find_by_label(label)
            .map(|r| r.id)
            .ok_or_else(|| KanteiError::UnknownLabel(label.trim().to_string()))
    }

    /// Live records in creation order.
    pub fn records(&self) -> &[ItemRecord] {
        &self.state.records
    }

    pub fn ledger(&self) -> &IdentityLedger {
        &self.state.ledger
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Report of the inference run triggered by the latest mutation.
    pub fn last_report(&self) -> &InferenceReport {
        &self.last_report
    }

    /// Face-value sell price for a buy price.
    pub fn sell_for(&self, buy_price: u32) -> Option<u32> {
        self.codec.sell_for(buy_price)
    }

    /// Face-value buy price for a sell price.
    pub fn buy_for(&self, sell_price: u32) -> Option<u32> {
        self.codec.buy_for(sell_price)
    }

    // Helpers

    /// Run inference on `next` and adopt it if it reaches a fixed point.
    fn commit(&mut self, mut next: TrackerState) -> Result<InferenceReport> {
        let engine = InferenceEngine::new(&self.catalog, &self.config.inference);
        let report = match engine.run(&mut next.records, &mut next.ledger) {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, "mutation rejected");
                return Err(err);
            }
        };

        self.state = next;
        self.last_report = report.clone();
        Ok(report)
    }

    /// Fill unset attributes of a confirmed record from the catalog and note
    /// on the confirmation which fields it filled.
    fn backfill_attributes(&self, record: &mut ItemRecord) {
        let Some(confirmation) = record.confirmed.clone() else {
            return;
        };
        let entries: Vec<_> = self
            .catalog
            .entries_named(record.category, &confirmation.name)
            .collect();
        let Some(first) = entries.first() else {
            return;
        };
        let mut filled = Backfill::default();

        if !record.attribute.is_set()
            && first.attribute != CategoryAttribute::None
            && entries.iter().all(|e| e.attribute == first.attribute)
        {
            record.attribute = first.attribute;
            filled.attribute = true;
        }

        if record.buy_price.is_none()
            && confirmation.variant == PriceVariant::Normal
            && entries.iter().all(|e| e.buy_price == first.buy_price)
        {
            record.buy_price = Some(first.buy_price);
            record.sell_price = Some(first.sell_price);
            filled.price = true;
        }

        if let Some(confirmation) = record.confirmed.as_mut() {
            confirmation.backfilled = filled;
        }
    }

    fn label_of(&self, id: ItemId) -> String {
        self.record(id)
            .map(|r| r.label.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
