//! Identity ledger: identities already confirmed to a single record, and
//! confirmed combinatorial blocks.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{KanteiError, Result};
use crate::item::{ConfirmationSource, ItemId};

/// A base name confirmed to exactly one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleEntry {
    pub holder: ItemId,
    pub source: ConfirmationSource,
}

/// A group of records whose candidates are jointly confined to exactly as
/// many names as there are records.
///
/// Which record holds which name is undetermined; the block only licenses
/// removing its names from every other record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Block {
    pub names: BTreeSet<String>,
    pub members: BTreeSet<ItemId>,
}

impl Block {
    pub fn new(names: BTreeSet<String>, members: BTreeSet<ItemId>) -> Self {
        Self { names, members }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn has_member(&self, id: ItemId) -> bool {
        self.members.contains(&id)
    }
}

/// Record of confirmed singles and blocks.
///
/// Within one inference run the ledger only grows. Entries are removed only
/// by deleting the record they depend on or by an explicit reset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityLedger {
    singles: IndexMap<String, SingleEntry>,
    blocks: Vec<Block>,
    #[serde(skip)]
    generation: u64,
}

impl IdentityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirm `name` to `holder`.
    ///
    /// Returns `Ok(true)` when the entry is new and `Ok(false)` when the same
    /// holder already had it. A different holder is a contradiction.
    pub fn confirm(
        &mut self,
        name: &str,
        holder: ItemId,
        source: ConfirmationSource,
    ) -> Result<bool> {
        if let Some(existing) = self.singles.get(name) {
            if existing.holder == holder {
                return Ok(false);
            }
            return Err(KanteiError::Contradiction(format!(
                "'{}' confirmed to both {} and {}",
                name, existing.holder, holder
            )));
        }

        self.singles
            .insert(name.to_string(), SingleEntry { holder, source });
        self.generation += 1;
        Ok(true)
    }

    pub fn is_confirmed(&self, name: &str) -> bool {
        self.singles.contains_key(name)
    }

    /// The record holding a confirmed name.
    pub fn holder_of(&self, name: &str) -> Option<ItemId> {
        self.singles.get(name).map(|entry| entry.holder)
    }

    /// Confirmed singles in confirmation order.
    pub fn singles(&self) -> impl Iterator<Item = (&str, &SingleEntry)> {
        self.singles.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Register a block. Idempotent on the name set.
    pub fn register_block(&mut self, block: Block) -> bool {
        if self.is_blocked(&block.names) {
            return false;
        }
        self.blocks.push(block);
        self.generation += 1;
        true
    }

    /// Whether exactly this name set is a registered block.
    pub fn is_blocked(&self, names: &BTreeSet<String>) -> bool {
        self.blocks.iter().any(|b| &b.names == names)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Blocks that `id` is a member of.
    pub fn blocks_of(&self, id: ItemId) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(move |b| b.has_member(id))
    }

    /// Block containing `name`, if any.
    pub fn block_with_name(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.contains_name(name))
    }

    /// Remove a confirmed single.
    pub fn forget(&mut self, name: &str) -> Option<SingleEntry> {
        let removed = self.singles.shift_remove(name);
        if removed.is_some() {
            self.generation += 1;
        }
        removed
    }

    /// Remove a block by its name set.
    pub fn forget_block(&mut self, names: &BTreeSet<String>) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| &b.names != names);
        let removed = self.blocks.len() != before;
        if removed {
            self.generation += 1;
        }
        removed
    }

    /// Roll back every entry that depended on `id`. Returns how many entries
    /// were removed.
    pub fn forget_holder(&mut self, id: ItemId) -> usize {
        let names: Vec<String> = self
            .singles
            .iter()
            .filter(|(_, entry)| entry.holder == id)
            .map(|(name, _)| name.clone())
            .collect();
        let blocks: Vec<BTreeSet<String>> =
            self.blocks_of(id).map(|b| b.names.clone()).collect();

        let mut removed = 0;
        for name in &names {
            if self.forget(name).is_some() {
                removed += 1;
            }
        }
        for block in &blocks {
            if self.forget_block(block) {
                removed += 1;
            }
        }
        removed
    }

    /// Drop every deduced entry, keeping manual confirmations.
    pub fn clear_deduced(&mut self) {
        let before = self.len();
        self.singles
            .retain(|_, entry| entry.source == ConfirmationSource::Manual);
        self.blocks.clear();
        if self.len() != before {
            self.generation += 1;
        }
    }

    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.generation += 1;
        }
        self.singles.clear();
        self.blocks.clear();
    }

    /// Change counter; differs between two observations iff the contents
    /// changed in between.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of singles plus blocks.
    pub fn len(&self) -> usize {
        self.singles.len() + self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.singles.is_empty() && self.blocks.is_empty()
    }
}
