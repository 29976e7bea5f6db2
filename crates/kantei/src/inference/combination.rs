//! Combinatorial block detection.

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use crate::item::ItemId;

use super::ledger::Block;

/// Finds groups of records whose candidate sets form a closed bijective
/// block: `k` records sharing an identical set of `k` names.
pub struct CombinationDetector;

impl CombinationDetector {
    /// Detect blocks among per-record base-name candidate sets.
    ///
    /// Sets of size one or zero are ignored. Comparison is order-insensitive.
    /// Groups with more records than names cannot be satisfied and license
    /// nothing; they are logged and skipped.
    pub fn detect(candidate_sets: &[(ItemId, BTreeSet<String>)]) -> Vec<Block> {
        let mut groups: BTreeMap<&BTreeSet<String>, BTreeSet<ItemId>> = BTreeMap::new();
        for (id, names) in candidate_sets {
            if names.len() > 1 {
                groups.entry(names).or_default().insert(*id);
            }
        }

        let mut blocks = Vec::new();
        for (names, members) in groups {
            if members.len() == names.len() {
                blocks.push(Block::new(names.clone(), members));
            } else if members.len() > names.len() {
                warn!(
                    names = ?names,
                    records = members.len(),
                    "more records than candidate names; no block licensed"
                );
            }
        }
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detects_exact_block() {
        let sets = vec![
            (ItemId(1), set(&["a", "b"])),
            (ItemId(2), set(&["b", "a"])),
            (ItemId(3), set(&["a", "b", "c"])),
        ];
        let blocks = CombinationDetector::detect(&sets);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].names, set(&["a", "b"]));
        assert_eq!(blocks[0].members, [ItemId(1), ItemId(2)].into_iter().collect());
    }

    #[test]
    fn test_undersized_group_is_not_a_block() {
        let sets = vec![
            (ItemId(1), set(&["a", "b", "c"])),
            (ItemId(2), set(&["a", "b", "c"])),
        ];
        assert!(CombinationDetector::detect(&sets).is_empty());
    }

    #[test]
    fn test_oversized_group_is_not_a_block() {
        let sets = vec![
            (ItemId(1), set(&["a", "b"])),
            (ItemId(2), set(&["a", "b"])),
            (ItemId(3), set(&["a", "b"])),
        ];
        assert!(CombinationDetector::detect(&sets).is_empty());
    }

    #[test]
    fn test_singletons_ignored() {
        let sets = vec![(ItemId(1), set(&["a"]))];
        assert!(CombinationDetector::detect(&sets).is_empty());
    }

    #[test]
    fn test_several_blocks_at_once() {
        let sets = vec![
            (ItemId(1), set(&["a", "b"])),
            (ItemId(2), set(&["a", "b"])),
            (ItemId(3), set(&["x", "y", "z"])),
            (ItemId(4), set(&["x", "y", "z"])),
            (ItemId(5), set(&["x", "y", "z"])),
        ];
        let blocks = CombinationDetector::detect(&sets);
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().any(|b| b.len() == 3 && b.members.len() == 3));
    }
}
