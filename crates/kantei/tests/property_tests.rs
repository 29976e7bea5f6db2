//! Property-based tests for the inference engine.
//!
//! These tests drive a tracker with random sequences of observations and
//! verify that the deduced state keeps its invariants however the sequence
//! turns out.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **Uniqueness**: No name is confirmed to two records
//! 2. **Soundness**: Every candidate agrees with the record's attributes
//! 3. **Stability**: A settled state does not change when inferred again
//! 4. **Atomicity**: A rejected mutation leaves no trace
//! 5. **Monotonicity**: Without deletion or reset, confirmed singles and
//!    blocks are never lost
//!
//! # Running Property Tests
//!
//! ```bash
//! # Run all property tests
//! cargo test -p kantei --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p kantei --test property_tests
//! ```

use std::collections::BTreeSet;

use proptest::prelude::*;

use kantei::inference::{CandidateMatcher, InferenceEngine};
use kantei::{AttributeUpdate, Catalog, Category, InferenceConfig, ItemRecord, Tracker};

// =============================================================================
// Test Strategies
// =============================================================================

/// Grass buy prices: every face value plus its blessed and cursed variants,
/// and a few prices nothing matches.
fn grass_price() -> impl Strategy<Value = u32> {
    let catalog = Catalog::builtin();
    let mut prices: BTreeSet<u32> = BTreeSet::new();
    for entry in catalog.entries(Category::Grass) {
        prices.insert(entry.buy_price);
        prices.insert(entry.buy_price * 2);
        prices.insert(entry.buy_price * 87 / 100);
    }
    prices.extend([1, 61, 999]);
    prop::sample::select(prices.into_iter().collect::<Vec<_>>())
}

#[derive(Debug, Clone)]
enum Op {
    Price { slot: usize, buy: u32 },
    Confirm { slot: usize, name: usize },
    Delete { slot: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..8usize, grass_price()).prop_map(|(slot, buy)| Op::Price { slot, buy }),
        1 => (0..8usize, 0..27usize).prop_map(|(slot, name)| Op::Confirm { slot, name }),
        1 => (0..8usize).prop_map(|slot| Op::Delete { slot }),
    ]
}

/// Operations that never delete a record.
fn growing_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..10usize, grass_price()).prop_map(|(slot, buy)| Op::Price { slot, buy }),
        1 => (0..10usize, 0..27usize).prop_map(|(slot, name)| Op::Confirm { slot, name }),
    ]
}

/// Apply operations to a fresh tracker, ignoring rejected ones.
fn run_ops(ops: &[Op]) -> Tracker {
    let mut tracker = Tracker::new().unwrap();
    apply_ops(&mut tracker, ops);
    tracker
}

fn apply_ops(tracker: &mut Tracker, ops: &[Op]) {
    let names: Vec<String> = tracker
        .catalog()
        .base_names(Category::Grass)
        .into_iter()
        .map(String::from)
        .collect();

    for op in ops {
        match op {
            Op::Price { slot, buy } => {
                let id = slot_id(tracker, *slot);
                let _ = tracker.set_attributes(id, AttributeUpdate::new().with_buy_price(*buy));
            }
            Op::Confirm { slot, name } => {
                let id = slot_id(tracker, *slot);
                let _ = tracker.confirm_manually(id, &names[*name]);
            }
            Op::Delete { slot } => {
                if let Some(id) = tracker.find_by_label(&format!("g{}", slot)).map(|r| r.id) {
                    let _ = tracker.delete_item(id);
                }
            }
        }
    }
}

/// The record in `slot`, created on first use.
fn slot_id(tracker: &mut Tracker, slot: usize) -> kantei::ItemId {
    let label = format!("g{}", slot);
    match tracker.find_by_label(&label) {
        Some(record) => record.id,
        None => tracker.create_item(Category::Grass, &label).unwrap(),
    }
}

fn base_set(record: &ItemRecord) -> BTreeSet<String> {
    record.base_candidates().into_iter().map(String::from).collect()
}

// =============================================================================
// Invariant Tests
// =============================================================================

proptest! {
    #[test]
    fn confirmed_names_are_unique(ops in prop::collection::vec(op(), 0..30)) {
        let tracker = run_ops(&ops);
        let mut seen = BTreeSet::new();
        for record in tracker.records() {
            if let Some(name) = record.confirmed_name() {
                prop_assert!(seen.insert(name.to_string()), "{} confirmed twice", name);
            }
        }
    }

    #[test]
    fn candidates_agree_with_attributes(ops in prop::collection::vec(op(), 0..30)) {
        let tracker = run_ops(&ops);
        let config = InferenceConfig::default();
        let matcher = CandidateMatcher::new(tracker.catalog(), &config);

        for record in tracker.records() {
            let raw = matcher.match_attributes(record);
            if record.has_attributes() && record.confirmed.is_none() {
                prop_assert!(!record.candidates.is_empty());
            }
            if record.confirmed.is_none() {
                for candidate in &record.candidates {
                    prop_assert!(raw.contains(candidate));
                }
            } else if record.buy_price.is_some() {
                let name = record.confirmed_name().unwrap();
                prop_assert!(raw.iter().any(|c| c.base == name));
            }
        }
    }

    #[test]
    fn ledger_matches_records(ops in prop::collection::vec(op(), 0..30)) {
        let tracker = run_ops(&ops);
        let ledger = tracker.ledger();

        for (name, entry) in ledger.singles() {
            let holder = tracker.record(entry.holder);
            prop_assert!(holder.is_some());
            prop_assert_eq!(holder.unwrap().confirmed_name(), Some(name));
        }
        for block in ledger.blocks() {
            prop_assert_eq!(block.names.len(), block.members.len());
            for member in &block.members {
                let record = tracker.record(*member).unwrap();
                prop_assert!(base_set(record).is_subset(&block.names));
            }
        }
    }

    #[test]
    fn settled_state_is_stable(ops in prop::collection::vec(op(), 0..30)) {
        let tracker = run_ops(&ops);
        let mut records = tracker.records().to_vec();
        let mut ledger = tracker.ledger().clone();

        let engine = InferenceEngine::new(tracker.catalog(), &InferenceConfig::default());
        let report = engine.run(&mut records, &mut ledger).unwrap();

        prop_assert_eq!(report.passes, 1);
        prop_assert!(!report.is_productive());
        prop_assert_eq!(records.as_slice(), tracker.records());
    }

    #[test]
    fn ledger_only_grows_without_deletion(
        ops in prop::collection::vec(growing_op(), 1..25),
        extra in growing_op(),
    ) {
        let mut tracker = run_ops(&ops);
        let singles: Vec<(String, kantei::ItemId)> = tracker
            .ledger()
            .singles()
            .map(|(name, entry)| (name.to_string(), entry.holder))
            .collect();
        let blocks = tracker.ledger().blocks().to_vec();

        apply_ops(&mut tracker, std::slice::from_ref(&extra));

        for (name, holder) in singles {
            prop_assert_eq!(tracker.ledger().holder_of(&name), Some(holder));
        }
        for block in &blocks {
            prop_assert!(
                tracker.ledger().blocks().contains(block),
                "lost block {:?}",
                block.names
            );
        }
    }

    #[test]
    fn adding_prices_never_loses_confirmations(
        prices in prop::collection::vec((0..8usize, grass_price()), 1..20),
        extra in (8..10usize, grass_price()),
    ) {
        let ops: Vec<Op> = prices.iter().map(|&(slot, buy)| Op::Price { slot, buy }).collect();
        let mut tracker = run_ops(&ops);
        let before: Vec<(kantei::ItemId, String)> = tracker
            .records()
            .iter()
            .filter_map(|r| r.confirmed_name().map(|n| (r.id, n.to_string())))
            .collect();

        let id = slot_id(&mut tracker, extra.0);
        let _ = tracker.set_attributes(id, AttributeUpdate::new().with_buy_price(extra.1));

        for (id, name) in before {
            prop_assert_eq!(tracker.confirmed(id).unwrap(), Some(name.as_str()));
        }
    }

    #[test]
    fn rejected_mutation_leaves_state_unchanged(
        ops in prop::collection::vec(op(), 0..20),
        slot in 0..8usize,
        buy in grass_price(),
    ) {
        let mut tracker = run_ops(&ops);
        let id = slot_id(&mut tracker, slot);
        let records = tracker.records().to_vec();
        let ledger_len = tracker.ledger().len();

        if tracker.set_attributes(id, AttributeUpdate::new().with_buy_price(buy)).is_err() {
            prop_assert_eq!(tracker.records(), records.as_slice());
            prop_assert_eq!(tracker.ledger().len(), ledger_len);
        }
    }

    #[test]
    fn pass_count_within_bound(ops in prop::collection::vec(op(), 0..30)) {
        let tracker = run_ops(&ops);
        let limit = InferenceEngine::pass_limit(tracker.records().len());
        prop_assert!(tracker.last_report().passes <= limit);
    }
}
