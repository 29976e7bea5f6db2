//! Fixed-point inference over the whole record collection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{KanteiError, Result};
use crate::item::{Confirmation, ConfirmationSource, ItemId, ItemRecord};

use super::combination::CombinationDetector;
use super::ledger::{Block, IdentityLedger};
use super::matcher::CandidateMatcher;

/// Configuration for the inference engine.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Match blessed (×2) and cursed (×0.87) prices as well as face value.
    pub variant_pricing: bool,
    /// Detect combinatorial blocks.
    pub detect_blocks: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            variant_pricing: true,
            detect_blocks: true,
        }
    }
}

impl InferenceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant_pricing(mut self, enabled: bool) -> Self {
        self.variant_pricing = enabled;
        self
    }

    pub fn with_block_detection(mut self, enabled: bool) -> Self {
        self.detect_blocks = enabled;
        self
    }
}

/// What one run of the fixed-point loop deduced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceReport {
    /// Passes executed, including the final unproductive one.
    pub passes: usize,
    /// Records newly confirmed by deduction, with the confirmed name.
    pub confirmed: Vec<(ItemId, String)>,
    /// Blocks newly registered.
    pub blocks: Vec<Block>,
}

impl InferenceReport {
    /// Whether the run added anything to the ledger.
    pub fn is_productive(&self) -> bool {
        !self.confirmed.is_empty() || !self.blocks.is_empty()
    }
}

/// Drives the candidate matcher, ledger and combination detector to a
/// fixed point.
///
/// [`InferenceEngine::run`] is the propagating state; it always returns in
/// a stable state or with an error, never part-way.
pub struct InferenceEngine<'a> {
    matcher: CandidateMatcher<'a>,
    detect_blocks: bool,
}

impl<'a> InferenceEngine<'a> {
    pub fn new(catalog: &'a Catalog, config: &InferenceConfig) -> Self {
        Self {
            matcher: CandidateMatcher::new(catalog, config),
            detect_blocks: config.detect_blocks,
        }
    }

    pub fn matcher(&self) -> &CandidateMatcher<'a> {
        &self.matcher
    }

    /// Upper bound on passes for `records` records.
    ///
    /// Every productive pass adds a ledger entry. There are at most one
    /// single per record, and block member sets form a laminar family with
    /// fewer sets than records; one more pass observes stability.
    pub fn pass_limit(records: usize) -> usize {
        2 * records + 1
    }

    /// Run passes until one leaves the ledger unchanged.
    pub fn run(
        &self,
        records: &mut [ItemRecord],
        ledger: &mut IdentityLedger,
    ) -> Result<InferenceReport> {
        let limit = Self::pass_limit(records.len());
        let mut report = InferenceReport::default();

        loop {
            debug_assert!(
                report.passes < limit,
                "inference exceeded {} passes",
                limit
            );
            if report.passes >= limit {
                return Err(KanteiError::NonTermination {
                    passes: report.passes,
                });
            }
            report.passes += 1;

            let productive = self.pass(records, ledger, &mut report)?;
            debug!(
                pass = report.passes,
                productive,
                ledger = ledger.len(),
                "inference pass"
            );
            if !productive {
                return Ok(report);
            }
        }
    }

    /// One pass: recompute candidates, confirm singletons, then detect
    /// blocks. Returns whether the ledger changed.
    pub fn pass(
        &self,
        records: &mut [ItemRecord],
        ledger: &mut IdentityLedger,
        report: &mut InferenceReport,
    ) -> Result<bool> {
        let start = ledger.generation();

        for record in records.iter_mut() {
            record.candidates = self.matcher.match_record(record, ledger);
        }

        let mut confirmed_any = false;
        for record in records.iter_mut() {
            if record.is_confirmed() {
                continue;
            }
            if record.has_attributes() && record.candidates.is_empty() {
                return Err(KanteiError::NoFreeIdentity {
                    label: record.label.clone(),
                });
            }

            let bases = record.base_candidates();
            if bases.len() != 1 {
                continue;
            }
            let Some(candidate) = record.candidates.first().cloned() else {
                continue;
            };

            ledger.confirm(&candidate.base, record.id, ConfirmationSource::Deduced)?;
            info!(item = %record.label, name = %candidate, "identified by deduction");
            report.confirmed.push((record.id, candidate.base.clone()));
            record.confirm(Confirmation::deduced(&candidate));
            confirmed_any = true;
        }

        // Candidate sets are stale once a single was confirmed; the next
        // pass recomputes them before looking for blocks.
        if self.detect_blocks && !confirmed_any {
            let sets: Vec<(ItemId, BTreeSet<String>)> = records
                .iter()
                .filter(|r| !r.is_confirmed())
                .map(|r| {
                    let names = r.base_candidates().into_iter().map(String::from).collect();
                    (r.id, names)
                })
                .collect();

            for block in CombinationDetector::detect(&sets) {
                if ledger.register_block(block.clone()) {
                    info!(names = ?block.names, members = block.members.len(), "block confirmed");
                    report.blocks.push(block);
                }
            }
        }

        Ok(ledger.generation() != start)
    }
}
