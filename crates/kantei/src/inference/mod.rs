//! Inference engine for narrowing item identities.
//!
//! Each run recomputes every record's candidates against the ledger,
//! confirms records left with a single candidate, registers combinatorial
//! blocks, and repeats until a pass adds nothing to the ledger.

mod combination;
mod engine;
mod ledger;
mod matcher;

pub use combination::CombinationDetector;
pub use engine::{InferenceConfig, InferenceEngine, InferenceReport};
pub use ledger::{Block, IdentityLedger, SingleEntry};
pub use matcher::CandidateMatcher;
