//! Bucketed outcome aggregation.
//!
//! One generic accumulate-only [`TallyBoard`] covers both aggregate views
//! (trailing pitch sequences and handedness pairings) instead of duplicating
//! the bookkeeping per key kind. Buckets are fixed up front; recording
//! against an untracked key is a no-op by design.

use crate::classify;
use crate::domain::{
    HandednessKey, OutcomeCategory, OutcomeRatio, OutcomeTally, SequenceKey,
};
use crate::extract::AtBatSummary;

/// A fixed set of buckets, each with its own zero-initialized outcome tally.
///
/// Bucket order is declaration order and is preserved through to
/// presentation. Counts only ever go up; there is no reset short of building
/// a new board.
#[derive(Debug, Clone)]
pub struct TallyBoard<K> {
    buckets: Vec<(K, OutcomeTally)>,
}

impl<K: PartialEq> TallyBoard<K> {
    /// Build a board over the given tracked keys, all tallies zeroed.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            buckets: keys
                .into_iter()
                .map(|k| (k, OutcomeTally::default()))
                .collect(),
        }
    }

    /// Record one at-bat against `key`.
    ///
    /// Returns `false` without side effects when the key is untracked; the
    /// caller uses this to keep sibling boards consistent.
    pub fn record(&mut self, key: &K, outcome: OutcomeCategory) -> bool {
        match self.buckets.iter_mut().find(|(k, _)| k == key) {
            Some((_, tally)) => {
                tally.record(outcome);
                true
            }
            None => false,
        }
    }

    /// Buckets in declaration order.
    pub fn buckets(&self) -> impl Iterator<Item = (&K, &OutcomeTally)> {
        self.buckets.iter().map(|(k, t)| (k, t))
    }

    /// Per-bucket percentage breakdowns, `None` for empty buckets.
    ///
    /// Each bucket's denominator is its own total; empty buckets are never
    /// divided, the caller must present them explicitly.
    pub fn ratios(&self) -> Vec<(&K, Option<OutcomeRatio>)> {
        self.buckets.iter().map(|(k, t)| (k, t.ratio())).collect()
    }

    /// Total at-bats recorded across all buckets.
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|(_, t)| t.total()).sum()
    }
}

/// Both aggregate views of one run, driven off the same at-bat traversal.
#[derive(Debug, Clone)]
pub struct Aggregates {
    pub sequences: TallyBoard<SequenceKey>,
    pub handedness: TallyBoard<HandednessKey>,
}

impl Aggregates {
    /// Boards over the standard tracked buckets, all zeroed.
    pub fn standard() -> Self {
        Self {
            sequences: TallyBoard::new(classify::tracked_sequences()),
            handedness: TallyBoard::new(classify::handedness_buckets()),
        }
    }

    /// Fold one classified at-bat into both views.
    ///
    /// The trailing-sequence key gates everything: an at-bat with fewer than
    /// three pitches, or whose trailing sequence is untracked, touches
    /// neither board. This shared inclusion filter keeps the sequence and
    /// handedness views consistent with each other.
    ///
    /// Returns whether the at-bat was aggregated.
    pub fn observe(&mut self, summary: &AtBatSummary) -> bool {
        let Some(key) = SequenceKey::trailing(&summary.pitches) else {
            return false;
        };
        if !self.sequences.record(&key, summary.outcome) {
            return false;
        }
        self.handedness.record(&summary.handedness, summary.outcome);
        true
    }
}
