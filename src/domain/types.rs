//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during aggregation
//! - handed to presentation/chart layers without conversion

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Coarse pitch classification.
///
/// Raw pitch-type codes (e.g. `FF`, `CU`, `SL`) are mapped down to these four
/// categories; codes the classifier table does not know become `Misc` rather
/// than failing, so a pitch always keeps its position in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PitchCategory {
    Fast,
    Curve,
    Slide,
    Misc,
}

impl PitchCategory {
    /// Human-readable label for axis text and reports.
    pub fn label(self) -> &'static str {
        match self {
            PitchCategory::Fast => "fast",
            PitchCategory::Curve => "curve",
            PitchCategory::Slide => "slide",
            PitchCategory::Misc => "misc",
        }
    }
}

/// Coarse at-bat outcome classification.
///
/// Unlike pitch types, an outcome-event string the table does not know is a
/// data-integrity fault, not a `Misc` case; see `classify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeCategory {
    Hit,
    HitOut,
    Strikeout,
    Walk,
}

impl OutcomeCategory {
    /// All categories, in the fixed presentation order used everywhere
    /// (tally slots, chart series, legends).
    pub const ALL: [OutcomeCategory; 4] = [
        OutcomeCategory::Hit,
        OutcomeCategory::HitOut,
        OutcomeCategory::Strikeout,
        OutcomeCategory::Walk,
    ];

    /// Slot index into an [`OutcomeTally`] / [`OutcomeRatio`].
    pub fn index(self) -> usize {
        match self {
            OutcomeCategory::Hit => 0,
            OutcomeCategory::HitOut => 1,
            OutcomeCategory::Strikeout => 2,
            OutcomeCategory::Walk => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutcomeCategory::Hit => "hit",
            OutcomeCategory::HitOut => "hitout",
            OutcomeCategory::Strikeout => "strikeout",
            OutcomeCategory::Walk => "walk",
        }
    }
}

/// Which side a pitcher throws from or a batter stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// Parse the single-letter code used by the game-log schema.
    pub fn from_code(code: &str) -> Option<Handedness> {
        match code {
            "L" => Some(Handedness::Left),
            "R" => Some(Handedness::Right),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Handedness::Left => "L",
            Handedness::Right => "R",
        }
    }
}

/// A bucket key that can label itself for axis text.
pub trait BucketKey {
    fn label(&self) -> String;
}

/// The trailing three pitch categories of an at-bat, oldest first.
///
/// This is the aggregation key: only a fixed, pre-declared set of sequence
/// keys is tracked, and at-bats with fewer than three pitches produce no key
/// at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SequenceKey(pub [PitchCategory; 3]);

impl SequenceKey {
    /// Derive the key from a full per-at-bat pitch sequence.
    ///
    /// Takes the *last* three categories, preserving order; earlier pitches
    /// are discarded. Returns `None` when fewer than three pitches were
    /// thrown.
    pub fn trailing(pitches: &[PitchCategory]) -> Option<SequenceKey> {
        let tail = pitches.len().checked_sub(3)?;
        Some(SequenceKey([
            pitches[tail],
            pitches[tail + 1],
            pitches[tail + 2],
        ]))
    }
}

impl BucketKey for SequenceKey {
    fn label(&self) -> String {
        let [a, b, c] = self.0;
        format!("{}, {}, {}", a.label(), b.label(), c.label())
    }
}

/// Pitcher-throws / batter-stands pairing, four fixed buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandednessKey {
    pub pitcher: Handedness,
    pub batter: Handedness,
}

impl BucketKey for HandednessKey {
    fn label(&self) -> String {
        format!(
            "{} pitcher, {} batter",
            self.pitcher.label(),
            self.batter.label()
        )
    }
}

/// Per-bucket count of at-bats by outcome category.
///
/// Always carries exactly four slots, zero-initialized before any
/// accumulation; counts are monotonically non-decreasing for the duration of
/// a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    counts: [u64; 4],
}

impl OutcomeTally {
    pub fn get(&self, outcome: OutcomeCategory) -> u64 {
        self.counts[outcome.index()]
    }

    /// Record one at-bat with the given outcome.
    pub fn record(&mut self, outcome: OutcomeCategory) {
        self.counts[outcome.index()] += 1;
    }

    /// Total at-bats accumulated in this bucket.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Derive the percentage breakdown of this tally.
    ///
    /// Each share is `100.0 * count / total`, so the four shares sum to 100
    /// (up to floating-point error). A zero-total tally has no defined ratio;
    /// this returns `None` rather than dividing, and callers must handle the
    /// empty bucket explicitly.
    pub fn ratio(&self) -> Option<OutcomeRatio> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let mut shares = [0.0f64; 4];
        for (slot, &count) in shares.iter_mut().zip(self.counts.iter()) {
            *slot = 100.0 * count as f64 / total as f64;
        }
        Some(OutcomeRatio { shares })
    }
}

/// Per-bucket percentage breakdown derived from an [`OutcomeTally`].
///
/// Shares are in `[0.0, 100.0]`; each bucket's denominator is its own tally
/// total, never shared with other buckets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRatio {
    shares: [f64; 4],
}

impl OutcomeRatio {
    pub fn get(&self, outcome: OutcomeCategory) -> f64 {
        self.shares[outcome.index()]
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI arguments (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root directory searched recursively for game-log files.
    pub data_dir: PathBuf,
}
