//! Classifier tables: raw game-log codes to coarse categories.
//!
//! Two fixed mappings plus the tracked-bucket declarations:
//!
//! - pitch-type code → [`PitchCategory`] (unknown codes fall back to `Misc`)
//! - outcome-event string → [`OutcomeCategory`] (unknown events are faults)
//! - the pre-declared sequence and handedness buckets a run tracks
//!
//! All of this is static configuration: built once at process start, passed
//! by reference into the pipeline, never mutated afterwards.

use std::collections::HashMap;

use crate::domain::{Handedness, HandednessKey, OutcomeCategory, PitchCategory, SequenceKey};

/// Pitch-type code classification.
const PITCH_CLASSES: &[(&str, PitchCategory)] = &[
    ("FT", PitchCategory::Fast),
    ("FF", PitchCategory::Fast),
    ("FA", PitchCategory::Fast),
    ("FS", PitchCategory::Fast),
    ("CU", PitchCategory::Curve),
    ("CB", PitchCategory::Curve),
    ("SL", PitchCategory::Slide),
];

/// Outcome-event classification.
///
/// Treated as exhaustive over well-formed real data; an event string missing
/// from this table is a data bug, not a normal case.
const OUTCOME_CLASSES: &[(&str, OutcomeCategory)] = &[
    ("Home Run", OutcomeCategory::Hit),
    ("Triple", OutcomeCategory::Hit),
    ("Double", OutcomeCategory::Hit),
    ("Single", OutcomeCategory::Hit),
    ("Field Error", OutcomeCategory::Hit),
    ("Fielders Choice", OutcomeCategory::Hit),
    ("Groundout", OutcomeCategory::HitOut),
    ("Flyout", OutcomeCategory::HitOut),
    ("Bunt Groundout", OutcomeCategory::HitOut),
    ("Pop Out", OutcomeCategory::HitOut),
    ("Bunt Pop Out", OutcomeCategory::HitOut),
    ("Double Play", OutcomeCategory::HitOut),
    ("Grounded Into DP", OutcomeCategory::HitOut),
    ("Runner Out", OutcomeCategory::HitOut),
    ("Forceout", OutcomeCategory::HitOut),
    ("Sac Bunt", OutcomeCategory::HitOut),
    ("Sac Fly", OutcomeCategory::HitOut),
    ("Sacrifice Bunt DP", OutcomeCategory::HitOut),
    ("Sac Fly DP", OutcomeCategory::HitOut),
    ("Fielders Choice Out", OutcomeCategory::HitOut),
    ("Lineout", OutcomeCategory::HitOut),
    ("Bunt Lineout", OutcomeCategory::HitOut),
    ("Strikeout", OutcomeCategory::Strikeout),
    ("Strikeout - DP", OutcomeCategory::Strikeout),
    ("Batter Interference", OutcomeCategory::Strikeout),
    ("Walk", OutcomeCategory::Walk),
    ("Intent Walk", OutcomeCategory::Walk),
    ("Hit By Pitch", OutcomeCategory::Walk),
    ("Fan interference", OutcomeCategory::Walk),
    ("Catcher Interference", OutcomeCategory::Walk),
];

/// Immutable lookup tables for pitch and outcome classification.
#[derive(Debug, Clone)]
pub struct ClassifierTables {
    pitch: HashMap<&'static str, PitchCategory>,
    outcome: HashMap<&'static str, OutcomeCategory>,
}

impl ClassifierTables {
    /// Build the standard tables used against real PITCHf/x game logs.
    pub fn standard() -> Self {
        Self {
            pitch: PITCH_CLASSES.iter().copied().collect(),
            outcome: OUTCOME_CLASSES.iter().copied().collect(),
        }
    }

    /// Classify a raw pitch-type code.
    ///
    /// Unrecognized codes map to `Misc` rather than erroring, so the pitch
    /// still occupies its position in the trailing-sequence computation.
    pub fn pitch_category(&self, code: &str) -> PitchCategory {
        self.pitch.get(code).copied().unwrap_or(PitchCategory::Misc)
    }

    /// Classify a raw outcome-event string.
    ///
    /// Returns `None` for events absent from the table; the caller decides
    /// disposition (see `extract`).
    pub fn outcome_category(&self, event: &str) -> Option<OutcomeCategory> {
        self.outcome.get(event).copied()
    }
}

/// The pre-declared trailing-sequence buckets a run tracks.
///
/// Sequences outside this set are silently dropped from aggregation; that is
/// a deliberate filter, not an error.
pub fn tracked_sequences() -> Vec<SequenceKey> {
    use PitchCategory::*;
    vec![
        SequenceKey([Fast, Fast, Curve]),
        SequenceKey([Fast, Fast, Fast]),
        SequenceKey([Fast, Slide, Slide]),
        SequenceKey([Slide, Fast, Slide]),
    ]
}

/// The four fixed pitcher/batter handedness buckets.
pub fn handedness_buckets() -> Vec<HandednessKey> {
    use Handedness::*;
    vec![
        HandednessKey { pitcher: Left, batter: Left },
        HandednessKey { pitcher: Left, batter: Right },
        HandednessKey { pitcher: Right, batter: Left },
        HandednessKey { pitcher: Right, batter: Right },
    ]
}
