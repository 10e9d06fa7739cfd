//! At-bat extraction: typed nodes → classified summaries.
//!
//! One at-bat in, one [`AtBatSummary`] out (or a typed reason it could not be
//! classified). No aggregation happens here; the pipeline decides what to do
//! with the summary and with extraction errors.

use crate::classify::ClassifierTables;
use crate::domain::{Handedness, HandednessKey, OutcomeCategory, PitchCategory};
use crate::error::AtBatError;
use crate::io::AtBatNode;

/// Everything aggregation needs to know about one at-bat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtBatSummary {
    /// Every typed pitch, in thrown order, classified. Unknown codes are
    /// `Misc` so the sequence keeps its true length.
    pub pitches: Vec<PitchCategory>,
    pub outcome: OutcomeCategory,
    pub handedness: HandednessKey,
}

/// Classify one at-bat.
///
/// Errors are per-at-bat faults: an outcome event the table does not know, or
/// a missing/unrecognized required attribute. They never describe the file as
/// a whole.
pub fn extract_at_bat(
    at_bat: &AtBatNode<'_>,
    tables: &ClassifierTables,
) -> Result<AtBatSummary, AtBatError> {
    let pitches = at_bat
        .pitch_type_codes()
        .into_iter()
        .map(|code| tables.pitch_category(code))
        .collect();

    let event = at_bat
        .event()
        .ok_or(AtBatError::MissingAttribute { name: "event" })?;
    let outcome = tables
        .outcome_category(event)
        .ok_or_else(|| AtBatError::UnknownOutcomeEvent {
            event: event.to_string(),
        })?;

    let handedness = HandednessKey {
        pitcher: required_handedness(at_bat.pitcher_throws(), "p_throws")?,
        batter: required_handedness(at_bat.batter_stands(), "stand")?,
    };

    Ok(AtBatSummary {
        pitches,
        outcome,
        handedness,
    })
}

fn required_handedness(
    raw: Option<&str>,
    name: &'static str,
) -> Result<Handedness, AtBatError> {
    let code = raw.ok_or(AtBatError::MissingAttribute { name })?;
    Handedness::from_code(code).ok_or_else(|| AtBatError::UnknownHandedness {
        value: code.to_string(),
    })
}
