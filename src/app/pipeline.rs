//! The ingest-and-aggregate pipeline shared by the CLI front-end and tests.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! discover files -> parse each -> extract at-bats -> fold into tallies
//!
//! Files are processed strictly sequentially; the tally boards are the only
//! mutable state and only this pass touches them. Per-record problems
//! (unreadable or malformed files, unclassifiable at-bats) are absorbed
//! locally and reported as data; they never abort the run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::aggregate::Aggregates;
use crate::classify::ClassifierTables;
use crate::domain::RunConfig;
use crate::error::AppError;
use crate::extract;
use crate::io::{GameLog, discover_game_logs};

/// A file the run skipped, with why.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub message: String,
}

/// An at-bat the run skipped, with enough context to find it again.
#[derive(Debug, Clone)]
pub struct SkippedAtBat {
    pub path: PathBuf,
    /// Zero-based position in the file's at-bat traversal order.
    pub index: usize,
    pub message: String,
}

/// Ingest diagnostics for one run.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub files_discovered: usize,
    pub files_parsed: usize,
    pub at_bats_seen: usize,
    pub at_bats_aggregated: usize,
    pub skipped_files: Vec<SkippedFile>,
    pub skipped_at_bats: Vec<SkippedAtBat>,
}

impl IngestReport {
    fn skip_file(&mut self, path: &Path, message: String) {
        self.skipped_files.push(SkippedFile {
            path: path.to_path_buf(),
            message,
        });
    }

    fn skip_at_bat(&mut self, path: &Path, index: usize, message: String) {
        self.skipped_at_bats.push(SkippedAtBat {
            path: path.to_path_buf(),
            index,
            message,
        });
    }
}

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub aggregates: Aggregates,
    pub report: IngestReport,
}

/// Execute the full ingest pipeline over the configured data directory.
pub fn run_ingest(config: &RunConfig, tables: &ClassifierTables) -> Result<RunOutput, AppError> {
    let files = discover_game_logs(&config.data_dir)?;

    let mut aggregates = Aggregates::standard();
    let mut report = IngestReport {
        files_discovered: files.len(),
        ..IngestReport::default()
    };

    for path in &files {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                report.skip_file(path, format!("unreadable: {e}"));
                continue;
            }
        };
        let game = match GameLog::parse(&text) {
            Ok(game) => game,
            Err(e) => {
                // A malformed file contributes zero at-bats; the run goes on.
                report.skip_file(path, e.to_string());
                continue;
            }
        };
        report.files_parsed += 1;

        for (index, at_bat) in game.at_bats().iter().enumerate() {
            report.at_bats_seen += 1;
            match extract::extract_at_bat(at_bat, tables) {
                Ok(summary) => {
                    if aggregates.observe(&summary) {
                        report.at_bats_aggregated += 1;
                    }
                }
                // Policy: skip the at-bat and report it, never abort the run.
                Err(e) => report.skip_at_bat(path, index, e.to_string()),
            }
        }
    }

    Ok(RunOutput { aggregates, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OutcomeCategory, PitchCategory::*, SequenceKey};
    use std::fs;
    use std::path::Path;

    const STRIKEOUT_GAME: &str = r#"<game><inning><top>
        <atbat event="Strikeout" p_throws="R" stand="L">
          <pitch pitch_type="FF"/><pitch pitch_type="FF"/><pitch pitch_type="CU"/>
        </atbat>
    </top></inning></game>"#;

    const WALK_AND_GROUNDOUT_GAME: &str = r#"<game><inning><top>
        <atbat event="Walk" p_throws="L" stand="L">
          <pitch pitch_type="SL"/>
        </atbat>
        <atbat event="Groundout" p_throws="R" stand="R">
          <pitch pitch_type="FF"/><pitch pitch_type="SL"/><pitch pitch_type="FF"/>
          <pitch pitch_type="SL"/><pitch pitch_type="SL"/>
        </atbat>
    </top></inning></game>"#;

    fn run_on(dir: &Path) -> RunOutput {
        let config = RunConfig {
            data_dir: dir.to_path_buf(),
        };
        run_ingest(&config, &ClassifierTables::standard()).unwrap()
    }

    fn bucket_count(
        run: &RunOutput,
        key: SequenceKey,
        outcome: OutcomeCategory,
    ) -> u64 {
        run.aggregates
            .sequences
            .buckets()
            .find(|(k, _)| **k == key)
            .map(|(_, t)| t.get(outcome))
            .unwrap()
    }

    #[test]
    fn strikeout_scenario_hits_exactly_one_bucket() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("inning_all.xml"), STRIKEOUT_GAME).unwrap();

        let run = run_on(dir.path());
        assert_eq!(run.report.at_bats_seen, 1);
        assert_eq!(run.report.at_bats_aggregated, 1);
        assert_eq!(
            bucket_count(&run, SequenceKey([Fast, Fast, Curve]), OutcomeCategory::Strikeout),
            1
        );
        assert_eq!(run.aggregates.sequences.total(), 1);
    }

    #[test]
    fn short_and_truncated_at_bats_follow_the_rules() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("inning_all.xml"), WALK_AND_GROUNDOUT_GAME).unwrap();

        let run = run_on(dir.path());
        // The one-pitch walk contributes to no bucket; the five-pitch
        // groundout lands in (fast, slide, slide) via trailing truncation.
        assert_eq!(run.report.at_bats_seen, 2);
        assert_eq!(run.report.at_bats_aggregated, 1);
        assert_eq!(
            bucket_count(&run, SequenceKey([Fast, Slide, Slide]), OutcomeCategory::HitOut),
            1
        );
    }

    #[test]
    fn malformed_file_is_skipped_without_changing_results() {
        let valid_only = tempfile::tempdir().unwrap();
        fs::write(valid_only.path().join("inning_1.xml"), STRIKEOUT_GAME).unwrap();
        fs::write(valid_only.path().join("inning_2.xml"), WALK_AND_GROUNDOUT_GAME).unwrap();

        let with_bad = tempfile::tempdir().unwrap();
        fs::write(with_bad.path().join("inning_1.xml"), STRIKEOUT_GAME).unwrap();
        fs::write(with_bad.path().join("inning_2.xml"), WALK_AND_GROUNDOUT_GAME).unwrap();
        fs::write(with_bad.path().join("inning_bad.xml"), "<game><inning>").unwrap();

        let clean = run_on(valid_only.path());
        let dirty = run_on(with_bad.path());

        assert_eq!(dirty.report.skipped_files.len(), 1);
        assert_eq!(dirty.report.files_parsed, 2);
        for (clean_bucket, dirty_bucket) in clean
            .aggregates
            .sequences
            .buckets()
            .zip(dirty.aggregates.sequences.buckets())
        {
            assert_eq!(clean_bucket, dirty_bucket);
        }
    }

    #[test]
    fn unknown_outcome_skips_the_at_bat_and_reports_it() {
        let game = r#"<game><inning><top>
            <atbat event="Ejection" p_throws="R" stand="R">
              <pitch pitch_type="FF"/><pitch pitch_type="FF"/><pitch pitch_type="FF"/>
            </atbat>
            <atbat event="Strikeout" p_throws="R" stand="L">
              <pitch pitch_type="FF"/><pitch pitch_type="FF"/><pitch pitch_type="CU"/>
            </atbat>
        </top></inning></game>"#;
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("inning_all.xml"), game).unwrap();

        let run = run_on(dir.path());
        assert_eq!(run.report.skipped_at_bats.len(), 1);
        assert_eq!(run.report.skipped_at_bats[0].index, 0);
        assert!(run.report.skipped_at_bats[0].message.contains("Ejection"));
        // The rest of the file still aggregates.
        assert_eq!(run.report.at_bats_aggregated, 1);
    }

    #[test]
    fn handedness_view_tracks_the_sequence_filter() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("inning_all.xml"), WALK_AND_GROUNDOUT_GAME).unwrap();

        let run = run_on(dir.path());
        // Only the aggregated groundout (R pitcher, R batter) shows up.
        assert_eq!(run.aggregates.handedness.total(), 1);
    }

    #[test]
    fn missing_data_dir_fails_the_run() {
        let config = RunConfig {
            data_dir: PathBuf::from("/no/such/dir"),
        };
        let err = run_ingest(&config, &ClassifierTables::standard()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
