//! Formatted terminal output for the run summary.
//!
//! We keep formatting code in one place so:
//! - the ingest/aggregation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::IngestReport;
use crate::domain::RunConfig;

/// Format the run summary: file/at-bat statistics plus skip diagnostics.
///
/// Skipped files and at-bats are part of the report, not hidden warnings; a
/// run over dirty data should say exactly what it ignored.
pub fn format_run_summary(report: &IngestReport, config: &RunConfig) -> String {
    let mut out = String::new();

    out.push_str("=== pseq - Pitch Sequence Outcomes ===\n");
    out.push_str(&format!("Data: {}\n", config.data_dir.display()));
    out.push_str(&format!(
        "Files: discovered={} parsed={} skipped={}\n",
        report.files_discovered,
        report.files_parsed,
        report.skipped_files.len(),
    ));
    out.push_str(&format!(
        "At-bats: seen={} aggregated={} skipped={}\n",
        report.at_bats_seen,
        report.at_bats_aggregated,
        report.skipped_at_bats.len(),
    ));

    if !report.skipped_files.is_empty() {
        out.push_str("\nSkipped files:\n");
        for skip in &report.skipped_files {
            out.push_str(&format!("  {}: {}\n", skip.path.display(), skip.message));
        }
    }

    if !report.skipped_at_bats.is_empty() {
        out.push_str("\nSkipped at-bats:\n");
        for skip in &report.skipped_at_bats {
            out.push_str(&format!(
                "  {} (at-bat #{}): {}\n",
                skip.path.display(),
                skip.index,
                skip.message,
            ));
        }
    }

    out
}
