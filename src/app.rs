//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the static classifier tables
//! - runs the ingest pipeline
//! - prints the run summary and the four comparison charts

use clap::Parser;

use crate::classify::ClassifierTables;
use crate::domain::RunConfig;
use crate::error::AppError;
use crate::{plot, present, report};

pub mod pipeline;

/// Bar area width for the terminal charts.
const CHART_WIDTH: usize = 40;

/// Entry point for the `pseq` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    let config = RunConfig {
        data_dir: cli.data_dir.unwrap_or_else(|| "./data/".into()),
    };

    let tables = ClassifierTables::standard();
    let run = pipeline::run_ingest(&config, &tables)?;

    println!("{}", report::format_run_summary(&run.report, &config));

    for chart in [
        present::counts_chart(
            "Absolute Comparison (Pitching Sequence)",
            &run.aggregates.sequences,
        ),
        present::counts_chart(
            "Absolute Comparison (Handedness)",
            &run.aggregates.handedness,
        ),
        present::ratios_chart(
            "Percentage Comparison (Pitching Sequence)",
            &run.aggregates.sequences,
        ),
        present::ratios_chart(
            "Percentage Comparison (Handedness)",
            &run.aggregates.handedness,
        ),
    ] {
        println!("{}", plot::render_bar_chart(&chart, CHART_WIDTH));
    }

    Ok(())
}
