//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the coarse classification enums (`PitchCategory`, `OutcomeCategory`,
//!   `Handedness`)
//! - aggregation bucket keys (`SequenceKey`, `HandednessKey`)
//! - per-bucket accumulators and derived shares (`OutcomeTally`,
//!   `OutcomeRatio`)
//! - run configuration (`RunConfig`)

pub mod types;

pub use types::*;
