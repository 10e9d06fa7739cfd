//! Reporting utilities: formatted run summaries and skip diagnostics.

pub mod format;

pub use format::*;
