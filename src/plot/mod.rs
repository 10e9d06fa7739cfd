//! ASCII chart rendering for terminal output.

pub mod bars;

pub use bars::*;
