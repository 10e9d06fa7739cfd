//! `pitch-sequences` library crate.
//!
//! The binary (`pseq`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future GUI/notebook front-ends)
//! - code stays easy to navigate as the project grows

pub mod aggregate;
pub mod app;
pub mod classify;
pub mod cli;
pub mod domain;
pub mod error;
pub mod extract;
pub mod io;
pub mod plot;
pub mod present;
pub mod report;
