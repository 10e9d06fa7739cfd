//! Input helpers.
//!
//! - recursive game-log discovery (`discover`)
//! - XML document parsing + typed node accessors (`parse`)

pub mod discover;
pub mod parse;

pub use discover::*;
pub use parse::*;
