//! Configuration types
//!
//! Board-agnostic configuration structures, plus the parser for the
//! `doorwatch.toml` subset embedded in the firmware.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
