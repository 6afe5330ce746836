//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware embeds a small
//! TOML file and overlays it onto the defaults at boot.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ConfigError, ParseFailure};
pub use types::*;
