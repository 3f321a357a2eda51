//! Pattern parsing module
//!
//! This module parses printf-style float patterns and reference-time layouts
//! into token lists. The entry points are `parse_float_pattern` and `parse_time_layout`.

mod combinators;
mod format;
mod tokens;

pub use format::{parse_float_pattern, parse_time_layout};

/// Largest width or precision a float directive may request
pub const MAX_WIDTH: usize = 1_000_000;
