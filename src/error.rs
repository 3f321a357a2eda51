//! Error types
//!
//! Formatting itself never fails; these errors surface only when a pattern
//! is parsed ahead of time or a configuration is loaded.

use thiserror::Error;

/// A float pattern or time layout that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("width or precision {0} exceeds the limit of {max}", max = crate::parser::MAX_WIDTH)]
    WidthTooLarge(usize),
    #[error("parse error: {message} at remaining input '{remaining}'")]
    Syntax { message: String, remaining: String },
}

/// An error while loading a `FormatterConfig`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("error parsing configuration: {0}")]
    Parse(String),
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
    #[error("invalid pattern for '{key}': {source}")]
    Pattern {
        key: String,
        #[source]
        source: PatternError,
    },
}
