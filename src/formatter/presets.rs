//! Ready-made formatters using the default patterns
//!
//! Each function parses its pattern on every call. Epoch-based time values
//! are placed in the runtime's local zone; use `FormatterConfig` to choose
//! another zone or locale.

use std::sync::OnceLock;

use tracing::warn;

use crate::config::{
    DEFAULT_DATE_FORMAT, DEFAULT_DATE_HOUR_FORMAT, DEFAULT_DATE_MINUTE_FORMAT,
    DEFAULT_FLOAT_FORMAT, DEFAULT_PERCENT_VALUE_FORMAT,
};
use crate::formatter::value_formatter::{render_float, render_percent, render_time};
use crate::locale::LocaleSettings;
use crate::parser::{parse_float_pattern, parse_time_layout};
use crate::types::{Value, ZoneSetting};

static DEFAULT_LOCALE: OnceLock<LocaleSettings> = OnceLock::new();

fn default_locale() -> &'static LocaleSettings {
    DEFAULT_LOCALE.get_or_init(LocaleSettings::default)
}

/// Format a timestamp with the day layout
pub fn time_value_formatter(value: &Value) -> String {
    time_value_formatter_with_format(value, DEFAULT_DATE_FORMAT)
}

/// Format a timestamp with the hour layout
pub fn time_hour_value_formatter(value: &Value) -> String {
    time_value_formatter_with_format(value, DEFAULT_DATE_HOUR_FORMAT)
}

/// Format a timestamp with the minute layout
pub fn time_minute_value_formatter(value: &Value) -> String {
    time_value_formatter_with_format(value, DEFAULT_DATE_MINUTE_FORMAT)
}

/// Format a timestamp with a given layout
///
/// Integers are nanoseconds since the epoch; floats are truncated to
/// nanoseconds first.
pub fn time_value_formatter_with_format(value: &Value, date_format: &str) -> String {
    match parse_time_layout(date_format) {
        Ok(layout) => {
            render_time(value, &layout, ZoneSetting::Local, default_locale()).unwrap_or_default()
        }
        Err(e) => {
            warn!(pattern = date_format, error = %e, "invalid time layout");
            String::new()
        }
    }
}

/// Format a float with the default float pattern
pub fn float_value_formatter(value: &Value) -> String {
    float_value_formatter_with_format(value, DEFAULT_FLOAT_FORMAT)
}

/// Format a ratio as a percentage
///
/// NOTE: the value is multiplied by 100.0 first, and only 64-bit floats are accepted.
pub fn percent_value_formatter(value: &Value) -> String {
    match parse_float_pattern(DEFAULT_PERCENT_VALUE_FORMAT) {
        Ok(pattern) => render_percent(value, &pattern, default_locale()).unwrap_or_default(),
        Err(e) => {
            warn!(pattern = DEFAULT_PERCENT_VALUE_FORMAT, error = %e, "invalid float pattern");
            String::new()
        }
    }
}

/// Format a float or integer with a given pattern
pub fn float_value_formatter_with_format(value: &Value, float_format: &str) -> String {
    match parse_float_pattern(float_format) {
        Ok(pattern) => render_float(value, &pattern, default_locale()).unwrap_or_default(),
        Err(e) => {
            warn!(pattern = float_format, error = %e, "invalid float pattern");
            String::new()
        }
    }
}
