use tracing::debug;

use crate::error::PatternError;
use crate::formatter::conversion::{nanos_from_float, timestamp_from_nanos};
use crate::formatter::float::format_float;
use crate::formatter::time::format_timestamp;
use crate::locale::LocaleSettings;
use crate::parser::{parse_float_pattern, parse_time_layout};
use crate::types::{FloatArg, FloatPattern, TimeLayout, Value, ZoneSetting};

/// Turns a value into an axis label
///
/// Formatting never fails: a value of a shape the formatter does not accept
/// produces an empty string. Any `Fn(&Value) -> String` is a formatter, so
/// plain functions such as `float_value_formatter` can be used directly.
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: &Value) -> String;
}

impl<F> ValueFormatter for F
where
    F: Fn(&Value) -> String + Send + Sync,
{
    fn format(&self, value: &Value) -> String {
        self(value)
    }
}

fn unsupported(value: &Value, kind: &'static str) -> Option<String> {
    debug!(value_type = value.type_name(), formatter = kind, "unsupported value shape");
    None
}

pub(crate) fn render_time(
    value: &Value,
    layout: &TimeLayout,
    zone: ZoneSetting,
    locale: &LocaleSettings,
) -> Option<String> {
    let dt = match value {
        Value::Timestamp(dt) => *dt,
        Value::Int64(nanos) => timestamp_from_nanos(*nanos, zone),
        Value::Float64(nanos) => timestamp_from_nanos(nanos_from_float(*nanos), zone),
        Value::Int(_) | Value::Float32(_) | Value::Int32(_) | Value::Bool(_) | Value::Text(_) => {
            return unsupported(value, "time");
        }
    };
    Some(format_timestamp(&dt, layout, locale))
}

pub(crate) fn render_float(
    value: &Value,
    pattern: &FloatPattern,
    locale: &LocaleSettings,
) -> Option<String> {
    let arg = match value {
        Value::Float64(v) => FloatArg::f64(*v),
        Value::Float32(v) => FloatArg::f32(*v),
        Value::Int(v) => FloatArg::f64(*v as f64),
        Value::Int64(v) => FloatArg::f64(*v as f64),
        Value::Timestamp(_) | Value::Int32(_) | Value::Bool(_) | Value::Text(_) => {
            return unsupported(value, "float");
        }
    };
    Some(format_float(arg, pattern, locale))
}

/// Only 64-bit floats are accepted; integers and 32-bit floats are not widened here
pub(crate) fn render_percent(
    value: &Value,
    pattern: &FloatPattern,
    locale: &LocaleSettings,
) -> Option<String> {
    match value {
        Value::Float64(v) => Some(format_float(FloatArg::f64(v * 100.0), pattern, locale)),
        Value::Timestamp(_)
        | Value::Int64(_)
        | Value::Int(_)
        | Value::Float32(_)
        | Value::Int32(_)
        | Value::Bool(_)
        | Value::Text(_) => unsupported(value, "percent"),
    }
}

/// Formats timestamps and epoch-nanosecond values with a time layout
#[derive(Debug, Clone, PartialEq)]
pub struct TimeFormatter {
    layout: TimeLayout,
    zone: ZoneSetting,
    locale: LocaleSettings,
}

impl TimeFormatter {
    /// Parse `layout` once for repeated use
    ///
    /// `zone` places integer and float nanosecond values on the calendar;
    /// timestamps keep their own offset.
    pub fn new(layout: &str, zone: impl Into<ZoneSetting>) -> Result<Self, PatternError> {
        Ok(Self {
            layout: parse_time_layout(layout)?,
            zone: zone.into(),
            locale: LocaleSettings::default(),
        })
    }

    pub fn with_locale(mut self, locale: LocaleSettings) -> Self {
        self.locale = locale;
        self
    }

    /// Like `format`, but `None` for a value shape this formatter does not accept
    pub fn try_format(&self, value: &Value) -> Option<String> {
        render_time(value, &self.layout, self.zone, &self.locale)
    }
}

impl ValueFormatter for TimeFormatter {
    fn format(&self, value: &Value) -> String {
        self.try_format(value).unwrap_or_default()
    }
}

/// Formats floats and integers with a printf-style pattern
#[derive(Debug, Clone, PartialEq)]
pub struct FloatFormatter {
    pattern: FloatPattern,
    locale: LocaleSettings,
}

impl FloatFormatter {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: parse_float_pattern(pattern)?,
            locale: LocaleSettings::default(),
        })
    }

    pub fn with_locale(mut self, locale: LocaleSettings) -> Self {
        self.locale = locale;
        self
    }

    pub fn try_format(&self, value: &Value) -> Option<String> {
        render_float(value, &self.pattern, &self.locale)
    }
}

impl ValueFormatter for FloatFormatter {
    fn format(&self, value: &Value) -> String {
        self.try_format(value).unwrap_or_default()
    }
}

/// Formats ratios as percentages, multiplying by 100 first
#[derive(Debug, Clone, PartialEq)]
pub struct PercentFormatter {
    pattern: FloatPattern,
    locale: LocaleSettings,
}

impl PercentFormatter {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: parse_float_pattern(pattern)?,
            locale: LocaleSettings::default(),
        })
    }

    pub fn with_locale(mut self, locale: LocaleSettings) -> Self {
        self.locale = locale;
        self
    }

    pub fn try_format(&self, value: &Value) -> Option<String> {
        render_percent(value, &self.pattern, &self.locale)
    }
}

impl ValueFormatter for PercentFormatter {
    fn format(&self, value: &Value) -> String {
        self.try_format(value).unwrap_or_default()
    }
}
