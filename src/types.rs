//! Type definitions for value formatting
//!
//! This module defines the dynamically-shaped input value accepted by every
//! formatter, and the token types produced by parsing float patterns and
//! time layouts.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// A loosely-typed value handed to a formatter by chart axis code
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Calendar timestamp with its own UTC offset
    Timestamp(DateTime<FixedOffset>),
    /// 64-bit signed integer; nanoseconds since the epoch for time formatting
    Int64(i64),
    /// Platform-width integer
    Int(isize),
    /// 64-bit floating point
    Float64(f64),
    /// 32-bit floating point
    Float32(f32),
    /// 32-bit signed integer (accepted by no formatter)
    Int32(i32),
    /// Boolean (accepted by no formatter)
    Bool(bool),
    /// Text (accepted by no formatter)
    Text(String),
}

impl Value {
    /// Name of the runtime shape, as it appears in float pattern diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Timestamp(_) => "timestamp",
            Value::Int64(_) => "int64",
            Value::Int(_) => "int",
            Value::Float64(_) => "float64",
            Value::Float32(_) => "float32",
            Value::Int32(_) => "int32",
            Value::Bool(_) => "bool",
            Value::Text(_) => "string",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Value::Timestamp(v.fixed_offset())
    }
}

/// Naive timestamps are taken to be UTC
impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v.and_utc().fixed_offset())
    }
}

/// A 64-bit float together with the width it was supplied at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatArg {
    /// The value, widened to 64 bits
    pub value: f64,
    /// True when the caller supplied a 32-bit float
    pub is_f32: bool,
}

impl FloatArg {
    pub fn f64(value: f64) -> Self {
        Self {
            value,
            is_f32: false,
        }
    }

    pub fn f32(value: f32) -> Self {
        Self {
            value: value as f64,
            is_f32: true,
        }
    }

    pub fn type_name(&self) -> &'static str {
        if self.is_f32 { "float32" } else { "float64" }
    }
}

/// Flags that may precede the width of a float directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectiveFlags {
    /// `+`: always print a sign
    pub plus: bool,
    /// `-`: pad on the right
    pub minus: bool,
    /// ` `: leave a space for an elided plus sign
    pub space: bool,
    /// `0`: pad with leading zeros after the sign
    pub zero: bool,
    /// `#`: alternate form
    pub sharp: bool,
}

/// A single `%...` directive in a float pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub flags: DirectiveFlags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    /// The verb character, e.g. `f` in `%.2f`
    pub verb: char,
}

/// Represents a single token parsed from a float pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FloatToken {
    /// Run of literal text copied to the output
    Literal(String),
    /// `%%`
    Percent,
    /// A directive consuming one argument
    Directive(Directive),
    /// A `%` at the very end of the pattern
    NoVerb,
}

/// A parsed float pattern such as `%.2f%%`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatPattern {
    pub tokens: Vec<FloatToken>,
}

/// Numeric zone offset style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetStyle {
    /// `-07`
    Hours,
    /// `-0700`
    HoursMinutes,
    /// `-07:00`
    HoursColonMinutes,
    /// `-070000`
    HoursMinutesSeconds,
    /// `-07:00:00`
    HoursColonMinutesColonSeconds,
}

/// Represents a single chunk of a reference-time layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutToken {
    /// Literal character copied to the output
    LiteralChar(char),
    /// Full month name (January)
    LongMonth,
    /// Abbreviated month name (Jan)
    Month,
    /// Month number (1)
    NumMonth,
    /// Zero-padded month number (01)
    ZeroMonth,
    /// Full weekday name (Monday)
    LongWeekDay,
    /// Abbreviated weekday name (Mon)
    WeekDay,
    /// Day of month (2)
    Day,
    /// Space-padded day of month (_2)
    UnderDay,
    /// Zero-padded day of month (02)
    ZeroDay,
    /// Space-padded day of year (__2)
    UnderYearDay,
    /// Zero-padded day of year (002)
    ZeroYearDay,
    /// Hour 00-23 (15)
    Hour,
    /// Hour 1-12 (3)
    Hour12,
    /// Zero-padded hour 01-12 (03)
    ZeroHour12,
    /// Minute (4)
    Minute,
    /// Zero-padded minute (04)
    ZeroMinute,
    /// Second (5)
    Second,
    /// Zero-padded second (05)
    ZeroSecond,
    /// Four-digit year (2006)
    LongYear,
    /// Two-digit year (06)
    Year,
    /// Upper-case AM/PM marker (PM)
    PM,
    /// Lower-case am/pm marker (pm)
    LowerPM,
    /// Zone abbreviation (MST)
    ZoneName,
    /// Numeric offset (-0700 and friends)
    NumOffset(OffsetStyle),
    /// ISO 8601 offset printing `Z` at UTC (Z0700 and friends)
    IsoOffset(OffsetStyle),
    /// Fractional seconds with a fixed digit count (.000)
    FracSecondFixed { separator: char, digits: usize },
    /// Fractional seconds with trailing zeros trimmed (.999)
    FracSecondTrimmed { separator: char, digits: usize },
}

/// A parsed time layout such as `2006-01-02`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLayout {
    pub tokens: Vec<LayoutToken>,
}

/// Time zone used to place epoch-based values on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneSetting {
    /// The runtime's local zone rules
    #[default]
    Local,
    /// Coordinated Universal Time
    Utc,
    /// A fixed offset from UTC
    Fixed(FixedOffset),
}

impl From<Utc> for ZoneSetting {
    fn from(_: Utc) -> Self {
        ZoneSetting::Utc
    }
}

impl From<FixedOffset> for ZoneSetting {
    fn from(offset: FixedOffset) -> Self {
        ZoneSetting::Fixed(offset)
    }
}
