//! Locale support for value formatting
//!
//! This module holds the month names, weekday names, AM/PM markers and
//! decimal point used when rendering time layouts and float patterns, and
//! reads overrides for them from a TOML table.

use crate::error::ConfigError;

/// Locale-specific names and separators
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    pub decimal_point: char,
    /// AM and PM markers, in that order
    pub ampm_markers: [String; 2],
    pub month_names: [String; 12],
    pub short_month_names: [String; 12],
    /// Weekday names starting from Sunday
    pub day_names: [String; 7],
    /// Abbreviated weekday names starting from Sunday
    pub short_day_names: [String; 7],
}

fn owned<const N: usize>(names: [&str; N]) -> [String; N] {
    names.map(str::to_string)
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            decimal_point: '.',
            ampm_markers: owned(["AM", "PM"]),
            month_names: owned([
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            short_month_names: owned([
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            day_names: owned([
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            short_day_names: owned(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
        }
    }
}

impl LocaleSettings {
    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    pub fn with_ampm_markers(mut self, markers: [&str; 2]) -> Self {
        self.ampm_markers = owned(markers);
        self
    }

    pub fn with_month_names(mut self, names: [&str; 12]) -> Self {
        self.month_names = owned(names);
        self
    }

    pub fn with_short_month_names(mut self, names: [&str; 12]) -> Self {
        self.short_month_names = owned(names);
        self
    }

    pub fn with_day_names(mut self, names: [&str; 7]) -> Self {
        self.day_names = owned(names);
        self
    }

    pub fn with_short_day_names(mut self, names: [&str; 7]) -> Self {
        self.short_day_names = owned(names);
        self
    }

    /// Apply the overrides found in a `[locale]` TOML table
    ///
    /// Keys that are absent keep their current value.
    pub fn apply_toml(&mut self, value: &toml::Value) -> Result<(), ConfigError> {
        let table = value.as_table().ok_or_else(|| invalid("locale", "not a table"))?;

        if let Some(decimal) = table.get("decimal") {
            let decimal = decimal
                .as_str()
                .ok_or_else(|| invalid("locale.decimal", "not a string"))?;
            let mut chars = decimal.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => self.decimal_point = c,
                _ => return Err(invalid("locale.decimal", "expected a single character")),
            }
        }

        if let Some(ampm) = table.get("ampm") {
            self.ampm_markers = string_array("locale.ampm", ampm)?;
        }
        if let Some(months) = table.get("month_names") {
            self.month_names = string_array("locale.month_names", months)?;
        }
        if let Some(months) = table.get("month_abbreviations") {
            self.short_month_names = string_array("locale.month_abbreviations", months)?;
        }
        if let Some(days) = table.get("day_names") {
            self.day_names = string_array("locale.day_names", days)?;
        }
        if let Some(days) = table.get("day_abbreviations") {
            self.short_day_names = string_array("locale.day_abbreviations", days)?;
        }

        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// Read a TOML array of exactly `N` strings
fn string_array<const N: usize>(key: &str, value: &toml::Value) -> Result<[String; N], ConfigError> {
    let items = value
        .as_array()
        .ok_or_else(|| invalid(key, "not an array"))?;

    let names = items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect::<Option<Vec<String>>>()
        .ok_or_else(|| invalid(key, "array contains a non-string entry"))?;

    let len = names.len();
    names
        .try_into()
        .map_err(|_| invalid(key, &format!("expected {N} entries, found {len}")))
}
