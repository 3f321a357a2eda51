//! Formatter configuration
//!
//! Default patterns, the time zone used for epoch-based values and the
//! locale are injected through `FormatterConfig` rather than read from
//! globals. A configuration can also be loaded from a TOML document.

use chrono::FixedOffset;
use tracing::debug;

use crate::error::{ConfigError, PatternError};
use crate::formatter::{FloatFormatter, PercentFormatter, TimeFormatter};
use crate::locale::LocaleSettings;
use crate::parser::{parse_float_pattern, parse_time_layout};
use crate::types::ZoneSetting;

/// Day-granularity time layout
pub const DEFAULT_DATE_FORMAT: &str = "2006-01-02";
/// Hour-granularity time layout
pub const DEFAULT_DATE_HOUR_FORMAT: &str = "01-02 3PM";
/// Minute-granularity time layout
pub const DEFAULT_DATE_MINUTE_FORMAT: &str = "01-02 3:04PM";
/// Float pattern
pub const DEFAULT_FLOAT_FORMAT: &str = "%.2f";
/// Percent pattern, applied after scaling by 100
pub const DEFAULT_PERCENT_VALUE_FORMAT: &str = "%.2f%%";

#[derive(Debug, Clone, PartialEq)]
pub struct FormatterConfig {
    pub date_format: String,
    pub date_hour_format: String,
    pub date_minute_format: String,
    pub float_format: String,
    pub percent_format: String,
    pub time_zone: ZoneSetting,
    pub locale: LocaleSettings,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            date_hour_format: DEFAULT_DATE_HOUR_FORMAT.to_string(),
            date_minute_format: DEFAULT_DATE_MINUTE_FORMAT.to_string(),
            float_format: DEFAULT_FLOAT_FORMAT.to_string(),
            percent_format: DEFAULT_PERCENT_VALUE_FORMAT.to_string(),
            time_zone: ZoneSetting::Local,
            locale: LocaleSettings::default(),
        }
    }
}

impl FormatterConfig {
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn with_date_hour_format(mut self, format: impl Into<String>) -> Self {
        self.date_hour_format = format.into();
        self
    }

    pub fn with_date_minute_format(mut self, format: impl Into<String>) -> Self {
        self.date_minute_format = format.into();
        self
    }

    pub fn with_float_format(mut self, format: impl Into<String>) -> Self {
        self.float_format = format.into();
        self
    }

    pub fn with_percent_format(mut self, format: impl Into<String>) -> Self {
        self.percent_format = format.into();
        self
    }

    pub fn with_time_zone(mut self, zone: impl Into<ZoneSetting>) -> Self {
        self.time_zone = zone.into();
        self
    }

    pub fn with_locale(mut self, locale: LocaleSettings) -> Self {
        self.locale = locale;
        self
    }

    /// Time formatter using the day layout
    pub fn time_formatter(&self) -> Result<TimeFormatter, PatternError> {
        self.time_formatter_with_format(&self.date_format)
    }

    /// Time formatter using the hour layout
    pub fn time_hour_formatter(&self) -> Result<TimeFormatter, PatternError> {
        self.time_formatter_with_format(&self.date_hour_format)
    }

    /// Time formatter using the minute layout
    pub fn time_minute_formatter(&self) -> Result<TimeFormatter, PatternError> {
        self.time_formatter_with_format(&self.date_minute_format)
    }

    /// Time formatter with an explicit layout, in this configuration's zone and locale
    pub fn time_formatter_with_format(&self, layout: &str) -> Result<TimeFormatter, PatternError> {
        Ok(TimeFormatter::new(layout, self.time_zone)?.with_locale(self.locale.clone()))
    }

    pub fn float_formatter(&self) -> Result<FloatFormatter, PatternError> {
        Ok(FloatFormatter::new(&self.float_format)?.with_locale(self.locale.clone()))
    }

    pub fn percent_formatter(&self) -> Result<PercentFormatter, PatternError> {
        Ok(PercentFormatter::new(&self.percent_format)?.with_locale(self.locale.clone()))
    }

    /// Load a configuration from TOML, starting from the defaults
    ///
    /// Every configured pattern is parsed so that mistakes surface here
    /// rather than as empty labels.
    ///
    /// # Examples
    /// ```
    /// use chart_value_format::config::FormatterConfig;
    ///
    /// let config = FormatterConfig::from_toml_str("float_format = \"%.1f\"").unwrap();
    /// assert_eq!(config.float_format, "%.1f");
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| ConfigError::Parse("Root is not a table".to_string()))?;

        let mut config = Self::default();

        let string_fields: [(&str, &mut String); 5] = [
            ("date_format", &mut config.date_format),
            ("date_hour_format", &mut config.date_hour_format),
            ("date_minute_format", &mut config.date_minute_format),
            ("float_format", &mut config.float_format),
            ("percent_format", &mut config.percent_format),
        ];
        for (key, field) in string_fields {
            if let Some(value) = table.get(key) {
                *field = value
                    .as_str()
                    .ok_or_else(|| ConfigError::InvalidValue {
                        key: key.to_string(),
                        reason: "not a string".to_string(),
                    })?
                    .to_string();
            }
        }

        if let Some(zone) = table.get("time_zone") {
            let zone = zone.as_str().ok_or_else(|| ConfigError::InvalidValue {
                key: "time_zone".to_string(),
                reason: "not a string".to_string(),
            })?;
            config.time_zone = parse_zone_setting(zone)?;
        }

        if let Some(locale) = table.get("locale") {
            config.locale.apply_toml(locale)?;
        }

        config.validate()?;
        debug!(
            time_zone = ?config.time_zone,
            date_format = %config.date_format,
            float_format = %config.float_format,
            "loaded formatter configuration"
        );
        Ok(config)
    }

    /// Check that every configured pattern parses
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layouts = [
            ("date_format", &self.date_format),
            ("date_hour_format", &self.date_hour_format),
            ("date_minute_format", &self.date_minute_format),
        ];
        for (key, layout) in layouts {
            parse_time_layout(layout).map_err(|source| ConfigError::Pattern {
                key: key.to_string(),
                source,
            })?;
        }

        let patterns = [
            ("float_format", &self.float_format),
            ("percent_format", &self.percent_format),
        ];
        for (key, pattern) in patterns {
            parse_float_pattern(pattern).map_err(|source| ConfigError::Pattern {
                key: key.to_string(),
                source,
            })?;
        }

        Ok(())
    }
}

/// Parse `local`, `utc`, or a `+hh:mm` / `-hh:mm` offset
pub fn parse_zone_setting(zone: &str) -> Result<ZoneSetting, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        key: "time_zone".to_string(),
        reason: format!("{reason}: '{zone}'"),
    };

    match zone.to_ascii_lowercase().as_str() {
        "local" => return Ok(ZoneSetting::Local),
        "utc" | "z" => return Ok(ZoneSetting::Utc),
        _ => {}
    }

    let (sign, rest) = match zone.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => return Err(invalid("expected local, utc, or a signed offset")),
    };
    let (hours, minutes) = rest
        .split_once(':')
        .ok_or_else(|| invalid("expected an offset of the form +hh:mm"))?;
    let hours: u8 = hours.parse().map_err(|_| invalid("invalid offset hours"))?;
    let minutes: u8 = minutes
        .parse()
        .map_err(|_| invalid("invalid offset minutes"))?;
    if minutes >= 60 {
        return Err(invalid("offset minutes out of range"));
    }

    FixedOffset::east_opt(sign * (i32::from(hours) * 3600 + i32::from(minutes) * 60))
        .map(ZoneSetting::Fixed)
        .ok_or_else(|| invalid("offset out of range"))
}
