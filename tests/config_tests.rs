use chart_value_format::config::{
    DEFAULT_DATE_FORMAT, DEFAULT_PERCENT_VALUE_FORMAT, FormatterConfig, parse_zone_setting,
};
use chart_value_format::error::{ConfigError, PatternError};
use chart_value_format::formatter::ValueFormatter;
use chart_value_format::types::{Value, ZoneSetting};
use chrono::{FixedOffset, Utc};

#[test]
fn test_defaults() {
    let config = FormatterConfig::default();
    assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    assert_eq!(config.date_hour_format, "01-02 3PM");
    assert_eq!(config.date_minute_format, "01-02 3:04PM");
    assert_eq!(config.float_format, "%.2f");
    assert_eq!(config.percent_format, DEFAULT_PERCENT_VALUE_FORMAT);
    assert_eq!(config.time_zone, ZoneSetting::Local);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_injects_patterns() {
    let config = FormatterConfig::default()
        .with_float_format("%.1f")
        .with_percent_format("%.0f%%")
        .with_date_format("Jan 2")
        .with_time_zone(Utc);

    let float = config.float_formatter().unwrap();
    assert_eq!(float.format(&Value::Float64(2.26)), "2.3");

    let percent = config.percent_formatter().unwrap();
    assert_eq!(percent.format(&Value::Float64(0.42)), "42%");

    let time = config.time_formatter().unwrap();
    assert_eq!(time.format(&Value::Int64(0)), "Jan 1");
}

#[test]
fn test_granularity_formatters() {
    let config = FormatterConfig::default().with_time_zone(Utc);
    // 1970-01-02 13:45 UTC
    let nanos = (86_400 + 13 * 3600 + 45 * 60) * 1_000_000_000_i64;
    let value = Value::Int64(nanos);
    assert_eq!(config.time_formatter().unwrap().format(&value), "1970-01-02");
    assert_eq!(config.time_hour_formatter().unwrap().format(&value), "01-02 1PM");
    assert_eq!(
        config.time_minute_formatter().unwrap().format(&value),
        "01-02 1:45PM"
    );
    assert_eq!(
        config
            .time_formatter_with_format("15:04")
            .unwrap()
            .format(&value),
        "13:45"
    );
}

#[test]
fn test_from_toml() {
    let config = FormatterConfig::from_toml_str(
        r#"
        date_format = "02/01/2006"
        float_format = "%.3f"
        time_zone = "+02:00"

        [locale]
        decimal = ","
        ampm = ["vm", "nm"]
        "#,
    )
    .unwrap();

    assert_eq!(config.date_format, "02/01/2006");
    assert_eq!(config.float_format, "%.3f");
    assert_eq!(config.percent_format, DEFAULT_PERCENT_VALUE_FORMAT);
    assert_eq!(
        config.time_zone,
        ZoneSetting::Fixed(FixedOffset::east_opt(7200).unwrap())
    );
    assert_eq!(config.locale.decimal_point, ',');

    let float = config.float_formatter().unwrap();
    assert_eq!(float.format(&Value::Float64(1.5)), "1,500");

    let hour = config.time_hour_formatter().unwrap();
    assert_eq!(hour.format(&Value::Int64(0)), "01-01 2vm");
}

#[test]
fn test_from_toml_locale_names() {
    let config = FormatterConfig::from_toml_str(
        r#"
        time_zone = "utc"

        [locale]
        day_abbreviations = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]
        month_abbreviations = ["Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez"]
        "#,
    )
    .unwrap();

    let formatter = config.time_formatter_with_format("Mon 2 Jan").unwrap();
    // 1970-03-05 was a Thursday
    let nanos = 63 * 86_400 * 1_000_000_000_i64;
    assert_eq!(formatter.format(&Value::Int64(nanos)), "Do 5 Mär");
}

#[test]
fn test_from_toml_rejects_bad_input() {
    assert!(matches!(
        FormatterConfig::from_toml_str("float_format = "),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        FormatterConfig::from_toml_str("float_format = 3"),
        Err(ConfigError::InvalidValue { ref key, .. }) if key == "float_format"
    ));
    assert!(matches!(
        FormatterConfig::from_toml_str("time_zone = \"mars\""),
        Err(ConfigError::InvalidValue { ref key, .. }) if key == "time_zone"
    ));
    assert!(matches!(
        FormatterConfig::from_toml_str("[locale]\nampm = [\"am\"]"),
        Err(ConfigError::InvalidValue { ref key, .. }) if key == "locale.ampm"
    ));
    assert!(matches!(
        FormatterConfig::from_toml_str("[locale]\ndecimal = \",,\""),
        Err(ConfigError::InvalidValue { ref key, .. }) if key == "locale.decimal"
    ));
    assert_eq!(
        FormatterConfig::from_toml_str("percent_format = \"%2000000f\""),
        Err(ConfigError::Pattern {
            key: "percent_format".to_string(),
            source: PatternError::WidthTooLarge(2_000_000),
        })
    );
}

#[test]
fn test_zone_settings() {
    assert_eq!(parse_zone_setting("Local").unwrap(), ZoneSetting::Local);
    assert_eq!(parse_zone_setting("UTC").unwrap(), ZoneSetting::Utc);
    assert_eq!(
        parse_zone_setting("-05:30").unwrap(),
        ZoneSetting::Fixed(FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap())
    );
    assert!(parse_zone_setting("+24:00").is_err());
    assert!(parse_zone_setting("+05:75").is_err());
    assert!(parse_zone_setting("0530").is_err());
}

#[test]
fn test_error_messages() {
    let err = ConfigError::Pattern {
        key: "float_format".to_string(),
        source: PatternError::WidthTooLarge(2_000_000),
    };
    assert_eq!(
        err.to_string(),
        "invalid pattern for 'float_format': width or precision 2000000 exceeds the limit of 1000000"
    );
}
