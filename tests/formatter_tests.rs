use chart_value_format::config::{DEFAULT_FLOAT_FORMAT, DEFAULT_PERCENT_VALUE_FORMAT};
use chart_value_format::formatter::{
    FloatFormatter, PercentFormatter, ValueFormatter, float_value_formatter,
    float_value_formatter_with_format, percent_value_formatter, time_value_formatter,
};
use chart_value_format::locale::LocaleSettings;
use chart_value_format::types::Value;
use chrono::DateTime;

// --- Float formatting ---
#[test]
fn test_float_two_decimals() {
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(3.14159), "%.2f"),
        "3.14"
    );
}

#[test]
fn test_float_default_pattern() {
    assert_eq!(float_value_formatter(&Value::Float64(1234.5678)), "1234.57");
    assert_eq!(float_value_formatter(&Value::Float64(-0.5)), "-0.50");
}

#[test]
fn test_integers_widen_to_float() {
    let pattern = DEFAULT_FLOAT_FORMAT;
    let expected = float_value_formatter_with_format(&Value::Float64(3.0), pattern);
    assert_eq!(expected, "3.00");
    assert_eq!(float_value_formatter_with_format(&Value::Int(3), pattern), expected);
    assert_eq!(float_value_formatter_with_format(&Value::Int64(3), pattern), expected);
    assert_eq!(float_value_formatter_with_format(&Value::Float32(3.0), pattern), expected);
}

#[test]
fn test_float_unsupported_shapes() {
    let epoch = DateTime::from_timestamp(0, 0).unwrap();
    for value in [
        Value::Int32(3),
        Value::Bool(false),
        Value::from("3.0"),
        Value::from(epoch),
    ] {
        assert_eq!(float_value_formatter(&value), "");
    }
}

#[test]
fn test_float_width_and_flags() {
    let value = Value::Float64(3.14159);
    assert_eq!(float_value_formatter_with_format(&value, "[%8.2f]"), "[    3.14]");
    assert_eq!(float_value_formatter_with_format(&value, "[%-8.2f]"), "[3.14    ]");
    assert_eq!(float_value_formatter_with_format(&value, "[%08.2f]"), "[00003.14]");
    assert_eq!(float_value_formatter_with_format(&value, "%+.1f"), "+3.1");
    assert_eq!(float_value_formatter_with_format(&value, "% .1f"), " 3.1");
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(-3.14159), "%08.2f"),
        "-0003.14"
    );
}

#[test]
fn test_float_default_precision_and_rounding() {
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(2.5), "%f"),
        "2.500000"
    );
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(2.675), "%.2f"),
        "2.67"
    );
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(2.51), "%.0f"),
        "3"
    );
}

#[test]
fn test_float_scientific() {
    let value = Value::Float64(123456.789);
    assert_eq!(float_value_formatter_with_format(&value, "%e"), "1.234568e+05");
    assert_eq!(float_value_formatter_with_format(&value, "%.2E"), "1.23E+05");
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(0.000123), "%.1e"),
        "1.2e-04"
    );
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(0.0), "%e"),
        "0.000000e+00"
    );
}

#[test]
fn test_float_general_and_default_verb() {
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(3.5), "%v"),
        "3.5"
    );
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(1e21), "%v"),
        "1e+21"
    );
    assert_eq!(
        float_value_formatter_with_format(&Value::Int64(42), "%g"),
        "42"
    );
}

#[test]
fn test_float_non_finite() {
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(f64::INFINITY), "%.2f"),
        "+Inf"
    );
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(f64::NEG_INFINITY), "%.2f"),
        "-Inf"
    );
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(f64::NAN), "%.2f"),
        "NaN"
    );
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(f64::NAN), "%+.2f"),
        "+NaN"
    );
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(f64::INFINITY), "%06.2f"),
        "  +Inf"
    );
}

#[test]
fn test_float_diagnostics() {
    let value = Value::Float64(3.5);
    assert_eq!(float_value_formatter_with_format(&value, "%d"), "%!d(float64=3.5)");
    assert_eq!(
        float_value_formatter_with_format(&value, "%.1f/%.1f"),
        "3.5/%!f(MISSING)"
    );
    assert_eq!(
        float_value_formatter_with_format(&value, "value"),
        "value%!(EXTRA float64=3.5)"
    );
    assert_eq!(float_value_formatter_with_format(&value, "%.1f%"), "3.5%!(NOVERB)");
    assert_eq!(
        float_value_formatter_with_format(&Value::Float32(0.25), "%s"),
        "%!s(float32=0.25)"
    );
}

#[test]
fn test_float_invalid_pattern_is_empty() {
    assert_eq!(
        float_value_formatter_with_format(&Value::Float64(1.0), "%9999999f"),
        ""
    );
    assert!(FloatFormatter::new("%9999999f").is_err());
}

#[test]
fn test_float_locale_decimal_point() {
    let formatter = FloatFormatter::new("%.2f")
        .unwrap()
        .with_locale(LocaleSettings::default().with_decimal_point(','));
    assert_eq!(formatter.format(&Value::Float64(1234.5)), "1234,50");
}

#[test]
fn test_float_formatter_try_format() {
    let formatter = FloatFormatter::new("%.1f").unwrap();
    assert_eq!(formatter.try_format(&Value::Int(7)), Some("7.0".to_string()));
    assert_eq!(formatter.try_format(&Value::Int32(7)), None);
}

// --- Percent formatting ---
#[test]
fn test_percent_scales_by_hundred() {
    assert_eq!(percent_value_formatter(&Value::Float64(0.256)), "25.60%");
    assert_eq!(percent_value_formatter(&Value::Float64(1.0)), "100.00%");
    assert_eq!(percent_value_formatter(&Value::Float64(-0.05)), "-5.00%");
}

#[test]
fn test_percent_matches_float_formatting() {
    assert_eq!(
        percent_value_formatter(&Value::Float64(0.5)),
        float_value_formatter_with_format(&Value::Float64(50.0), DEFAULT_PERCENT_VALUE_FORMAT)
    );
}

#[test]
fn test_percent_only_accepts_float64() {
    assert_eq!(percent_value_formatter(&Value::Int32(5)), "");
    assert_eq!(percent_value_formatter(&Value::Int(5)), "");
    assert_eq!(percent_value_formatter(&Value::Int64(5)), "");
    assert_eq!(percent_value_formatter(&Value::Float32(0.5)), "");
    assert_eq!(percent_value_formatter(&Value::from("50%")), "");
}

#[test]
fn test_percent_formatter_with_pattern() {
    let formatter = PercentFormatter::new("%.0f %%").unwrap();
    assert_eq!(formatter.format(&Value::Float64(0.126)), "13 %");
    assert_eq!(formatter.try_format(&Value::Int64(1)), None);
}

// --- Contract ---
#[test]
fn test_functions_are_value_formatters() {
    let formatters: Vec<Box<dyn ValueFormatter>> = vec![
        Box::new(float_value_formatter),
        Box::new(percent_value_formatter),
        Box::new(time_value_formatter),
        Box::new(|v: &Value| format!("<{}>", float_value_formatter(v))),
    ];
    let labels: Vec<String> = formatters
        .iter()
        .map(|f| f.format(&Value::Float64(0.5)))
        .collect();
    assert_eq!(labels[0], "0.50");
    assert_eq!(labels[1], "50.00%");
    // Half a nanosecond after the epoch, in the local zone; only the shape is checked
    assert_eq!(labels[2].len(), "1970-01-01".len());
    assert_eq!(labels[3], "<0.50>");
}

#[test]
fn test_formatting_does_not_mutate_input() {
    let value = Value::Float64(0.75);
    let before = value.clone();
    let _ = percent_value_formatter(&value);
    let _ = float_value_formatter(&value);
    assert_eq!(value, before);
}
