//! Time layout rendering
//!
//! Renders a parsed reference-time layout against a calendar timestamp.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::locale::LocaleSettings;
use crate::types::{LayoutToken, OffsetStyle, TimeLayout};

/// Format a timestamp according to a parsed time layout
///
/// The timestamp is rendered in its own offset.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use chart_value_format::formatter::format_timestamp;
/// use chart_value_format::locale::LocaleSettings;
/// use chart_value_format::parser::parse_time_layout;
///
/// let epoch = DateTime::from_timestamp(0, 0).unwrap().fixed_offset();
/// let layout = parse_time_layout("2006-01-02").unwrap();
/// assert_eq!(format_timestamp(&epoch, &layout, &LocaleSettings::default()), "1970-01-01");
/// ```
pub fn format_timestamp(
    dt: &DateTime<FixedOffset>,
    layout: &TimeLayout,
    locale: &LocaleSettings,
) -> String {
    let mut result = String::new();

    for token in &layout.tokens {
        match token {
            LayoutToken::LiteralChar(c) => result.push(*c),
            LayoutToken::LongMonth => result.push_str(&locale.month_names[dt.month0() as usize]),
            LayoutToken::Month => {
                result.push_str(&locale.short_month_names[dt.month0() as usize])
            }
            LayoutToken::NumMonth => result.push_str(&dt.month().to_string()),
            LayoutToken::ZeroMonth => result.push_str(&format!("{:02}", dt.month())),
            LayoutToken::LongWeekDay => result.push_str(
                &locale.day_names[dt.weekday().num_days_from_sunday() as usize],
            ),
            LayoutToken::WeekDay => result.push_str(
                &locale.short_day_names[dt.weekday().num_days_from_sunday() as usize],
            ),
            LayoutToken::Day => result.push_str(&dt.day().to_string()),
            LayoutToken::UnderDay => result.push_str(&format!("{:>2}", dt.day())),
            LayoutToken::ZeroDay => result.push_str(&format!("{:02}", dt.day())),
            LayoutToken::UnderYearDay => result.push_str(&format!("{:>3}", dt.ordinal())),
            LayoutToken::ZeroYearDay => result.push_str(&format!("{:03}", dt.ordinal())),
            LayoutToken::Hour => result.push_str(&format!("{:02}", dt.hour())),
            LayoutToken::Hour12 => result.push_str(&hour12(dt.hour()).to_string()),
            LayoutToken::ZeroHour12 => result.push_str(&format!("{:02}", hour12(dt.hour()))),
            LayoutToken::Minute => result.push_str(&dt.minute().to_string()),
            LayoutToken::ZeroMinute => result.push_str(&format!("{:02}", dt.minute())),
            LayoutToken::Second => result.push_str(&dt.second().to_string()),
            LayoutToken::ZeroSecond => result.push_str(&format!("{:02}", dt.second())),
            LayoutToken::LongYear => {
                let year = dt.year();
                if year < 0 {
                    result.push_str(&format!("-{:04}", -year));
                } else {
                    result.push_str(&format!("{year:04}"));
                }
            }
            LayoutToken::Year => result.push_str(&format!("{:02}", dt.year().rem_euclid(100))),
            LayoutToken::PM => result.push_str(am_pm(dt.hour(), locale)),
            LayoutToken::LowerPM => result.push_str(&am_pm(dt.hour(), locale).to_lowercase()),
            LayoutToken::ZoneName => result.push_str(&zone_name(offset_seconds(dt))),
            LayoutToken::NumOffset(style) => {
                result.push_str(&numeric_offset(offset_seconds(dt), *style))
            }
            LayoutToken::IsoOffset(style) => {
                let offset = offset_seconds(dt);
                if offset == 0 {
                    result.push('Z');
                } else {
                    result.push_str(&numeric_offset(offset, *style));
                }
            }
            LayoutToken::FracSecondFixed { separator, digits } => {
                result.push(*separator);
                result.push_str(&fraction_digits(dt.nanosecond(), *digits));
            }
            LayoutToken::FracSecondTrimmed { separator, digits } => {
                let fraction = fraction_digits(dt.nanosecond(), *digits);
                let trimmed = fraction.trim_end_matches('0');
                if !trimmed.is_empty() {
                    result.push(*separator);
                    result.push_str(trimmed);
                }
            }
        }
    }

    result
}

fn hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn am_pm(hour: u32, locale: &LocaleSettings) -> &str {
    if hour >= 12 {
        &locale.ampm_markers[1]
    } else {
        &locale.ampm_markers[0]
    }
}

fn offset_seconds(dt: &DateTime<FixedOffset>) -> i32 {
    dt.offset().local_minus_utc()
}

/// Name for an offset that has no abbreviation: `UTC`, `+05` or `+0530`
fn zone_name(offset: i32) -> String {
    if offset == 0 {
        return "UTC".to_string();
    }
    let sign = if offset < 0 { '-' } else { '+' };
    let minutes = offset.abs() / 60;
    if minutes % 60 == 0 {
        format!("{sign}{:02}", minutes / 60)
    } else {
        format!("{sign}{:02}{:02}", minutes / 60, minutes % 60)
    }
}

fn numeric_offset(offset: i32, style: OffsetStyle) -> String {
    let sign = if offset < 0 { '-' } else { '+' };
    let abs = offset.abs();
    let (hours, minutes, seconds) = (abs / 3600, (abs / 60) % 60, abs % 60);
    match style {
        OffsetStyle::Hours => format!("{sign}{hours:02}"),
        OffsetStyle::HoursMinutes => format!("{sign}{hours:02}{minutes:02}"),
        OffsetStyle::HoursColonMinutes => format!("{sign}{hours:02}:{minutes:02}"),
        OffsetStyle::HoursMinutesSeconds => format!("{sign}{hours:02}{minutes:02}{seconds:02}"),
        OffsetStyle::HoursColonMinutesColonSeconds => {
            format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
        }
    }
}

/// Leading `digits` digits of the nanosecond field, at most nine
fn fraction_digits(nanosecond: u32, digits: usize) -> String {
    // Leap seconds carry an extra 1e9 in the nanosecond field
    let padded = format!("{:09}", nanosecond % 1_000_000_000);
    padded[..digits.min(9)].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour12_wraps_midnight_and_noon() {
        assert_eq!(hour12(0), 12);
        assert_eq!(hour12(12), 12);
        assert_eq!(hour12(15), 3);
    }

    #[test]
    fn test_zone_name_without_abbreviation() {
        assert_eq!(zone_name(0), "UTC");
        assert_eq!(zone_name(-7 * 3600), "-07");
        assert_eq!(zone_name(5 * 3600 + 30 * 60), "+0530");
    }

    #[test]
    fn test_numeric_offset_styles() {
        let offset = -(7 * 3600 + 30 * 60);
        assert_eq!(numeric_offset(offset, OffsetStyle::Hours), "-07");
        assert_eq!(numeric_offset(offset, OffsetStyle::HoursMinutes), "-0730");
        assert_eq!(numeric_offset(offset, OffsetStyle::HoursColonMinutes), "-07:30");
        assert_eq!(numeric_offset(0, OffsetStyle::HoursMinutesSeconds), "+000000");
    }

    #[test]
    fn test_fraction_digits_truncates() {
        assert_eq!(fraction_digits(123_456_789, 3), "123");
        assert_eq!(fraction_digits(5_000_000, 3), "005");
        assert_eq!(fraction_digits(1, 12), "000000001");
    }
}
