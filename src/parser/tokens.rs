use winnow::combinator::{alt, not, peek, terminated};
use winnow::token::{literal, one_of, take_while};
use winnow::{ModalResult, Parser};

use crate::types::*;

// Month related parsers
pub fn parse_month_name(input: &mut &str) -> ModalResult<LayoutToken> {
    alt((
        literal("January").value(LayoutToken::LongMonth),
        literal("Jan").value(LayoutToken::Month),
    ))
    .parse_next(input)
}

// Weekday and zone name parsers, all starting with 'M'
pub fn parse_weekday_or_zone(input: &mut &str) -> ModalResult<LayoutToken> {
    alt((
        literal("Monday").value(LayoutToken::LongWeekDay),
        literal("Mon").value(LayoutToken::WeekDay),
        literal("MST").value(LayoutToken::ZoneName),
    ))
    .parse_next(input)
}

// Zero-padded parsers, all starting with '0'
pub fn parse_zero_padded(input: &mut &str) -> ModalResult<LayoutToken> {
    alt((
        literal("002").value(LayoutToken::ZeroYearDay),
        literal("01").value(LayoutToken::ZeroMonth),
        literal("02").value(LayoutToken::ZeroDay),
        literal("03").value(LayoutToken::ZeroHour12),
        literal("04").value(LayoutToken::ZeroMinute),
        literal("05").value(LayoutToken::ZeroSecond),
        literal("06").value(LayoutToken::Year),
    ))
    .parse_next(input)
}

// Space-padded day parsers, all starting with '_'
pub fn parse_under_padded(input: &mut &str) -> ModalResult<LayoutToken> {
    alt((
        // "_2006" is a literal underscore followed by the year
        terminated('_', peek(literal("2006"))).value(LayoutToken::LiteralChar('_')),
        literal("__2").value(LayoutToken::UnderYearDay),
        literal("_2").value(LayoutToken::UnderDay),
    ))
    .parse_next(input)
}

// Bare digit parsers
pub fn parse_bare_digit(input: &mut &str) -> ModalResult<LayoutToken> {
    alt((
        literal("2006").value(LayoutToken::LongYear),
        literal("15").value(LayoutToken::Hour),
        literal("1").value(LayoutToken::NumMonth),
        literal("2").value(LayoutToken::Day),
        literal("3").value(LayoutToken::Hour12),
        literal("4").value(LayoutToken::Minute),
        literal("5").value(LayoutToken::Second),
    ))
    .parse_next(input)
}

pub fn parse_am_pm(input: &mut &str) -> ModalResult<LayoutToken> {
    alt((
        literal("PM").value(LayoutToken::PM),
        literal("pm").value(LayoutToken::LowerPM),
    ))
    .parse_next(input)
}

fn offset_style(input: &mut &str) -> ModalResult<OffsetStyle> {
    alt((
        literal("07:00:00").value(OffsetStyle::HoursColonMinutesColonSeconds),
        literal("070000").value(OffsetStyle::HoursMinutesSeconds),
        literal("07:00").value(OffsetStyle::HoursColonMinutes),
        literal("0700").value(OffsetStyle::HoursMinutes),
        literal("07").value(OffsetStyle::Hours),
    ))
    .parse_next(input)
}

// Zone offset parsers
pub fn parse_offset(input: &mut &str) -> ModalResult<LayoutToken> {
    alt((
        ('-', offset_style).map(|(_, style)| LayoutToken::NumOffset(style)),
        ('Z', offset_style).map(|(_, style)| LayoutToken::IsoOffset(style)),
    ))
    .parse_next(input)
}

/// Parse fractional seconds such as `.000` or `,999`
///
/// The run of zeros or nines must not be followed by another digit.
pub fn parse_fractional_second(input: &mut &str) -> ModalResult<LayoutToken> {
    let run = alt((take_while(1.., '0'), take_while(1.., '9')));
    terminated((one_of(['.', ',']), run), not(one_of(|c: char| c.is_ascii_digit())))
        .map(|(separator, run): (char, &str)| {
            let digits = run.len();
            if run.starts_with('0') {
                LayoutToken::FracSecondFixed { separator, digits }
            } else {
                LayoutToken::FracSecondTrimmed { separator, digits }
            }
        })
        .parse_next(input)
}
