use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded, repeat};
use winnow::token::{any, one_of, take_till};
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;
use crate::types::*;

/// Parse a single chunk of a time layout
///
/// Anything that is not a recognised chunk is passed through as a literal character.
pub fn parse_layout_token(input: &mut &str) -> ModalResult<LayoutToken> {
    alt((
        parse_month_name,
        parse_weekday_or_zone,
        parse_zero_padded,
        parse_under_padded,
        parse_bare_digit,
        parse_am_pm,
        parse_offset,
        parse_fractional_second,
        any.map(LayoutToken::LiteralChar),
    ))
    .parse_next(input)
}

/// Parse a run of literal text up to the next `%`
pub fn parse_literal_run(input: &mut &str) -> ModalResult<FloatToken> {
    take_till(1.., '%')
        .map(|text: &str| FloatToken::Literal(text.to_string()))
        .parse_next(input)
}

fn parse_flags(input: &mut &str) -> ModalResult<DirectiveFlags> {
    repeat(0.., one_of(['+', '-', ' ', '0', '#']))
        .fold(DirectiveFlags::default, |mut flags, c| {
            match c {
                '+' => flags.plus = true,
                '-' => flags.minus = true,
                ' ' => flags.space = true,
                '0' => flags.zero = true,
                _ => flags.sharp = true,
            }
            flags
        })
        .parse_next(input)
}

/// Parse a width or precision number; absurdly long runs saturate and are rejected later
fn parse_count(input: &mut &str) -> ModalResult<usize> {
    digit1
        .map(|digits: &str| digits.parse::<usize>().unwrap_or(usize::MAX))
        .parse_next(input)
}

/// Parse everything after the `%` of a directive
pub fn parse_directive_body(input: &mut &str) -> ModalResult<FloatToken> {
    (
        parse_flags,
        opt(parse_count),
        opt(preceded('.', opt(parse_count))),
        opt(any),
    )
        .map(|(flags, width, precision, verb)| match verb {
            Some(verb) => FloatToken::Directive(Directive {
                flags,
                width,
                // "%.f" means precision zero
                precision: precision.map(|digits| digits.unwrap_or(0)),
                verb,
            }),
            None => FloatToken::NoVerb,
        })
        .parse_next(input)
}

/// Parse a single token of a float pattern
pub fn parse_float_token(input: &mut &str) -> ModalResult<FloatToken> {
    alt((
        parse_literal_run,
        preceded(
            '%',
            alt(('%'.value(FloatToken::Percent), parse_directive_body)),
        ),
    ))
    .parse_next(input)
}
