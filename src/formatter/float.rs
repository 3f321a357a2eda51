//! Float pattern rendering
//!
//! Renders a parsed printf-style pattern against a single float argument.
//! Problems with the pattern are written into the output as `%!` diagnostics
//! instead of being reported as errors.

use crate::locale::LocaleSettings;
use crate::types::{Directive, FloatArg, FloatPattern, FloatToken};

const DEFAULT_PRECISION: usize = 6;

/// Format a float argument according to a parsed pattern
///
/// # Arguments
/// * `arg` - The value to substitute into the first directive
/// * `pattern` - The parsed float pattern
/// * `locale` - Locale settings supplying the decimal point
///
/// # Examples
/// ```
/// use chart_value_format::formatter::format_float;
/// use chart_value_format::locale::LocaleSettings;
/// use chart_value_format::parser::parse_float_pattern;
/// use chart_value_format::types::FloatArg;
///
/// let pattern = parse_float_pattern("%.2f").unwrap();
/// let result = format_float(FloatArg::f64(3.14159), &pattern, &LocaleSettings::default());
/// assert_eq!(result, "3.14");
/// ```
pub fn format_float(arg: FloatArg, pattern: &FloatPattern, locale: &LocaleSettings) -> String {
    let mut result = String::new();
    let mut consumed = false;

    for token in &pattern.tokens {
        match token {
            FloatToken::Literal(text) => result.push_str(text),
            FloatToken::Percent => result.push('%'),
            FloatToken::NoVerb => result.push_str("%!(NOVERB)"),
            FloatToken::Directive(directive) => {
                if consumed {
                    result.push_str(&format!("%!{}(MISSING)", directive.verb));
                } else {
                    consumed = true;
                    result.push_str(&format_directive(arg, directive, locale));
                }
            }
        }
    }

    if !consumed {
        result.push_str(&format!(
            "%!(EXTRA {}={})",
            arg.type_name(),
            default_repr(arg, locale)
        ));
    }

    result
}

/// The `%v` rendering of an argument, used inside diagnostics
fn default_repr(arg: FloatArg, locale: &LocaleSettings) -> String {
    let directive = Directive {
        flags: Default::default(),
        width: None,
        precision: None,
        verb: 'v',
    };
    format_directive(arg, &directive, locale)
}

fn format_directive(arg: FloatArg, directive: &Directive, locale: &LocaleSettings) -> String {
    let value = arg.value;
    let flags = directive.flags;
    let upper = directive.verb.is_ascii_uppercase();

    if !matches!(directive.verb, 'f' | 'F' | 'e' | 'E' | 'g' | 'G' | 'v') {
        return format!(
            "%!{}({}={})",
            directive.verb,
            arg.type_name(),
            default_repr(arg, locale)
        );
    }

    if !value.is_finite() {
        let text = if value.is_nan() {
            if flags.plus {
                "+NaN"
            } else if flags.space {
                " NaN"
            } else {
                "NaN"
            }
        } else if value < 0.0 {
            "-Inf"
        } else if flags.space && !flags.plus {
            " Inf"
        } else {
            "+Inf"
        };
        // Infinities and NaN never zero-pad
        return pad(String::new(), text.to_string(), directive.width, flags.minus, false);
    }

    let magnitude = value.abs();
    let mut body = match directive.verb {
        'f' | 'F' => format!(
            "{:.*}",
            directive.precision.unwrap_or(DEFAULT_PRECISION),
            magnitude
        ),
        'e' | 'E' => {
            let precision = directive.precision.unwrap_or(DEFAULT_PRECISION);
            let (digits, point) = rounded_digits(magnitude, precision + 1, false);
            scientific(&digits, point, precision)
        }
        _ => general(arg, directive.precision),
    };

    if flags.sharp {
        let significant = match directive.verb {
            'g' | 'G' | 'v' => directive.precision.unwrap_or(DEFAULT_PRECISION),
            _ => 0,
        };
        body = alternate_form(body, significant);
    }

    if upper {
        body = body.replace('e', "E");
    }
    if locale.decimal_point != '.' {
        body = body.replace('.', &locale.decimal_point.to_string());
    }

    let sign = if value.is_sign_negative() {
        "-"
    } else if flags.plus {
        "+"
    } else if flags.space {
        " "
    } else {
        ""
    };

    pad(
        sign.to_string(),
        body,
        directive.width,
        flags.minus,
        flags.zero,
    )
}

/// Apply width padding; zeros go between the sign and the digits
fn pad(sign: String, body: String, width: Option<usize>, left_justify: bool, zero: bool) -> String {
    let len = sign.chars().count() + body.chars().count();
    let fill = width.unwrap_or(0).saturating_sub(len);
    if fill == 0 {
        return sign + &body;
    }

    if left_justify {
        sign + &body + &" ".repeat(fill)
    } else if zero {
        sign + &"0".repeat(fill) + &body
    } else {
        " ".repeat(fill) + &sign + &body
    }
}

/// Split Rust's `{:e}` output into its digit string and decimal point position
///
/// `1.2345e3` becomes (`12345`, 4): the point sits after the fourth digit.
fn split_scientific(text: &str, trim: bool) -> (String, i32) {
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let mut digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    if trim {
        while digits.len() > 1 && digits.ends_with('0') {
            digits.pop();
        }
    }
    (digits, exponent + 1)
}

/// Shortest digits that round-trip at the argument's own width
fn shortest_digits(arg: FloatArg) -> (String, i32) {
    let text = if arg.is_f32 {
        format!("{:e}", arg.value.abs() as f32)
    } else {
        format!("{:e}", arg.value.abs())
    };
    split_scientific(&text, false)
}

/// Digits rounded to `significant` places
fn rounded_digits(magnitude: f64, significant: usize, trim: bool) -> (String, i32) {
    let text = format!("{:.*e}", significant.max(1) - 1, magnitude);
    split_scientific(&text, trim)
}

fn digit_at(digits: &[u8], index: i32) -> char {
    if index < 0 {
        return '0';
    }
    digits
        .get(index as usize)
        .map(|&d| d as char)
        .unwrap_or('0')
}

/// `d.ddde±xx` with `precision` digits after the point
fn scientific(digits: &str, point: i32, precision: usize) -> String {
    let bytes = digits.as_bytes();
    let mut result = String::new();
    result.push(digit_at(bytes, 0));
    if precision > 0 {
        result.push('.');
        for i in 1..=precision {
            result.push(digit_at(bytes, i as i32));
        }
    }

    // A zero mantissa always has a zero exponent
    let exponent = if bytes.iter().all(|&d| d == b'0') {
        0
    } else {
        point - 1
    };
    result.push('e');
    result.push(if exponent < 0 { '-' } else { '+' });
    result.push_str(&format!("{:02}", exponent.abs()));
    result
}

/// `ddd.ddd` with `fraction` digits after the point
fn fixed(digits: &str, point: i32, fraction: usize) -> String {
    let bytes = digits.as_bytes();
    let mut result = String::new();
    if point > 0 {
        for i in 0..point {
            result.push(digit_at(bytes, i));
        }
    } else {
        result.push('0');
    }
    if fraction > 0 {
        result.push('.');
        for i in 0..fraction {
            result.push(digit_at(bytes, point + i as i32));
        }
    }
    result
}

/// `%g`: scientific for large or small exponents, fixed otherwise
fn general(arg: FloatArg, precision: Option<usize>) -> String {
    let (digits, point, mut prec, shortest) = match precision {
        None => {
            let (digits, point) = shortest_digits(arg);
            let len = digits.len();
            (digits, point, len, true)
        }
        Some(p) => {
            let p = p.max(1);
            let (digits, point) = rounded_digits(arg.value.abs(), p, true);
            (digits, point, p, false)
        }
    };
    let count = digits.len();
    let point_pos = point.max(0) as usize;

    let mut eprec = prec;
    if eprec > count && count >= point_pos {
        eprec = count;
    }
    if shortest {
        eprec = DEFAULT_PRECISION;
    }

    let exponent = point - 1;
    if exponent < -4 || exponent >= eprec as i32 {
        if prec > count {
            prec = count;
        }
        return scientific(&digits, point, prec - 1);
    }

    if prec as i32 > point {
        prec = count;
    }
    fixed(&digits, point, (prec as i32 - point).max(0) as usize)
}

/// The `#` flag: force a decimal point and pad `%g` to its significant digits
fn alternate_form(body: String, significant: usize) -> String {
    let (number, tail) = match body.find('e') {
        Some(idx) => body.split_at(idx),
        None => (body.as_str(), ""),
    };

    let mut digits = significant as i64;
    let mut saw_nonzero = false;
    let has_point = number.contains('.');
    for c in number.chars().filter(char::is_ascii_digit) {
        if c != '0' {
            saw_nonzero = true;
        }
        if saw_nonzero {
            digits -= 1;
        }
    }

    let mut result = number.to_string();
    if !has_point {
        if number == "0" {
            digits -= 1;
        }
        result.push('.');
    }
    while digits > 0 {
        result.push('0');
        digits -= 1;
    }
    result.push_str(tail);
    result
}
