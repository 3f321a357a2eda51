use winnow::Parser;
use winnow::combinator::repeat;
use winnow::error::{ContextError, ErrMode};

use crate::error::PatternError;
use crate::parser::MAX_WIDTH;
use crate::parser::combinators::{parse_float_token, parse_layout_token};
use crate::types::*;

fn syntax_error(e: ErrMode<ContextError>, remaining: &str) -> PatternError {
    PatternError::Syntax {
        message: format!("{e:?}"),
        remaining: remaining.to_string(),
    }
}

/// Parse a printf-style float pattern
///
/// # Arguments
/// * `input_str` - The pattern to parse, e.g. `%.2f%%`
///
/// # Returns
/// * `Result<FloatPattern, PatternError>` - The parsed pattern, or the reason it was rejected
///
/// # Examples
/// ```
/// use chart_value_format::parser::parse_float_pattern;
///
/// let pattern = parse_float_pattern("%.2f%%").unwrap();
/// assert_eq!(pattern.tokens.len(), 2);
/// ```
pub fn parse_float_pattern(input_str: &str) -> Result<FloatPattern, PatternError> {
    let mut input = input_str;

    let tokens: Vec<FloatToken> = repeat(0.., parse_float_token)
        .parse_next(&mut input)
        .map_err(|e| syntax_error(e, input))?;

    if !input.is_empty() {
        return Err(PatternError::Syntax {
            message: "trailing characters".to_string(),
            remaining: input.to_string(),
        });
    }

    for token in &tokens {
        if let FloatToken::Directive(directive) = token {
            for count in [directive.width, directive.precision].into_iter().flatten() {
                if count > MAX_WIDTH {
                    return Err(PatternError::WidthTooLarge(count));
                }
            }
        }
    }

    Ok(FloatPattern { tokens })
}

/// Parse a reference-time layout
///
/// The layout is written as `Mon Jan 2 15:04:05 MST 2006` would be displayed.
///
/// # Examples
/// ```
/// use chart_value_format::parser::parse_time_layout;
/// use chart_value_format::types::LayoutToken;
///
/// let layout = parse_time_layout("2006-01-02").unwrap();
/// assert_eq!(layout.tokens[0], LayoutToken::LongYear);
/// ```
pub fn parse_time_layout(input_str: &str) -> Result<TimeLayout, PatternError> {
    let mut input = input_str;

    let tokens: Vec<LayoutToken> = repeat(0.., parse_layout_token)
        .parse_next(&mut input)
        .map_err(|e| syntax_error(e, input))?;

    if !input.is_empty() {
        return Err(PatternError::Syntax {
            message: "trailing characters".to_string(),
            remaining: input.to_string(),
        });
    }

    Ok(TimeLayout { tokens })
}
