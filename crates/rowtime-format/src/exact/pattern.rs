//! Format string tokenizer.

use std::borrow::Cow;

use super::TimestampParseError;
use crate::culture::Culture;

const MAX_FRACTION_DIGITS: usize = 7;

const SORTABLE_PATTERN: &str = "yyyy'-'MM'-'dd'T'HH':'mm':'ss";
const UNIVERSAL_SORTABLE_PATTERN: &str = "yyyy'-'MM'-'dd HH':'mm':'ss'Z'";
const RFC1123_PATTERN: &str = "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'";

/// One element of a custom format string
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Number of `y` characters
    Year(usize),
    /// `M` or `MM`
    Month(usize),
    MonthName { abbreviated: bool },
    /// `d` or `dd`
    Day(usize),
    DayName { abbreviated: bool },
    Hour12(usize),
    Hour24(usize),
    Minute(usize),
    Second(usize),
    /// `f` or `F` run; `leading_dot` marks a `.` before an `F` run, which
    /// is skipped along with the digits when no fraction is present
    Fraction {
        digits: usize,
        optional: bool,
        leading_dot: bool,
    },
    Designator { first_char_only: bool },
    DateSeparator,
    TimeSeparator,
    Literal(String),
}

/// Expand a single-character standard format into a custom pattern
///
/// Custom formats pass through unchanged. The RFC 1123 pattern always reads
/// with invariant names, so the culture to parse with is returned alongside.
pub(crate) fn resolve<'a>(
    format: &'a str,
    culture: &'a Culture,
) -> Result<(Cow<'a, str>, &'a Culture), TimestampParseError> {
    let mut chars = format.chars();
    let (Some(specifier), None) = (chars.next(), chars.next()) else {
        if format.is_empty() {
            return Err(TimestampParseError::EmptyFormat);
        }
        return Ok((Cow::Borrowed(format), culture));
    };

    let pattern = match specifier {
        'd' => Cow::Borrowed(culture.short_date_pattern.as_str()),
        'D' => Cow::Borrowed(culture.long_date_pattern.as_str()),
        't' => Cow::Borrowed(culture.short_time_pattern.as_str()),
        'T' => Cow::Borrowed(culture.long_time_pattern.as_str()),
        'f' => Cow::Owned(format!(
            "{} {}",
            culture.long_date_pattern, culture.short_time_pattern
        )),
        'F' => Cow::Owned(format!(
            "{} {}",
            culture.long_date_pattern, culture.long_time_pattern
        )),
        'g' => Cow::Owned(format!(
            "{} {}",
            culture.short_date_pattern, culture.short_time_pattern
        )),
        'G' => Cow::Owned(format!(
            "{} {}",
            culture.short_date_pattern, culture.long_time_pattern
        )),
        'M' | 'm' => Cow::Borrowed(culture.month_day_pattern.as_str()),
        'Y' | 'y' => Cow::Borrowed(culture.year_month_pattern.as_str()),
        's' => Cow::Borrowed(SORTABLE_PATTERN),
        'u' => Cow::Borrowed(UNIVERSAL_SORTABLE_PATTERN),
        'R' | 'r' => return Ok((Cow::Borrowed(RFC1123_PATTERN), Culture::invariant())),
        other => return Err(TimestampParseError::UnsupportedSpecifier(other)),
    };

    Ok((pattern, culture))
}

/// Split a custom format string into tokens
pub(crate) fn tokenize(format: &str) -> Result<Vec<Token>, TimestampParseError> {
    let chars: Vec<char> = format.chars().collect();
    let invalid = |reason| TimestampParseError::InvalidFormat {
        format: format.to_string(),
        reason,
    };

    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&next| next == c).count();

        let consumed = match c {
            'y' => {
                tokens.push(Token::Year(run));
                run
            }
            'M' => {
                tokens.push(match run {
                    1 | 2 => Token::Month(run),
                    3 => Token::MonthName { abbreviated: true },
                    _ => Token::MonthName { abbreviated: false },
                });
                run
            }
            'd' => {
                tokens.push(match run {
                    1 | 2 => Token::Day(run),
                    3 => Token::DayName { abbreviated: true },
                    _ => Token::DayName { abbreviated: false },
                });
                run
            }
            'h' => {
                tokens.push(Token::Hour12(run.min(2)));
                run
            }
            'H' => {
                tokens.push(Token::Hour24(run.min(2)));
                run
            }
            'm' => {
                tokens.push(Token::Minute(run.min(2)));
                run
            }
            's' => {
                tokens.push(Token::Second(run.min(2)));
                run
            }
            'f' | 'F' => {
                if run > MAX_FRACTION_DIGITS {
                    return Err(invalid("more than seven fraction digits"));
                }
                tokens.push(Token::Fraction {
                    digits: run,
                    optional: c == 'F',
                    leading_dot: false,
                });
                run
            }
            '.' if chars.get(i + 1) == Some(&'F') => {
                let digits = chars[i + 1..].iter().take_while(|&&next| next == 'F').count();
                if digits > MAX_FRACTION_DIGITS {
                    return Err(invalid("more than seven fraction digits"));
                }
                tokens.push(Token::Fraction {
                    digits,
                    optional: true,
                    leading_dot: true,
                });
                1 + digits
            }
            't' => {
                tokens.push(Token::Designator {
                    first_char_only: run == 1,
                });
                run
            }
            '/' => {
                tokens.push(Token::DateSeparator);
                1
            }
            ':' => {
                tokens.push(Token::TimeSeparator);
                1
            }
            '\'' | '"' => {
                let (text, len) = quoted(&chars[i..]).ok_or_else(|| invalid("unterminated quote"))?;
                push_literal(&mut tokens, &text);
                len
            }
            '\\' => {
                let escaped = chars.get(i + 1).ok_or_else(|| invalid("trailing escape"))?;
                push_literal(&mut tokens, &escaped.to_string());
                2
            }
            '%' => match chars.get(i + 1) {
                None | Some('%') => return Err(invalid("misplaced '%'")),
                Some(_) => 1,
            },
            'z' | 'K' | 'g' => return Err(TimestampParseError::UnsupportedSpecifier(c)),
            _ => {
                push_literal(&mut tokens, &c.to_string());
                1
            }
        };

        i += consumed;
    }

    Ok(tokens)
}

/// Read a quoted literal starting at the opening quote
///
/// Returns the unescaped text and the number of characters consumed,
/// including both quotes.
fn quoted(chars: &[char]) -> Option<(String, usize)> {
    let quote = chars[0];
    let mut text = String::new();
    let mut i = 1;
    while let Some(&c) = chars.get(i) {
        if c == quote {
            return Some((text, i + 1));
        }
        if c == '\\' {
            i += 1;
            text.push(*chars.get(i)?);
        } else {
            text.push(c);
        }
        i += 1;
    }
    None
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Literal(last)) = tokens.last_mut() {
        last.push_str(text);
    } else if !text.is_empty() {
        tokens.push(Token::Literal(text.to_string()));
    }
}
