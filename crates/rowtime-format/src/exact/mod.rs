//! Exact-format timestamp parsing.
//!
//! The whole input must match the format. Component order comes only from
//! the format, so `2013-17-08` against `yyyy-dd-MM` is the 17th of August.

mod pattern;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::culture::Culture;
use pattern::Token;

/// Errors raised while parsing a timestamp against a format
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampParseError {
    #[error("Format string is empty")]
    EmptyFormat,

    #[error("Invalid format string '{format}': {reason}")]
    InvalidFormat {
        format: String,
        reason: &'static str,
    },

    #[error("Format specifier '{0}' is not supported")]
    UnsupportedSpecifier(char),

    #[error("String '{text}' was not recognized as a valid timestamp for format '{format}'")]
    Mismatch { text: String, format: String },

    #[error("String '{text}' sets the {field} more than once with different values")]
    Conflict { text: String, field: &'static str },

    #[error("The {field} value {value} is out of range")]
    OutOfRange { field: &'static str, value: u32 },

    #[error("{year:04}-{month:02}-{day:02} is not a valid date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Day of week does not match {0}")]
    WeekdayMismatch(NaiveDate),
}

/// Parse `text` against `format` with the invariant culture
///
/// # Errors
///
/// Returns an error if the format is invalid or the text does not match it
pub fn parse_exact(text: &str, format: &str) -> Result<NaiveDateTime, TimestampParseError> {
    parse_exact_with(text, format, Culture::invariant())
}

/// Parse `text` against `format` using the names and separators of `culture`
///
/// # Errors
///
/// Returns an error if the format is invalid or the text does not match it
pub fn parse_exact_with(
    text: &str,
    format: &str,
    culture: &Culture,
) -> Result<NaiveDateTime, TimestampParseError> {
    parse_exact_on(text, format, culture, Local::now().date_naive())
}

/// Try each format in order and return the first successful parse
///
/// # Errors
///
/// Returns the last format's error if none match, or `EmptyFormat` if
/// `formats` is empty
pub fn parse_exact_any(
    text: &str,
    formats: &[&str],
    culture: &Culture,
) -> Result<NaiveDateTime, TimestampParseError> {
    let today = Local::now().date_naive();
    let mut last_error = TimestampParseError::EmptyFormat;
    for format in formats {
        match parse_exact_on(text, format, culture, today) {
            Ok(parsed) => return Ok(parsed),
            Err(err) => last_error = err,
        }
    }
    Err(last_error)
}

/// Parse with an explicit date for formats that carry no date component
pub(crate) fn parse_exact_on(
    text: &str,
    format: &str,
    culture: &Culture,
    today: NaiveDate,
) -> Result<NaiveDateTime, TimestampParseError> {
    log::trace!("Parsing '{text}' with format '{format}' ({culture})");

    let (pattern, culture) = pattern::resolve(format, culture)?;
    let tokens = pattern::tokenize(&pattern)?;

    let mut parser = Parser {
        text,
        pos: 0,
        format,
        culture,
        fields: Fields::default(),
    };
    for token in &tokens {
        parser.token(token)?;
    }
    if parser.pos != text.len() {
        return Err(parser.mismatch());
    }

    parser.fields.build(text, today)
}

#[derive(Default)]
struct Fields {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour24: Option<u32>,
    hour12: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
    nanos: Option<u32>,
    pm: Option<bool>,
    weekday: Option<Weekday>,
}

impl Fields {
    fn build(self, text: &str, today: NaiveDate) -> Result<NaiveDateTime, TimestampParseError> {
        let (year, month, day) = match (self.year, self.month, self.day) {
            (None, None, None) => (today.year(), today.month(), today.day()),
            (year, month, day) => (
                year.unwrap_or(today.year()),
                month.unwrap_or(1),
                day.unwrap_or(1),
            ),
        };
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TimestampParseError::OutOfRange {
                field: "year",
                value: year.unsigned_abs(),
            });
        }
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimestampParseError::InvalidDate { year, month, day })?;

        if let Some(weekday) = self.weekday {
            if date.weekday() != weekday {
                return Err(TimestampParseError::WeekdayMismatch(date));
            }
        }

        let hour = self.hour(text)?;
        let minute = bounded("minute", self.minute.unwrap_or(0), 59)?;
        let second = bounded("second", self.second.unwrap_or(0), 59)?;
        let time = NaiveTime::from_hms_nano_opt(hour, minute, second, self.nanos.unwrap_or(0))
            .ok_or(TimestampParseError::OutOfRange {
                field: "time",
                value: hour,
            })?;

        Ok(date.and_time(time))
    }

    fn hour(&self, text: &str) -> Result<u32, TimestampParseError> {
        let from_twelve = match self.hour12 {
            None => None,
            Some(h) => {
                let h = bounded("hour", h, 12)?;
                Some(match self.pm {
                    Some(true) => h % 12 + 12,
                    Some(false) => h % 12,
                    None => h,
                })
            }
        };

        let hour = match (self.hour24, from_twelve) {
            (Some(h24), Some(h12)) if h24 != h12 => {
                return Err(TimestampParseError::Conflict {
                    text: text.to_string(),
                    field: "hour",
                })
            }
            (Some(h), _) | (None, Some(h)) => h,
            (None, None) => 0,
        };
        let hour = bounded("hour", hour, 23)?;

        if self.hour12.is_none() {
            if let Some(pm) = self.pm {
                if pm != (hour >= 12) {
                    return Err(TimestampParseError::Conflict {
                        text: text.to_string(),
                        field: "AM/PM designator",
                    });
                }
            }
        }

        Ok(hour)
    }
}

fn bounded(field: &'static str, value: u32, max: u32) -> Result<u32, TimestampParseError> {
    if value > max {
        Err(TimestampParseError::OutOfRange { field, value })
    } else {
        Ok(value)
    }
}

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

struct Parser<'a> {
    text: &'a str,
    pos: usize,
    format: &'a str,
    culture: &'a Culture,
    fields: Fields,
}

impl<'a> Parser<'a> {
    fn mismatch(&self) -> TimestampParseError {
        TimestampParseError::Mismatch {
            text: self.text.to_string(),
            format: self.format.to_string(),
        }
    }

    fn conflict(&self, field: &'static str) -> TimestampParseError {
        TimestampParseError::Conflict {
            text: self.text.to_string(),
            field,
        }
    }

    fn settle(&self, assigned: bool, field: &'static str) -> Result<(), TimestampParseError> {
        if assigned {
            Ok(())
        } else {
            Err(self.conflict(field))
        }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn token(&mut self, token: &Token) -> Result<(), TimestampParseError> {
        let culture = self.culture;
        match token {
            Token::Year(width) => {
                let value = self.number(*width)?;
                let year = i32::try_from(value).map_err(|_| self.mismatch())?;
                let year = if *width <= 2 {
                    culture
                        .expand_two_digit_year(year)
                        .ok_or(TimestampParseError::OutOfRange {
                            field: "year",
                            value,
                        })?
                } else {
                    year
                };
                let assigned = assign(&mut self.fields.year, year);
                self.settle(assigned, "year")
            }
            Token::Month(width) => {
                let month = self.number(*width)?;
                let assigned = assign(&mut self.fields.month, month);
                self.settle(assigned, "month")
            }
            Token::MonthName { abbreviated } => {
                let names = if *abbreviated {
                    &culture.abbreviated_month_names
                } else {
                    &culture.month_names
                };
                let index = self.name(names)?;
                let month = u32::try_from(index + 1).map_err(|_| self.mismatch())?;
                let assigned = assign(&mut self.fields.month, month);
                self.settle(assigned, "month")
            }
            Token::Day(width) => {
                let day = self.number(*width)?;
                let assigned = assign(&mut self.fields.day, day);
                self.settle(assigned, "day")
            }
            Token::DayName { abbreviated } => {
                let names = if *abbreviated {
                    &culture.abbreviated_day_names
                } else {
                    &culture.day_names
                };
                let index = self.name(names)?;
                let weekday = *WEEKDAYS_FROM_SUNDAY
                    .get(index)
                    .ok_or_else(|| self.mismatch())?;
                let assigned = assign(&mut self.fields.weekday, weekday);
                self.settle(assigned, "day of week")
            }
            Token::Hour12(width) => {
                let hour = self.number(*width)?;
                let assigned = assign(&mut self.fields.hour12, hour);
                self.settle(assigned, "hour")
            }
            Token::Hour24(width) => {
                let hour = self.number(*width)?;
                let assigned = assign(&mut self.fields.hour24, hour);
                self.settle(assigned, "hour")
            }
            Token::Minute(width) => {
                let minute = self.number(*width)?;
                let assigned = assign(&mut self.fields.minute, minute);
                self.settle(assigned, "minute")
            }
            Token::Second(width) => {
                let second = self.number(*width)?;
                let assigned = assign(&mut self.fields.second, second);
                self.settle(assigned, "second")
            }
            Token::Fraction {
                digits,
                optional,
                leading_dot,
            } => {
                if *leading_dot && !self.optional_dot() {
                    return Ok(());
                }
                self.fraction(*digits, *optional)
            }
            Token::Designator { first_char_only } => self.designator(*first_char_only),
            Token::DateSeparator => self.literal(&culture.date_separator),
            Token::TimeSeparator => self.literal(&culture.time_separator),
            Token::Literal(text) => self.literal(text),
        }
    }

    /// Read digits: one or two for single-letter specifiers, exactly
    /// `width` otherwise
    fn number(&mut self, width: usize) -> Result<u32, TimestampParseError> {
        let (min, max) = if width == 1 { (1, 2) } else { (width, width) };
        self.digits(min, max)
    }

    fn digits(&mut self, min: usize, max: usize) -> Result<u32, TimestampParseError> {
        let rest = self.rest();
        let count = rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if count < min {
            return Err(self.mismatch());
        }
        if count == 0 {
            return Ok(0);
        }

        let value = rest[..count]
            .parse::<u32>()
            .map_err(|_| self.mismatch())?;
        self.pos += count;
        Ok(value)
    }

    fn fraction(&mut self, width: usize, optional: bool) -> Result<(), TimestampParseError> {
        let min = if optional { 0 } else { width };
        let start = self.pos;
        let value = self.digits(min, width)?;
        let read = self.pos - start;
        if read == 0 {
            return Ok(());
        }

        let scale = 10u32.pow(u32::try_from(9 - read).map_err(|_| self.mismatch())?);
        let assigned = assign(&mut self.fields.nanos, value * scale);
        self.settle(assigned, "fraction")
    }

    /// Consume a `.` if one comes next
    fn optional_dot(&mut self) -> bool {
        if self.rest().starts_with('.') {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn designator(&mut self, first_char_only: bool) -> Result<(), TimestampParseError> {
        let shorten = |designator: &str| -> String {
            if first_char_only {
                designator.chars().take(1).collect()
            } else {
                designator.to_string()
            }
        };
        let am = shorten(&self.culture.am_designator);
        let pm = shorten(&self.culture.pm_designator);

        let rest = self.rest();
        let (is_pm, len) = match (match_ignore_case(rest, &am), match_ignore_case(rest, &pm)) {
            (Some(a), Some(p)) if p > a => (true, p),
            (Some(a), _) => (false, a),
            (None, Some(p)) => (true, p),
            (None, None) if am.is_empty() => (false, 0),
            (None, None) if pm.is_empty() => (true, 0),
            (None, None) => return Err(self.mismatch()),
        };

        self.pos += len;
        let assigned = assign(&mut self.fields.pm, is_pm);
        self.settle(assigned, "AM/PM designator")
    }

    /// Longest case-insensitive match among `names`, returning its index
    fn name(&mut self, names: &[String]) -> Result<usize, TimestampParseError> {
        let rest = self.rest();
        let (index, len) = names
            .iter()
            .enumerate()
            .filter_map(|(index, name)| match_ignore_case(rest, name).map(|len| (index, len)))
            .max_by_key(|&(_, len)| len)
            .ok_or_else(|| self.mismatch())?;
        self.pos += len;
        Ok(index)
    }

    fn literal(&mut self, expected: &str) -> Result<(), TimestampParseError> {
        if self.rest().starts_with(expected) {
            self.pos += expected.len();
            Ok(())
        } else {
            Err(self.mismatch())
        }
    }
}

/// Store `value` unless the slot already holds a different one
fn assign<T: Copy + PartialEq>(slot: &mut Option<T>, value: T) -> bool {
    match *slot {
        Some(existing) if existing != value => false,
        _ => {
            *slot = Some(value);
            true
        }
    }
}

/// Byte length of the prefix of `input` equal to `candidate` ignoring case
fn match_ignore_case(input: &str, candidate: &str) -> Option<usize> {
    if candidate.is_empty() {
        return None;
    }

    let mut input_chars = input.char_indices();
    for expected in candidate.chars() {
        let (_, actual) = input_chars.next()?;
        if !expected.to_lowercase().eq(actual.to_lowercase()) {
            return None;
        }
    }
    Some(input_chars.next().map_or(input.len(), |(index, _)| index))
}
