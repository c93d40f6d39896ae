//! Duration literals and tick arithmetic.
//!
//! A tick is 100 nanoseconds. Literals follow the
//! `[-]{ d | [d.]hh:mm[:ss[.fffffff]] | d:hh:mm:ss[.fffffff] }` grammar.

use chrono::TimeDelta;
use regex::{Captures, Regex};
use std::sync::LazyLock;

pub const NANOS_PER_TICK: i64 = 100;
pub const TICKS_PER_MILLISECOND: i64 = 10_000;
pub const TICKS_PER_SECOND: i64 = TICKS_PER_MILLISECOND * 1000;
pub const TICKS_PER_MINUTE: i64 = TICKS_PER_SECOND * 60;
pub const TICKS_PER_HOUR: i64 = TICKS_PER_MINUTE * 60;
pub const TICKS_PER_DAY: i64 = TICKS_PER_HOUR * 24;

const MAX_FRACTION_DIGITS: usize = 7;

// Tried in order; the first match decides how the components are read.
static LITERAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // d
        r"^(?P<days>[0-9]+)$",
        // d:hh:mm:ss[.f]
        r"^(?P<days>[0-9]+):(?P<hours>[0-9]+):(?P<minutes>[0-9]+):(?P<seconds>[0-9]+)(?:\.(?P<fraction>[0-9]+))?$",
        // d.hh:mm[:ss[.f]]
        r"^(?P<days>[0-9]+)\.(?P<hours>[0-9]+):(?P<minutes>[0-9]+)(?::(?P<seconds>[0-9]+)(?:\.(?P<fraction>[0-9]+))?)?$",
        // hh:mm[:ss[.f]]
        r"^(?P<hours>[0-9]+):(?P<minutes>[0-9]+)(?::(?P<seconds>[0-9]+)(?:\.(?P<fraction>[0-9]+))?)?$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("duration literal patterns are valid"))
    .collect()
});

/// Errors raised while parsing a duration literal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationParseError {
    #[error("Duration literal is empty")]
    Empty,

    #[error("String '{0}' was not recognized as a valid duration")]
    Format(String),

    #[error("Duration literal '{literal}' has a {component} component outside its range")]
    Overflow {
        literal: String,
        component: &'static str,
    },
}

/// Parse a duration literal such as `05`, `03:01`, `05:03:01`, `1.02:03:04`
/// or `1:07:08:11.1634`
///
/// A bare integer counts days. Leading and trailing whitespace is ignored and
/// a leading `-` negates the whole value.
///
/// # Errors
///
/// Returns an error if the literal does not match the grammar or a component
/// is out of range
pub fn parse_duration(literal: &str) -> Result<TimeDelta, DurationParseError> {
    log::trace!("Parsing duration literal '{literal}'");

    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let captures = LITERAL_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(body))
        .ok_or_else(|| DurationParseError::Format(literal.to_string()))?;

    let ticks = Components::read(&captures, literal)?.total_ticks(literal)?;
    Ok(from_ticks(if negative { -ticks } else { ticks }))
}

/// Build a duration from a tick count
#[must_use]
pub fn from_ticks(ticks: i64) -> TimeDelta {
    let micros = ticks / 10;
    let remainder = ticks % 10;
    TimeDelta::microseconds(micros) + TimeDelta::nanoseconds(remainder * NANOS_PER_TICK)
}

/// Tick count of a duration, truncating sub-tick nanoseconds toward zero
///
/// Returns `None` if the duration does not fit in an `i64` tick count.
#[must_use]
pub fn to_ticks(duration: TimeDelta) -> Option<i64> {
    let seconds = duration.num_seconds().checked_mul(TICKS_PER_SECOND)?;
    seconds.checked_add(i64::from(duration.subsec_nanos()) / NANOS_PER_TICK)
}

struct Components {
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
    fraction_ticks: u64,
}

impl Components {
    fn read(captures: &Captures<'_>, literal: &str) -> Result<Self, DurationParseError> {
        let overflow = |component| DurationParseError::Overflow {
            literal: literal.to_string(),
            component,
        };
        let number = |name: &'static str, max: u64| -> Result<u64, DurationParseError> {
            match captures.name(name) {
                None => Ok(0),
                Some(m) => m
                    .as_str()
                    .parse::<u64>()
                    .ok()
                    .filter(|value| *value <= max)
                    .ok_or_else(|| overflow(name)),
            }
        };

        let fraction_ticks = match captures.name("fraction") {
            None => 0,
            Some(m) if m.as_str().len() > MAX_FRACTION_DIGITS => return Err(overflow("fraction")),
            Some(m) => {
                let padded = format!("{:0<width$}", m.as_str(), width = MAX_FRACTION_DIGITS);
                padded.parse::<u64>().map_err(|_| overflow("fraction"))?
            }
        };

        #[allow(clippy::cast_sign_loss)]
        let max_days = (i64::MAX / TICKS_PER_DAY) as u64;

        Ok(Self {
            days: number("days", max_days)?,
            hours: number("hours", 23)?,
            minutes: number("minutes", 59)?,
            seconds: number("seconds", 59)?,
            fraction_ticks,
        })
    }

    fn total_ticks(&self, literal: &str) -> Result<i64, DurationParseError> {
        let total = i128::from(self.days) * i128::from(TICKS_PER_DAY)
            + i128::from(self.hours) * i128::from(TICKS_PER_HOUR)
            + i128::from(self.minutes) * i128::from(TICKS_PER_MINUTE)
            + i128::from(self.seconds) * i128::from(TICKS_PER_SECOND)
            + i128::from(self.fraction_ticks);

        i64::try_from(total).map_err(|_| DurationParseError::Overflow {
            literal: literal.to_string(),
            component: "days",
        })
    }
}
