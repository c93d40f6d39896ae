//! Duration literals, tick conversion and culture-aware exact timestamp parsing.

pub mod culture;
pub mod duration;
pub mod exact;

pub use culture::{Culture, CultureError, DEFAULT_TWO_DIGIT_YEAR_MAX};
pub use duration::{
    from_ticks, parse_duration, to_ticks, DurationParseError, TICKS_PER_DAY, TICKS_PER_HOUR,
    TICKS_PER_MILLISECOND, TICKS_PER_MINUTE, TICKS_PER_SECOND,
};
pub use exact::{parse_exact, parse_exact_any, parse_exact_with, TimestampParseError};
