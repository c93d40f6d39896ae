//! Read primitives the temporal helpers need from a row cursor.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::types::{FromSqlError, Type, ValueRef};
use rusqlite::Row;

/// Julian day number of 1970-01-01T00:00:00Z
const UNIX_EPOCH_JULIAN_DAY: f64 = 2_440_587.5;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Column access provided by a database cursor positioned on a row
pub trait ColumnReader {
    /// Read the column as text
    ///
    /// # Errors
    ///
    /// Returns an error if the column does not exist or is not text
    fn read_text(&self, column: usize) -> rusqlite::Result<String>;

    /// Read the column as a 64-bit integer
    ///
    /// # Errors
    ///
    /// Returns an error if the column does not exist or its value is not an integer
    fn read_i64(&self, column: usize) -> rusqlite::Result<i64>;

    /// Whether the column holds SQL NULL
    ///
    /// # Errors
    ///
    /// Returns an error if the column does not exist
    fn is_null(&self, column: usize) -> rusqlite::Result<bool>;

    /// Decode the column as a timestamp using the driver's own conventions
    ///
    /// # Errors
    ///
    /// Returns an error if the column does not exist or cannot be decoded
    fn read_datetime(&self, column: usize) -> rusqlite::Result<NaiveDateTime>;
}

impl ColumnReader for Row<'_> {
    fn read_text(&self, column: usize) -> rusqlite::Result<String> {
        self.get(column)
    }

    /// Integer text such as `'13624'` is accepted alongside INTEGER values.
    fn read_i64(&self, column: usize) -> rusqlite::Result<i64> {
        self.get(column).or_else(|err| match self.get_ref(column)? {
            ValueRef::Text(bytes) => std::str::from_utf8(bytes)
                .ok()
                .and_then(|text| text.trim().parse().ok())
                .ok_or(err),
            _ => Err(err),
        })
    }

    fn is_null(&self, column: usize) -> rusqlite::Result<bool> {
        Ok(self.get_ref(column)? == ValueRef::Null)
    }

    /// TEXT is read as ISO-8601 (`YYYY-MM-DD HH:MM:SS[.fff]`, `T` separator
    /// allowed, or a bare date), INTEGER as Unix seconds and REAL as a
    /// Julian day number.
    fn read_datetime(&self, column: usize) -> rusqlite::Result<NaiveDateTime> {
        match self.get_ref(column)? {
            ValueRef::Text(_) => self.get::<_, NaiveDateTime>(column).or_else(|err| {
                log::debug!("Column {column} is not an ISO-8601 timestamp, trying a bare date");
                self.get::<_, NaiveDate>(column)
                    .map(|date| date.and_time(NaiveTime::MIN))
                    .map_err(|_| err)
            }),
            ValueRef::Integer(seconds) => parse_unix_seconds(seconds)
                .ok_or(rusqlite::Error::IntegralValueOutOfRange(column, seconds)),
            ValueRef::Real(julian_day) => parse_julian_day(julian_day).ok_or_else(|| {
                rusqlite::Error::FromSqlConversionFailure(
                    column,
                    Type::Real,
                    Box::new(FromSqlError::InvalidType),
                )
            }),
            other => Err(rusqlite::Error::InvalidColumnType(
                column,
                self.as_ref().column_name(column)?.to_string(),
                other.data_type(),
            )),
        }
    }
}

/// Timestamp from seconds since the Unix epoch
fn parse_unix_seconds(seconds: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.naive_utc())
}

/// Timestamp from a Julian day number, rounded to the millisecond
#[allow(clippy::cast_possible_truncation)]
fn parse_julian_day(julian_day: f64) -> Option<NaiveDateTime> {
    let millis = ((julian_day - UNIX_EPOCH_JULIAN_DAY) * MILLIS_PER_DAY).round();
    if !millis.is_finite() || millis.abs() >= 9.0e15 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64).map(|dt| dt.naive_utc())
}
