//! Temporal helpers on top of [`ColumnReader`].
//!
//! Every method reads a single column of the current row and never advances
//! the cursor.

use chrono::{NaiveDateTime, TimeDelta};
use rowtime_format::{from_ticks, parse_duration, parse_exact, parse_exact_with, Culture};

use crate::error::ColumnError;
use crate::reader::ColumnReader;

/// Duration and timestamp accessors for row cursors
///
/// Implemented for every [`ColumnReader`], including `rusqlite::Row`.
pub trait TemporalColumns: ColumnReader {
    /// Parse a text column as a duration literal (`05`, `03:01`,
    /// `05:03:01`, `11:05:03:01`, `1:07:08:11.1634`)
    ///
    /// # Errors
    ///
    /// Returns an error if the column is not text or the literal is malformed
    fn get_duration(&self, column: usize) -> Result<TimeDelta, ColumnError> {
        let literal = self.read_text(column)?;
        parse_duration(&literal).map_err(|source| ColumnError::Duration { column, source })
    }

    /// Like [`get_duration`](Self::get_duration), but SQL NULL yields `None`
    ///
    /// # Errors
    ///
    /// Returns an error if a non-null value cannot be parsed
    fn get_duration_opt(&self, column: usize) -> Result<Option<TimeDelta>, ColumnError> {
        if self.is_null(column)? {
            return Ok(None);
        }
        self.get_duration(column).map(Some)
    }

    /// Read an integer column as a count of 100-nanosecond ticks
    ///
    /// # Errors
    ///
    /// Returns `ColumnError::NotLong` if the value cannot be read as a 64-bit
    /// integer
    fn get_duration_ticks(&self, column: usize) -> Result<TimeDelta, ColumnError> {
        match self.read_i64(column) {
            Ok(ticks) => Ok(from_ticks(ticks)),
            Err(
                source @ (rusqlite::Error::InvalidColumnType(..)
                | rusqlite::Error::FromSqlConversionFailure(..)
                | rusqlite::Error::IntegralValueOutOfRange(..)),
            ) => {
                log::debug!("Column {column} could not be read as ticks: {source}");
                Err(ColumnError::NotLong { column, source })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Like [`get_duration_ticks`](Self::get_duration_ticks), but SQL NULL
    /// yields `None`
    ///
    /// # Errors
    ///
    /// Returns `ColumnError::NotLong` if a non-null value is not an integer
    fn get_duration_ticks_opt(&self, column: usize) -> Result<Option<TimeDelta>, ColumnError> {
        if self.is_null(column)? {
            return Ok(None);
        }
        self.get_duration_ticks(column).map(Some)
    }

    /// Parse a text column against `format` with the invariant culture
    ///
    /// # Errors
    ///
    /// Returns an error if the column is not text or does not match `format`
    fn get_datetime_exact(&self, column: usize, format: &str) -> Result<NaiveDateTime, ColumnError> {
        let text = self.read_text(column)?;
        parse_exact(&text, format).map_err(|source| ColumnError::Timestamp { column, source })
    }

    /// Parse a text column against `format` using `culture` for names and
    /// separators
    ///
    /// # Errors
    ///
    /// Returns an error if the column is not text or does not match `format`
    fn get_datetime_exact_with(
        &self,
        column: usize,
        format: &str,
        culture: &Culture,
    ) -> Result<NaiveDateTime, ColumnError> {
        let text = self.read_text(column)?;
        parse_exact_with(&text, format, culture)
            .map_err(|source| ColumnError::Timestamp { column, source })
    }

    /// Decode a timestamp column natively, or `None` for SQL NULL
    ///
    /// # Errors
    ///
    /// Returns an error if a non-null value cannot be decoded
    fn get_datetime_opt(&self, column: usize) -> Result<Option<NaiveDateTime>, ColumnError> {
        if self.is_null(column)? {
            return Ok(None);
        }
        Ok(Some(self.read_datetime(column)?))
    }

    /// Exact-format parse with the invariant culture, or `None` for SQL NULL
    ///
    /// # Errors
    ///
    /// Returns an error if a non-null value does not match `format`
    fn get_datetime_opt_exact(
        &self,
        column: usize,
        format: &str,
    ) -> Result<Option<NaiveDateTime>, ColumnError> {
        if self.is_null(column)? {
            return Ok(None);
        }
        self.get_datetime_exact(column, format).map(Some)
    }

    /// Exact-format parse with `culture`, or `None` for SQL NULL
    ///
    /// # Errors
    ///
    /// Returns an error if a non-null value does not match `format`
    fn get_datetime_opt_exact_with(
        &self,
        column: usize,
        format: &str,
        culture: &Culture,
    ) -> Result<Option<NaiveDateTime>, ColumnError> {
        if self.is_null(column)? {
            return Ok(None);
        }
        self.get_datetime_exact_with(column, format, culture).map(Some)
    }
}

impl<R: ColumnReader + ?Sized> TemporalColumns for R {}

#[cfg(test)]
mod tests;
