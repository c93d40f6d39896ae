use rowtime_format::{DurationParseError, TimestampParseError};
use rusqlite::types::Type;

/// Errors raised while reading a temporal value from a column
#[derive(Debug, thiserror::Error)]
pub enum ColumnError {
    /// The column value could not be coerced to a 64-bit integer tick count
    #[error("The value in column {column} could not be cast to long.")]
    NotLong {
        column: usize,
        #[source]
        source: rusqlite::Error,
    },

    #[error("{source}")]
    Duration {
        column: usize,
        source: DurationParseError,
    },

    #[error("{source}")]
    Timestamp {
        column: usize,
        source: TimestampParseError,
    },

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

impl ColumnError {
    /// Zero-based index of the column the error came from, when known
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::NotLong { column, .. }
            | Self::Duration { column, .. }
            | Self::Timestamp { column, .. } => Some(*column),
            Self::Sqlite(_) => None,
        }
    }
}

/// Lets the row helpers be used with `?` inside `query_row`/`query_map`
/// closures, which must return `rusqlite::Result`.
impl From<ColumnError> for rusqlite::Error {
    fn from(err: ColumnError) -> Self {
        match err {
            ColumnError::Sqlite(inner) => inner,
            ColumnError::NotLong { column, .. } => {
                Self::FromSqlConversionFailure(column, Type::Integer, Box::new(err))
            }
            ColumnError::Duration { column, .. } | ColumnError::Timestamp { column, .. } => {
                Self::FromSqlConversionFailure(column, Type::Text, Box::new(err))
            }
        }
    }
}
