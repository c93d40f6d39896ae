use super::*;
use chrono::NaiveDate;
use rusqlite::{Connection, Row};

/// Run `read` against the single row of a one-column table
fn with_row<T>(column_type: &str, value_sql: &str, read: impl FnOnce(&Row<'_>) -> T) -> T {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute(&format!("CREATE TABLE test (value {column_type})"), [])
        .unwrap();
    conn.execute(&format!("INSERT INTO test VALUES ({value_sql})"), [])
        .unwrap();

    let mut stmt = conn.prepare("SELECT * FROM test").unwrap();
    let mut rows = stmt.query([]).unwrap();
    let row = rows.next().unwrap().unwrap();
    read(row)
}

fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

// ==================== ColumnReader for Row tests ====================

#[test]
fn test_row_is_null() {
    assert!(with_row("TEXT", "NULL", |row| row.is_null(0).unwrap()));
    assert!(!with_row("TEXT", "'x'", |row| row.is_null(0).unwrap()));
}

#[test]
fn test_row_read_datetime_text() {
    assert_eq!(
        with_row("TEXT", "'2012-05-18 15:04:05'", |row| row.read_datetime(0).unwrap()),
        datetime(2012, 5, 18, 15, 4, 5)
    );
    assert_eq!(
        with_row("TEXT", "'2012-05-18T15:04:05.250'", |row| row.read_datetime(0).unwrap()),
        datetime(2012, 5, 18, 15, 4, 5) + TimeDelta::milliseconds(250)
    );
    assert_eq!(
        with_row("TEXT", "'2012-05-18'", |row| row.read_datetime(0).unwrap()),
        datetime(2012, 5, 18, 0, 0, 0)
    );
}

#[test]
fn test_row_read_datetime_numeric() {
    assert_eq!(
        with_row("INTEGER", "1337353445", |row| row.read_datetime(0).unwrap()),
        datetime(2012, 5, 18, 15, 4, 5)
    );
    assert_eq!(
        with_row("REAL", "2456066.0", |row| row.read_datetime(0).unwrap()),
        datetime(2012, 5, 18, 12, 0, 0)
    );
}

#[test]
fn test_row_read_datetime_rejects_garbage() {
    let err = with_row("TEXT", "'not a date'", |row| row.read_datetime(0).unwrap_err());
    assert!(matches!(err, rusqlite::Error::FromSqlConversionFailure(0, _, _)));

    let err = with_row("BLOB", "x'00'", |row| row.read_datetime(0).unwrap_err());
    assert!(matches!(err, rusqlite::Error::InvalidColumnType(0, _, _)));
}

// ==================== duration tests ====================

#[test]
fn test_get_duration_matches_parse_duration() {
    for literal in ["05", "03:01", "05:03:01", "11:05:03:01", "1:07:08:11.1634"] {
        let actual = with_row("nvarchar(10)", &format!("'{literal}'"), |row| {
            row.get_duration(0).unwrap()
        });
        assert_eq!(actual, parse_duration(literal).unwrap(), "{literal}");
    }
}

#[test]
fn test_get_duration_malformed_literal() {
    let err = with_row("TEXT", "'asd'", |row| row.get_duration(0).unwrap_err());
    assert!(matches!(
        err,
        ColumnError::Duration {
            column: 0,
            source: rowtime_format::DurationParseError::Format(_)
        }
    ));
    assert_eq!(err.to_string(), "String 'asd' was not recognized as a valid duration");
}

#[test]
fn test_get_duration_opt() {
    assert_eq!(with_row("TEXT", "NULL", |row| row.get_duration_opt(0).unwrap()), None);
    assert_eq!(
        with_row("TEXT", "'03:01'", |row| row.get_duration_opt(0).unwrap()),
        Some(TimeDelta::hours(3) + TimeDelta::minutes(1))
    );
}

#[test]
fn test_get_duration_ticks() {
    for ticks in [13_624_i64, 246_246, 234, 247_536, 32_875_227] {
        let actual = with_row("integer", &format!("'{ticks}'"), |row| {
            row.get_duration_ticks(0).unwrap()
        });
        assert_eq!(rowtime_format::to_ticks(actual), Some(ticks));
    }
}

#[test]
fn test_get_duration_ticks_from_integer_text() {
    assert_eq!(
        with_row("TEXT", "'13624'", |row| row.get_duration_ticks(0).unwrap()),
        from_ticks(13_624)
    );
    assert_eq!(
        with_row("TEXT", "' -42 '", |row| row.get_duration_ticks(0).unwrap()),
        from_ticks(-42)
    );

    let conn = Connection::open_in_memory().unwrap();
    let duration = conn
        .query_row("SELECT '13624'", [], |row| Ok(row.get_duration_ticks(0)?))
        .unwrap();
    assert_eq!(rowtime_format::to_ticks(duration), Some(13_624));
}

#[test]
fn test_get_duration_ticks_not_long() {
    let err = with_row("integer", "'asd'", |row| row.get_duration_ticks(0).unwrap_err());
    assert!(matches!(err, ColumnError::NotLong { column: 0, .. }));
    assert_eq!(err.to_string(), "The value in column 0 could not be cast to long.");
    assert_eq!(err.column(), Some(0));
}

#[test]
fn test_get_duration_ticks_real_is_not_long() {
    let err = with_row("REAL", "1.5", |row| row.get_duration_ticks(0).unwrap_err());
    assert!(matches!(err, ColumnError::NotLong { column: 0, .. }));

    let err = with_row("TEXT", "'12.5'", |row| row.get_duration_ticks(0).unwrap_err());
    assert!(matches!(err, ColumnError::NotLong { column: 0, .. }));
}

#[test]
fn test_get_duration_ticks_bad_index_passes_through() {
    let err = with_row("integer", "1", |row| row.get_duration_ticks(3).unwrap_err());
    assert!(matches!(
        err,
        ColumnError::Sqlite(rusqlite::Error::InvalidColumnIndex(3))
    ));
    assert_eq!(err.column(), None);
}

#[test]
fn test_get_duration_ticks_opt() {
    assert_eq!(
        with_row("integer", "NULL", |row| row.get_duration_ticks_opt(0).unwrap()),
        None
    );
    assert_eq!(
        with_row("integer", "10000000", |row| row.get_duration_ticks_opt(0).unwrap()),
        Some(TimeDelta::seconds(1))
    );
}

// ==================== timestamp tests ====================

#[test]
fn test_get_datetime_exact() {
    let actual = with_row("TEXT", "'2013-17-08'", |row| {
        row.get_datetime_exact(0, "yyyy-dd-MM").unwrap()
    });
    assert_eq!(actual, datetime(2013, 8, 17, 0, 0, 0));
}

#[test]
fn test_get_datetime_exact_with_culture() {
    let spanish = Culture::lookup("es-ES").unwrap();
    let actual = with_row("TEXT", "'18 de mayo de 2012'", |row| {
        row.get_datetime_exact_with(0, "d 'de' MMMM 'de' yyyy", spanish)
            .unwrap()
    });
    assert_eq!(actual, datetime(2012, 5, 18, 0, 0, 0));
}

#[test]
fn test_get_datetime_exact_mismatch() {
    let err = with_row("TEXT", "'2012-05-18'", |row| {
        row.get_datetime_exact(0, "dd-MM-yyyy").unwrap_err()
    });
    assert!(matches!(err, ColumnError::Timestamp { column: 0, .. }));
}

#[test]
fn test_get_datetime_exact_integer_column_is_driver_error() {
    let err = with_row("INTEGER", "20120518", |row| {
        row.get_datetime_exact(0, "yyyyMMdd").unwrap_err()
    });
    assert!(matches!(
        err,
        ColumnError::Sqlite(rusqlite::Error::InvalidColumnType(0, _, _))
    ));
}

#[test]
fn test_get_datetime_opt_variants_on_null() {
    let italian = Culture::lookup("it-IT").unwrap();
    with_row("TEXT", "NULL", |row| {
        assert_eq!(row.get_datetime_opt(0).unwrap(), None);
        assert_eq!(row.get_datetime_opt_exact(0, "yyyy-MM-dd").unwrap(), None);
        assert_eq!(
            row.get_datetime_opt_exact_with(0, "yyyy-MM-dd", italian).unwrap(),
            None
        );
    });
}

#[test]
fn test_get_datetime_opt_variants_on_value() {
    let italian = Culture::lookup("it-IT").unwrap();
    with_row("TEXT", "'2012-05-18'", |row| {
        let expected = Some(datetime(2012, 5, 18, 0, 0, 0));
        assert_eq!(row.get_datetime_opt(0).unwrap(), expected);
        assert_eq!(row.get_datetime_opt_exact(0, "yyyy-MM-dd").unwrap(), expected);
        assert_eq!(
            row.get_datetime_opt_exact_with(0, "yyyy-MM-dd", italian).unwrap(),
            expected
        );
    });
}

// ==================== rusqlite::Error conversion tests ====================

#[test]
fn test_helpers_work_inside_query_row() {
    let conn = Connection::open_in_memory().unwrap();
    let duration = conn
        .query_row("SELECT '05:03:01'", [], |row| Ok(row.get_duration(0)?))
        .unwrap();
    assert_eq!(duration, TimeDelta::hours(5) + TimeDelta::minutes(3) + TimeDelta::seconds(1));

    let err = conn
        .query_row("SELECT 'asd'", [], |row| Ok(row.get_duration_ticks(0)?))
        .unwrap_err();
    assert!(matches!(
        err,
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Integer, _)
    ));
    assert!(err.to_string().contains("could not be cast to long"));
}

// ==================== custom ColumnReader tests ====================

/// In-memory row of optional text cells
struct TextRow(Vec<Option<String>>);

impl TextRow {
    fn cell(&self, column: usize) -> rusqlite::Result<&Option<String>> {
        self.0
            .get(column)
            .ok_or(rusqlite::Error::InvalidColumnIndex(column))
    }
}

impl ColumnReader for TextRow {
    fn read_text(&self, column: usize) -> rusqlite::Result<String> {
        self.cell(column)?.clone().ok_or_else(|| {
            rusqlite::Error::InvalidColumnType(column, "value".to_string(), rusqlite::types::Type::Null)
        })
    }

    fn read_i64(&self, column: usize) -> rusqlite::Result<i64> {
        let text = self.read_text(column)?;
        text.parse().map_err(|_| {
            rusqlite::Error::InvalidColumnType(column, "value".to_string(), rusqlite::types::Type::Text)
        })
    }

    fn is_null(&self, column: usize) -> rusqlite::Result<bool> {
        Ok(self.cell(column)?.is_none())
    }

    fn read_datetime(&self, column: usize) -> rusqlite::Result<NaiveDateTime> {
        let text = self.read_text(column)?;
        NaiveDateTime::parse_from_str(&text, "%Y-%m-%d %H:%M:%S").map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
        })
    }
}

#[test]
fn test_custom_reader_gets_all_helpers() {
    let row = TextRow(vec![
        Some("1.02:03".to_string()),
        Some("asd".to_string()),
        None,
        Some("2012-05-18 15:04:05".to_string()),
    ]);

    assert_eq!(
        row.get_duration(0).unwrap(),
        TimeDelta::days(1) + TimeDelta::hours(2) + TimeDelta::minutes(3)
    );
    assert_eq!(
        row.get_duration_ticks(1).unwrap_err().to_string(),
        "The value in column 1 could not be cast to long."
    );
    assert_eq!(row.get_datetime_opt(2).unwrap(), None);
    assert_eq!(
        row.get_datetime_opt(3).unwrap(),
        Some(datetime(2012, 5, 18, 15, 4, 5))
    );
}
