//! Duration and timestamp helpers for `rusqlite` rows.
//!
//! ```no_run
//! use rowtime_sqlite::{Culture, TemporalColumns};
//!
//! # fn main() -> rusqlite::Result<()> {
//! let conn = rusqlite::Connection::open_in_memory()?;
//! let (elapsed, due) = conn.query_row("SELECT '05:03:01', '18/05/2012'", [], |row| {
//!     let elapsed = row.get_duration(0)?;
//!     let due = row.get_datetime_exact_with(1, "dd/MM/yyyy", Culture::lookup("fr-FR").unwrap())?;
//!     Ok((elapsed, due))
//! })?;
//! # let _ = (elapsed, due);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod ext;
pub mod reader;

pub use error::ColumnError;
pub use ext::TemporalColumns;
pub use reader::ColumnReader;
pub use rowtime_format::Culture;
