//! Culture-specific date and time format data.
//!
//! A [`Culture`] plays the role of a format provider: it supplies month and
//! day names, AM/PM designators, separators and the standard patterns used by
//! single-character format strings.

mod builtin;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Years written with two digits resolve into the hundred years ending here.
pub const DEFAULT_TWO_DIGIT_YEAR_MAX: i32 = 2049;

const TWO_DIGIT_YEAR_MAX_RANGE: std::ops::RangeInclusive<i32> = 99..=9999;

static BUILTIN: LazyLock<Vec<Culture>> = LazyLock::new(|| {
    builtin::ALL
        .iter()
        .map(builtin::CultureData::to_culture)
        .collect()
});

/// Errors raised while resolving or loading a culture
#[derive(Debug, thiserror::Error)]
pub enum CultureError {
    #[error("Unknown culture: {0}. Use: invariant, en-US, en-GB, es-ES, it-IT, fr-FR, de-DE")]
    Unknown(String),

    #[error("Failed to read culture file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid culture definition: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("two_digit_year_max must be between 99 and 9999, got {0}")]
    TwoDigitYearMax(i32),
}

/// Date and time formatting conventions for one culture
///
/// Day name arrays start with Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Culture {
    pub name: String,
    pub month_names: [String; 12],
    pub abbreviated_month_names: [String; 12],
    pub day_names: [String; 7],
    pub abbreviated_day_names: [String; 7],
    pub am_designator: String,
    pub pm_designator: String,
    pub date_separator: String,
    pub time_separator: String,
    pub short_date_pattern: String,
    pub long_date_pattern: String,
    pub short_time_pattern: String,
    pub long_time_pattern: String,
    pub month_day_pattern: String,
    pub year_month_pattern: String,
    #[serde(default = "default_two_digit_year_max")]
    pub two_digit_year_max: i32,
}

fn default_two_digit_year_max() -> i32 {
    DEFAULT_TWO_DIGIT_YEAR_MAX
}

impl Culture {
    /// The culture-neutral conventions (English names, `/` and `:` separators)
    #[must_use]
    pub fn invariant() -> &'static Culture {
        &BUILTIN[0]
    }

    /// Look up a predefined culture by name
    ///
    /// Names are matched case-insensitively and `_` is accepted in place of
    /// `-`. An empty name or `invariant` selects the invariant culture.
    ///
    /// # Errors
    ///
    /// Returns `CultureError::Unknown` if no predefined culture has that name
    pub fn lookup(name: &str) -> Result<&'static Culture, CultureError> {
        let wanted = name.trim().replace('_', "-");
        if wanted.is_empty() {
            return Ok(Self::invariant());
        }

        BUILTIN
            .iter()
            .find(|culture| culture.name.eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| CultureError::Unknown(name.to_string()))
    }

    /// Names of all predefined cultures, invariant first
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|culture| culture.name.as_str())
    }

    /// Parse a custom culture definition from TOML
    ///
    /// `two_digit_year_max` may be omitted and defaults to
    /// [`DEFAULT_TWO_DIGIT_YEAR_MAX`].
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML, lacks a field or
    /// sets `two_digit_year_max` outside `99..=9999`
    pub fn from_toml(source: &str) -> Result<Self, CultureError> {
        let culture: Self = toml::from_str(source)?;
        if !TWO_DIGIT_YEAR_MAX_RANGE.contains(&culture.two_digit_year_max) {
            return Err(CultureError::TwoDigitYearMax(culture.two_digit_year_max));
        }
        log::debug!("Loaded custom culture '{}'", culture.name);
        Ok(culture)
    }

    /// Load a custom culture definition from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid definition
    pub fn from_toml_file(path: &Path) -> Result<Self, CultureError> {
        let source = std::fs::read_to_string(path).map_err(|source| CultureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&source)
    }

    /// Resolve a year written with one or two digits
    ///
    /// Returns `None` if the window set by `two_digit_year_max` pushes the
    /// year outside the `i32` range.
    #[must_use]
    pub fn expand_two_digit_year(&self, year: i32) -> Option<i32> {
        let century = self.two_digit_year_max / 100 * 100;
        let candidate = century.checked_add(year)?;
        if candidate > self.two_digit_year_max {
            candidate.checked_sub(100)
        } else {
            Some(candidate)
        }
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant().clone()
    }
}

impl std::fmt::Display for Culture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::str::FromStr for Culture {
    type Err = CultureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).cloned()
    }
}
