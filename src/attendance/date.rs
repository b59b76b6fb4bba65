//! Calendar date keys partitioning the persisted attendance records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// A calendar date (no time component) identifying one attendance sheet.
///
/// The core operates on exactly one `DateKey` at a time; selecting a new
/// date fully replaces the in-memory sheet. The `YYYY-MM-DD` text form is
/// used both for display and as the storage key suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Convenience constructor; `None` for an invalid calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // NaiveDate renders as ISO 8601 YYYY-MM-DD.
        write!(f, "{}", self.0)
    }
}

impl FromStr for DateKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::from_str(s).map(Self)
    }
}
