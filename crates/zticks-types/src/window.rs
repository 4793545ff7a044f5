//! History request window.

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::{OleDate, WindowError};

/// A closed `[start, end]` time window for a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    /// Oldest time of interest (inclusive).
    pub start: DateTime<Utc>,
    /// Newest time of interest (inclusive).
    pub end: DateTime<Utc>,
}

impl HistoryWindow {
    /// Creates a new window, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, WindowError> {
        if start > end {
            return Err(WindowError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a window from host OLE dates.
    ///
    /// # Errors
    ///
    /// Returns an error if either date is out of range or start > end.
    pub fn from_ole(start: OleDate, end: OleDate) -> Result<Self, WindowError> {
        let start = start
            .to_datetime()
            .ok_or(WindowError::OutOfRange(start.days()))?;
        let end = end.to_datetime().ok_or(WindowError::OutOfRange(end.days()))?;
        Self::new(start, end)
    }

    /// Window start in milliseconds since the Unix epoch.
    #[must_use]
    pub fn start_millis(&self) -> i64 {
        self.start.timestamp_millis()
    }

    /// Calendar day of the window end.
    #[must_use]
    pub fn end_day(&self) -> NaiveDate {
        self.end.date_naive()
    }

    /// Lowest day a backward search may visit: the start day minus
    /// `slack_days`.
    #[must_use]
    pub fn search_floor(&self, slack_days: u32) -> NaiveDate {
        let start = self.start.date_naive();
        start
            .checked_sub_days(Days::new(u64::from(slack_days)))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl std::fmt::Display for HistoryWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
