//! Date parsing and range handling.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{BarqueroError, DateRangeError};

/// Parses a calendar date in strict `YYYY-MM-DD` form.
///
/// This is the only accepted CLI date format; anything else fails with
/// [`BarqueroError::InvalidDateFormat`] carrying the offending string.
///
/// # Example
///
/// ```
/// use barquero_types::parse_date;
///
/// assert!(parse_date("2025-01-01").is_ok());
/// assert!(parse_date("01/02/2025").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the string does not parse as `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> Result<NaiveDate, BarqueroError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| BarqueroError::InvalidDateFormat {
        input: input.to_string(),
    })
}

/// A range of calendar dates for data retrieval.
///
/// Both bounds are inclusive at this level; how the end bound maps onto a
/// provider query is up to each adapter (the upstream conventions differ).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the start date as milliseconds since the Unix epoch (UTC midnight).
    #[must_use]
    pub fn start_epoch_ms(&self) -> i64 {
        midnight(self.start).and_utc().timestamp_millis()
    }

    /// Returns the end date as milliseconds since the Unix epoch (UTC midnight).
    #[must_use]
    pub fn end_epoch_ms(&self) -> i64 {
        midnight(self.end).and_utc().timestamp_millis()
    }

    /// Returns the start date as seconds since the Unix epoch (UTC midnight).
    #[must_use]
    pub fn start_epoch_secs(&self) -> i64 {
        midnight(self.start).and_utc().timestamp()
    }

    /// Returns the end date as seconds since the Unix epoch (UTC midnight).
    #[must_use]
    pub fn end_epoch_secs(&self) -> i64 {
        midnight(self.end).and_utc().timestamp()
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Midnight at the start of the given date.
fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight is a valid time")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("2025-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        for input in ["2025/01/15", "15-01-2025", "2025-1-one", "not-a-date", ""] {
            let err = parse_date(input).unwrap_err();
            assert!(matches!(
                err,
                BarqueroError::InvalidDateFormat { input: ref s } if s == input
            ));
        }
    }

    #[test]
    fn test_parse_date_rejects_impossible_date() {
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_date_range_new() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert_eq!(range.start, start);
        assert_eq!(range.end, end);
    }

    #[test]
    fn test_date_range_invalid() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(DateRange::new(start, end).is_err());
    }

    #[test]
    fn test_epoch_conversions() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let range = DateRange::single_day(date);

        assert_eq!(range.start_epoch_secs(), 1_735_689_600);
        assert_eq!(range.start_epoch_ms(), 1_735_689_600_000);
        assert_eq!(range.end_epoch_ms(), range.start_epoch_ms());
    }

    #[test]
    fn test_total_days() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert_eq!(range.total_days(), 5);
    }

    #[test]
    fn test_contains() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()));
    }
}
