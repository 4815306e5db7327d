//! Shared utility functions for the air quality crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate, Weekday};

    /// Chart label format, e.g. "Jan 1, 2014"
    pub const LABEL_FORMAT: &str = "%b %-d, %Y";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Format a NaiveDate as a human-readable chart axis label.
    pub fn format_label(date: &NaiveDate) -> String {
        date.format(LABEL_FORMAT).to_string()
    }

    /// Saturday and Sunday count as the weekend.
    pub fn is_weekend(date: &NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Number of calendar days from `start` through `end` (inclusive).
    /// Returns 0 when `end` precedes `start`.
    pub fn days_inclusive(start: &NaiveDate, end: &NaiveDate) -> usize {
        let diff = (*end - *start).num_days();
        if diff < 0 {
            0
        } else {
            diff as usize + 1
        }
    }

}
