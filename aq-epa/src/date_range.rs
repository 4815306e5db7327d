use aq_utils::dates::days_inclusive;
use chrono::NaiveDate;
use std::mem::replace;

/// First day of the dashboard's generated series.
pub const DEFAULT_START: (i32, u32, u32) = (2014, 1, 1);
/// Last day of the dashboard's generated series.
pub const DEFAULT_END: (i32, u32, u32) = (2024, 12, 31);

/// A date range iterator that yields each date from the start date
/// through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// The 2014-01-01 ..= 2024-12-31 range the dashboard charts.
    pub fn dashboard() -> DateRange {
        let (sy, sm, sd) = DEFAULT_START;
        let (ey, em, ed) = DEFAULT_END;
        match (
            NaiveDate::from_ymd_opt(sy, sm, sd),
            NaiveDate::from_ymd_opt(ey, em, ed),
        ) {
            (Some(start), Some(end)) => DateRange(start, end),
            _ => panic!("dashboard date range constants are not valid dates"),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.0
    }

    pub fn end(&self) -> NaiveDate {
        self.1
    }

    /// Number of days remaining in the range.
    pub fn num_days(&self) -> usize {
        days_inclusive(&self.0, &self.1)
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            match self.0.succ_opt() {
                Some(next) => Some(replace(&mut self.0, next)),
                None => {
                    // self.0 is NaiveDate::MAX; yield it and exhaust the range
                    let last = self.0;
                    self.1 = NaiveDate::MIN;
                    Some(last)
                }
            }
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.num_days();
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRange {}
