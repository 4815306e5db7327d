use crate::series::{DailySeries, LabeledSeries};
use aq_epa::error::{AqError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Month the dashboard selects on first load.
pub const DEFAULT_MONTH: u32 = 12;
/// Year the dashboard selects on first load.
pub const DEFAULT_YEAR: i32 = 2024;

/// Text a filter control uses for "no constraint".
pub const ALL: &str = "all";

/// Distinct months and years present in a series, each ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableMonths {
    pub months: Vec<u32>,
    pub years: Vec<i32>,
}

/// Enumerate the months (1-12) and years a series covers, for populating
/// selection controls. Recomputed on every call.
pub fn available_months(series: &DailySeries) -> AvailableMonths {
    let mut months = BTreeSet::new();
    let mut years = BTreeSet::new();
    for sample in series {
        months.insert(sample.date.month());
        years.insert(sample.date.year());
    }
    AvailableMonths {
        months: months.into_iter().collect(),
        years: years.into_iter().collect(),
    }
}

/// The days of `series` falling in `month` of `year`, in order.
///
/// A pair outside the series (including a month outside 1-12) is not an
/// error; it yields a labeled series with no labels and three empty datasets.
pub fn filter_by_month_year(series: &DailySeries, month: u32, year: i32) -> LabeledSeries {
    FilterQuery::new(Some(month), Some(year)).apply(series)
}

/// A month/year selection. `None` on either side places no constraint on
/// that dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl Default for FilterQuery {
    /// December 2024, the dashboard's initial selection.
    fn default() -> Self {
        FilterQuery {
            month: Some(DEFAULT_MONTH),
            year: Some(DEFAULT_YEAR),
        }
    }
}

impl FilterQuery {
    pub fn new(month: Option<u32>, year: Option<i32>) -> FilterQuery {
        FilterQuery { month, year }
    }

    /// Clears both dimensions.
    pub fn all() -> FilterQuery {
        FilterQuery {
            month: None,
            year: None,
        }
    }

    /// Build a query from the text of the month and year controls. Each part
    /// is either a number or `"all"`.
    pub fn parse(month: &str, year: &str) -> Result<FilterQuery> {
        Ok(FilterQuery {
            month: parse_part(month)?,
            year: parse_part(year)?,
        })
    }

    pub fn is_unconstrained(&self) -> bool {
        self.month.is_none() && self.year.is_none()
    }

    pub fn matches(&self, date: &NaiveDate) -> bool {
        self.month.is_none_or(|m| date.month() == m) && self.year.is_none_or(|y| date.year() == y)
    }

    /// Project the matching days of `series` into a new labeled series.
    /// The input is left untouched; the caller owns the result.
    pub fn apply(&self, series: &DailySeries) -> LabeledSeries {
        LabeledSeries::from_samples(series.iter().filter(|s| self.matches(&s.date)))
    }
}

/// Parse one filter control value: `"all"` (any case) is `None`, anything
/// else must be a number.
pub fn parse_part<T: std::str::FromStr>(text: &str) -> Result<Option<T>> {
    let text = text.trim();
    if text.eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    text.parse::<T>()
        .map(Some)
        .map_err(|_| AqError::InvalidSelection(text.to_string()))
}
