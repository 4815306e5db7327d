//! Per-year statistics over a generated series, for checking synthetic
//! data against the annual summary it came from.

use crate::series::{DailySample, DailySeries};
use aq_epa::pollutant::Pollutant;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statistics for a single calendar year of one pollutant: mean, the
/// highest/lowest values and their dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyStatistics {
    pub year: i32,
    pub mean: f64,
    pub date_lowest: NaiveDate,
    pub lowest_value: i64,
    pub date_highest: NaiveDate,
    pub highest_value: i64,
    pub days: usize,
}

impl YearlyStatistics {
    /// Returns true if this year has the highest mean in a collection.
    pub fn is_worst_in(&self, all_stats: &[YearlyStatistics]) -> bool {
        all_stats.iter().all(|other| self.mean >= other.mean)
    }

    /// Returns true if this year has the lowest mean in a collection.
    pub fn is_cleanest_in(&self, all_stats: &[YearlyStatistics]) -> bool {
        all_stats.iter().all(|other| self.mean <= other.mean)
    }

    fn from_samples(year: i32, samples: &[&DailySample], pollutant: Pollutant) -> Option<Self> {
        let first = samples.first()?;
        let mut lowest = (first.date, first.value(pollutant));
        let mut highest = lowest;
        let mut total = 0i64;
        for sample in samples {
            let value = sample.value(pollutant);
            total += value;
            // ties keep the earliest date
            if value < lowest.1 {
                lowest = (sample.date, value);
            }
            if value > highest.1 {
                highest = (sample.date, value);
            }
        }
        Some(YearlyStatistics {
            year,
            mean: total as f64 / samples.len() as f64,
            date_lowest: lowest.0,
            lowest_value: lowest.1,
            date_highest: highest.0,
            highest_value: highest.1,
            days: samples.len(),
        })
    }
}

/// Statistics for every calendar year in the series, ascending by year.
pub fn yearly_statistics(series: &DailySeries, pollutant: Pollutant) -> Vec<YearlyStatistics> {
    let mut by_year: BTreeMap<i32, Vec<&DailySample>> = BTreeMap::new();
    for sample in series {
        by_year.entry(sample.date.year()).or_default().push(sample);
    }
    by_year
        .iter()
        .filter_map(|(year, samples)| YearlyStatistics::from_samples(*year, samples, pollutant))
        .collect()
}
