use crate::error::{AqError, Result};
use crate::pollutant::Pollutant;
use csv::ReaderBuilder;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Embedded EPA "Annual Concentration by Monitor" figures for the
/// Fairhope, Alabama monitor, 2014 through 2024.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/epa_annual_fairhope.csv");

/// One EPA annual summary record for a (pollutant, year).
///
/// A `None` mean means the monitor reported nothing that year; consumers
/// interpolate instead of treating the year as zero.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualStat {
    pub mean: Option<f64>,
    pub max: Option<f64>,
    pub observation_count: u32,
}

impl AnnualStat {
    pub fn has_data(&self) -> bool {
        self.mean.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct AnnualStatRow {
    pollutant: Pollutant,
    year: i32,
    mean: Option<f64>,
    max: Option<f64>,
    observations: u32,
}

/// The sparse annual table, keyed by pollutant then year.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct AnnualSummary(BTreeMap<Pollutant, BTreeMap<i32, AnnualStat>>);

impl AnnualSummary {
    /// Parse a CSV string with the columns
    /// `pollutant,year,mean,max,observations`. Empty `mean`/`max` cells
    /// mark a year without data.
    pub fn parse_csv(csv_object: &str) -> Result<AnnualSummary> {
        let mut summary = AnnualSummary::default();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());
        for row in rdr.deserialize() {
            let row: AnnualStatRow = row?;
            if let Some(mean) = row.mean {
                if !mean.is_finite() || mean < 0.0 {
                    return Err(AqError::InvalidFormat(format!(
                        "{} {}: mean must be a non-negative number, got {mean}",
                        row.pollutant, row.year
                    )));
                }
            }
            let stat = AnnualStat {
                mean: row.mean,
                max: row.max,
                observation_count: row.observations,
            };
            if summary.insert(row.pollutant, row.year, stat).is_some() {
                return Err(AqError::InvalidFormat(format!(
                    "duplicate record for {} {}",
                    row.pollutant, row.year
                )));
            }
        }
        debug!("parsed {} annual summary records", summary.len());
        Ok(summary)
    }

    /// The embedded Fairhope table.
    pub fn fairhope() -> AnnualSummary {
        match AnnualSummary::parse_csv(CSV_OBJECT) {
            Ok(summary) => summary,
            Err(e) => panic!("failed to parse embedded annual summary csv: {e}"),
        }
    }

    pub fn insert(&mut self, pollutant: Pollutant, year: i32, stat: AnnualStat) -> Option<AnnualStat> {
        self.0.entry(pollutant).or_default().insert(year, stat)
    }

    pub fn get(&self, pollutant: Pollutant, year: i32) -> Option<&AnnualStat> {
        self.0.get(&pollutant).and_then(|years| years.get(&year))
    }

    /// The annual mean for a year, if the monitor reported one. A year
    /// missing from the table is treated the same as a year without data.
    pub fn known_mean(&self, pollutant: Pollutant, year: i32) -> Option<f64> {
        self.get(pollutant, year).and_then(|stat| stat.mean)
    }

    /// All records for one pollutant, ordered by year.
    pub fn years(&self, pollutant: Pollutant) -> impl Iterator<Item = (i32, &AnnualStat)> {
        self.0
            .get(&pollutant)
            .into_iter()
            .flat_map(|years| years.iter().map(|(year, stat)| (*year, stat)))
    }

    /// Every record, ordered by pollutant then year.
    pub fn records(&self) -> impl Iterator<Item = (Pollutant, i32, &AnnualStat)> {
        self.0.iter().flat_map(|(pollutant, years)| {
            years.iter().map(move |(year, stat)| (*pollutant, *year, stat))
        })
    }

    pub fn len(&self) -> usize {
        self.0.values().map(|years| years.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
