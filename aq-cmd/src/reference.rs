//! Commands that print the embedded reference data. None of them need the
//! generated series.

use crate::output::{open_output, write_csv_records, write_json};
use aq_epa::annual_stat::AnnualSummary;
use aq_epa::composition::CompositionData;
use aq_epa::gas::Gas;
use aq_epa::pollutant::Pollutant;
use aq_epa::station::StationInfo;
use serde::Serialize;
use std::io::Write;

/// A flattened annual summary record: the fixture's columns plus the unit
/// the mean and max are reported in.
#[derive(Debug, Serialize)]
pub struct SummaryRow {
    pub pollutant: Pollutant,
    pub year: i32,
    pub mean: Option<f64>,
    pub max: Option<f64>,
    pub observations: u32,
    pub unit: &'static str,
}

pub fn summary_rows(summary: &AnnualSummary) -> Vec<SummaryRow> {
    summary
        .records()
        .map(|(pollutant, year, stat)| SummaryRow {
            pollutant,
            year,
            mean: stat.mean,
            max: stat.max,
            observations: stat.observation_count,
            unit: pollutant.source_unit(),
        })
        .collect()
}

pub fn write_summary<W: Write>(writer: W, summary: &AnnualSummary) -> anyhow::Result<()> {
    write_csv_records(writer, summary_rows(summary))
}

pub fn run_summary() -> anyhow::Result<()> {
    write_summary(open_output(None)?, &AnnualSummary::fairhope())
}

pub fn run_station() -> anyhow::Result<()> {
    write_json(open_output(None)?, &StationInfo::fairhope())
}

pub fn run_gases() -> anyhow::Result<()> {
    write_json(open_output(None)?, &Gas::gases_data())
}

pub fn run_composition() -> anyhow::Result<()> {
    write_json(open_output(None)?, &CompositionData::atmosphere())
}
