//! Commands that generate the daily series and print views of it.

use crate::output::{open_output, write_csv_records, write_json, write_labeled_csv, write_series_csv};
use crate::Format;
use aq_data::{AirQualityData, FilterQuery, GeneratorConfig};
use aq_epa::pollutant::Pollutant;
use log::info;

/// Print the full daily series.
pub fn run_series(config: &GeneratorConfig, format: Format, output: Option<&str>) -> anyhow::Result<()> {
    let data = AirQualityData::initialize(config)?;
    let writer = open_output(output)?;
    match format {
        Format::Csv => write_series_csv(writer, data.daily_series()),
        Format::Json => write_json(writer, data.time_series_data()),
    }
}

/// Print the days matching a month/year selection. Each part is a number
/// or "all"; anything else is rejected before generating.
pub fn run_filter(
    config: &GeneratorConfig,
    month: &str,
    year: &str,
    format: Format,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let query = FilterQuery::parse(month, year)?;
    let data = AirQualityData::initialize(config)?;
    let filtered = data.get_filtered(&query);
    info!(
        "{} of {} days match month {:?} year {:?}",
        filtered.len(),
        data.daily_series().len(),
        query.month,
        query.year
    );
    let writer = open_output(output)?;
    match format {
        Format::Csv => write_labeled_csv(writer, &filtered),
        Format::Json => write_json(writer, &filtered),
    }
}

/// Print the months and years available for filtering as JSON.
pub fn run_months(config: &GeneratorConfig) -> anyhow::Result<()> {
    let data = AirQualityData::initialize(config)?;
    write_json(open_output(None)?, &data.get_available_months())
}

/// Print per-year statistics of one pollutant as CSV.
pub fn run_stats(config: &GeneratorConfig, pollutant: &str) -> anyhow::Result<()> {
    let pollutant: Pollutant = pollutant.parse()?;
    let data = AirQualityData::initialize(config)?;
    write_csv_records(open_output(None)?, data.yearly_statistics(pollutant))
}
