//! Command implementations for the air quality CLI.
//!
//! Each subcommand generates (or looks up) dashboard data and prints it
//! as CSV or JSON, to stdout or to a file.

use aq_data::GeneratorConfig;
use aq_utils::dates::parse_date;
use clap::{Args, Subcommand, ValueEnum};

pub mod output;
pub mod query;
pub mod reference;

/// Output encoding for series data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Json,
}

/// Options shared by every subcommand that generates the series.
#[derive(Args, Debug, Clone)]
pub struct GeneratorArgs {
    /// Seed for the random source; omit for a fresh series each run
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// First day to generate (YYYY-MM-DD)
    #[arg(long, global = true, default_value = "2014-01-01")]
    pub start: String,

    /// Last day to generate (YYYY-MM-DD)
    #[arg(long, global = true, default_value = "2024-12-31")]
    pub end: String,
}

impl GeneratorArgs {
    pub fn to_config(&self) -> anyhow::Result<GeneratorConfig> {
        let config = GeneratorConfig {
            start: parse_date(&self.start)?,
            end: parse_date(&self.end)?,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the full daily series
    Series {
        #[arg(short, long, value_enum, default_value_t = Format::Csv)]
        format: Format,

        /// Write to this path instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the days of one month/year selection
    Filter {
        /// Month number (1-12) or "all"
        #[arg(short, long, default_value = "12")]
        month: String,

        /// Year or "all"
        #[arg(short, long, default_value = "2024")]
        year: String,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Write to this path instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the months and years available for filtering
    Months,

    /// Per-year statistics of one pollutant over the generated series
    Stats {
        /// no2, ozone or pm25
        #[arg(short, long)]
        pollutant: String,
    },

    /// Print the embedded EPA annual summary
    Summary,

    /// Print the monitoring station metadata
    Station,

    /// Print the atmospheric gas descriptions
    Gases,

    /// Print the atmospheric composition chart data
    Composition,
}

pub fn run(command: Command, generator: &GeneratorArgs) -> anyhow::Result<()> {
    match command {
        Command::Series { format, output } => {
            query::run_series(&generator.to_config()?, format, output.as_deref())
        }
        Command::Filter {
            month,
            year,
            format,
            output,
        } => query::run_filter(&generator.to_config()?, &month, &year, format, output.as_deref()),
        Command::Months => query::run_months(&generator.to_config()?),
        Command::Stats { pollutant } => query::run_stats(&generator.to_config()?, &pollutant),
        Command::Summary => reference::run_summary(),
        Command::Station => reference::run_station(),
        Command::Gases => reference::run_gases(),
        Command::Composition => reference::run_composition(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn args(start: &str, end: &str, seed: Option<u64>) -> GeneratorArgs {
        GeneratorArgs {
            seed,
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    #[test]
    fn test_generator_args_to_config() {
        let config = args("2020-01-01", "2020-12-31", Some(9)).to_config().unwrap();
        assert_eq!(config.start, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(config.end, NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_generator_args_reject_bad_input() {
        assert!(args("2020-13-01", "2020-12-31", None).to_config().is_err());
        assert!(args("2021-01-01", "2020-12-31", None).to_config().is_err());
    }
}
