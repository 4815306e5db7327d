/// Error types for the air quality core crates
use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for air quality data operations
#[derive(Error, Debug)]
pub enum AqError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    /// Date parsing failed
    #[error("Failed to parse date: {0}")]
    DateParse(String),

    /// Generation range runs backwards
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// A filter selection that is neither a number nor "all"
    #[error("Invalid filter selection: {0}")]
    InvalidSelection(String),

    /// Pollutant name not recognised
    #[error("Unknown pollutant: {0}")]
    UnknownPollutant(String),
}

/// Type alias for Results using AqError
pub type Result<T> = std::result::Result<T, AqError>;
