//! Core types and embedded EPA reference data for the air quality dashboard.
//!
//! Everything here is baked in at compile time: the annual summary table,
//! the gas descriptions, the atmospheric composition and the station
//! metadata. Nothing is fetched or persisted.

pub mod annual_stat;
pub mod composition;
pub mod date_range;
pub mod error;
pub mod gas;
pub mod pollutant;
pub mod season;
pub mod station;

pub use error::{AqError, Result};
