use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Three-bucket seasonal classification used by the synthesis heuristics.
///
/// Winter is December through February, summer is June through August,
/// everything else is the shoulder season.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Summer,
    Shoulder,
}

impl Season {
    /// Classify a 1-based month. Out-of-range months fall into the shoulder bucket.
    pub fn from_month(month: u32) -> Season {
        match month {
            12 | 1 | 2 => Season::Winter,
            6..=8 => Season::Summer,
            _ => Season::Shoulder,
        }
    }

    pub fn of(date: &NaiveDate) -> Season {
        Season::from_month(date.month())
    }

    pub fn is_winter(&self) -> bool {
        matches!(self, Season::Winter)
    }

    pub fn is_summer(&self) -> bool {
        matches!(self, Season::Summer)
    }
}
