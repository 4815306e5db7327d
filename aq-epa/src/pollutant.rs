use crate::error::AqError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 1 ppm of ozone is 1960 µg/m³ at 25°C.
pub const OZONE_PPM_TO_UGM3: f64 = 1960.0;

/// Convert an ozone concentration in parts per million to µg/m³.
pub fn ozone_ppm_to_ugm3(ppm: f64) -> f64 {
    ppm * OZONE_PPM_TO_UGM3
}

/// The pollutants charted by the dashboard.
///
/// Ordering matters: it is the dataset order of every labeled series
/// handed to the chart renderer.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pollutant {
    No2,
    Ozone,
    Pm25,
}

impl Pollutant {
    /// All pollutants in chart dataset order.
    pub const ALL: [Pollutant; 3] = [Pollutant::No2, Pollutant::Ozone, Pollutant::Pm25];

    /// Legend label shown by the chart.
    pub fn label(&self) -> &'static str {
        match self {
            Pollutant::No2 => "Nitrogen Dioxide (NO₂)",
            Pollutant::Ozone => "Ozone (O₃)",
            Pollutant::Pm25 => "PM2.5",
        }
    }

    /// Line colour as an `rgb(...)` string.
    pub fn border_color(&self) -> &'static str {
        match self {
            Pollutant::No2 => "rgb(255, 99, 132)",
            Pollutant::Ozone => "rgb(54, 162, 235)",
            Pollutant::Pm25 => "rgb(75, 192, 192)",
        }
    }

    /// Fill colour under the line as an `rgba(...)` string.
    pub fn background_color(&self) -> &'static str {
        match self {
            Pollutant::No2 => "rgba(255, 99, 132, 0.2)",
            Pollutant::Ozone => "rgba(54, 162, 235, 0.2)",
            Pollutant::Pm25 => "rgba(75, 192, 192, 0.2)",
        }
    }

    /// Unit in which EPA reports the annual summary for this pollutant.
    /// NO₂ has no annual summary; its synthetic values are in µg/m³.
    pub fn source_unit(&self) -> &'static str {
        match self {
            Pollutant::Ozone => "ppm",
            Pollutant::No2 | Pollutant::Pm25 => "µg/m³",
        }
    }

    /// Short machine name, matching the fixture and CLI spelling.
    pub fn key(&self) -> &'static str {
        match self {
            Pollutant::No2 => "no2",
            Pollutant::Ozone => "ozone",
            Pollutant::Pm25 => "pm25",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Pollutant {
    type Err = AqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "no2" => Ok(Pollutant::No2),
            "ozone" | "o3" => Ok(Pollutant::Ozone),
            "pm25" | "pm2.5" => Ok(Pollutant::Pm25),
            other => Err(AqError::UnknownPollutant(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pollutant() {
        assert_eq!("ozone".parse::<Pollutant>().unwrap(), Pollutant::Ozone);
        assert_eq!("PM2.5".parse::<Pollutant>().unwrap(), Pollutant::Pm25);
        assert_eq!(" no2 ".parse::<Pollutant>().unwrap(), Pollutant::No2);
        assert!(matches!(
            "co".parse::<Pollutant>(),
            Err(AqError::UnknownPollutant(_))
        ));
    }

    #[test]
    fn test_key_round_trips_through_from_str() {
        for pollutant in Pollutant::ALL {
            assert_eq!(pollutant.key().parse::<Pollutant>().unwrap(), pollutant);
        }
    }

    #[test]
    fn test_source_units() {
        assert_eq!(Pollutant::Ozone.source_unit(), "ppm");
        assert_eq!(Pollutant::Pm25.source_unit(), "µg/m³");
        assert_eq!(Pollutant::No2.source_unit(), "µg/m³");
    }

    #[test]
    fn test_ozone_conversion() {
        assert!((ozone_ppm_to_ugm3(0.02) - 39.2).abs() < 1e-9);
        assert!((ozone_ppm_to_ugm3(0.08) - 156.8).abs() < 1e-9);
    }
}
