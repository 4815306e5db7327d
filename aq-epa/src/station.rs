use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Metadata about the monitor the annual summary was taken from.
/// Display surfaces show it verbatim.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationInfo {
    pub name: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub address: String,
    pub data_source: String,
    /// Parameters the station actually reports.
    pub parameters: Vec<String>,
    pub data_years: String,
}

impl StationInfo {
    /// The Fairhope High School monitor backing the embedded annual summary.
    pub fn fairhope() -> StationInfo {
        StationInfo {
            name: "Fairhope High School".to_string(),
            location: "Fairhope, Alabama".to_string(),
            coordinates: Coordinates {
                lat: 30.497478,
                lon: -87.880258,
            },
            address: "1 Pirate Drive, Fairhope, Alabama".to_string(),
            data_source: "EPA Annual Concentration by Monitor".to_string(),
            parameters: vec!["Ozone".to_string(), "PM2.5".to_string()],
            data_years: "2014-2024".to_string(),
        }
    }
}
