use crate::error::{AqError, Result};
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

/// Embedded descriptions of the atmospheric gases listed by the dashboard.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/gases.csv");

/// A descriptive record for one atmospheric constituent. Inert reference
/// data: nothing is derived from it.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gas {
    pub id: u32,
    pub name: String,
    /// Share of the atmosphere by volume, in percent.
    pub percentage: f64,
    pub description: String,
    pub health_effects: String,
    pub environmental_impact: String,
}

impl Gas {
    /// Parse a CSV string of gas records into a vector of Gases.
    ///
    /// Expected CSV columns: id, name, percentage, description,
    /// health_effects, environmental_impact
    pub fn parse_gas_csv(csv_object: &str) -> Result<Vec<Gas>> {
        let mut gases: Vec<Gas> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            gases.push(Gas::try_from(&record)?);
        }
        Ok(gases)
    }

    /// The eight gases shown on the dashboard's list page, in display order.
    pub fn gases_data() -> Vec<Gas> {
        match Gas::parse_gas_csv(CSV_OBJECT) {
            Ok(gases) => gases,
            Err(e) => panic!("failed to parse embedded gases csv: {e}"),
        }
    }
}

fn field<'a>(record: &'a StringRecord, idx: usize, name: &str) -> Result<&'a str> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| AqError::InvalidFormat(format!("gas record missing {name}")))
}

impl TryFrom<&StringRecord> for Gas {
    type Error = AqError;

    fn try_from(record: &StringRecord) -> Result<Self> {
        let id = field(record, 0, "id")?
            .parse::<u32>()
            .map_err(|e| AqError::InvalidFormat(format!("gas id: {e}")))?;
        let percentage = field(record, 2, "percentage")?
            .parse::<f64>()
            .map_err(|e| AqError::InvalidFormat(format!("gas percentage: {e}")))?;
        Ok(Gas {
            id,
            name: field(record, 1, "name")?.to_string(),
            percentage,
            description: field(record, 3, "description")?.to_string(),
            health_effects: field(record, 4, "health_effects")?.to_string(),
            environmental_impact: field(record, 5, "environmental_impact")?.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gases_data() {
        let gases = Gas::gases_data();
        assert_eq!(gases.len(), 8);
        let ids: Vec<u32> = gases.iter().map(|g| g.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<u32>>());
        assert_eq!(gases[0].name, "Nitrogen (N₂)");
        assert_eq!(gases[0].percentage, 78.08);
        assert_eq!(gases[7].name, "Particulate Matter (PM2.5)");
        assert_eq!(gases[7].percentage, 0.000001);
        // quoted fields keep their embedded commas
        assert!(gases[1].health_effects.contains("hypoxia, leading"));
    }

    #[test]
    fn test_bad_percentage() {
        let csv = "id,name,percentage,description,health_effects,environmental_impact\n\
                   1,Xenon,lots,a,b,c\n";
        assert!(matches!(
            Gas::parse_gas_csv(csv),
            Err(AqError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_gas_json_uses_camel_case() {
        let gases = Gas::gases_data();
        let json = serde_json::to_value(&gases[3]).unwrap();
        assert_eq!(json["id"], 4);
        assert!(json["healthEffects"].is_string());
        assert!(json["environmentalImpact"].is_string());
    }
}
