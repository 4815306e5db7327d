use serde::{Deserialize, Serialize};

/// (label, percent by volume, "r, g, b") for each pie slice.
const SLICES: [(&str, f64, &str); 5] = [
    ("Nitrogen (N₂)", 78.08, "54, 162, 235"),
    ("Oxygen (O₂)", 20.95, "75, 192, 192"),
    ("Argon (Ar)", 0.93, "153, 102, 255"),
    ("Carbon Dioxide (CO₂)", 0.04, "255, 99, 132"),
    ("Other gases", 0.00, "255, 159, 64"),
];

const FILL_ALPHA: &str = "0.8";
const BORDER_ALPHA: &str = "1";

/// Pie slice values with per-slice styling.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionDataset {
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u32,
}

/// Static atmospheric composition in the `{labels, datasets}` shape the
/// pie chart consumes. Hand-specified, not generated.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CompositionData {
    pub labels: Vec<String>,
    pub datasets: Vec<CompositionDataset>,
}

impl CompositionData {
    pub fn atmosphere() -> CompositionData {
        let labels = SLICES.iter().map(|(label, _, _)| label.to_string()).collect();
        let dataset = CompositionDataset {
            data: SLICES.iter().map(|(_, pct, _)| *pct).collect(),
            background_color: SLICES
                .iter()
                .map(|(_, _, rgb)| format!("rgba({rgb}, {FILL_ALPHA})"))
                .collect(),
            border_color: SLICES
                .iter()
                .map(|(_, _, rgb)| format!("rgba({rgb}, {BORDER_ALPHA})"))
                .collect(),
            border_width: 1,
        };
        CompositionData {
            labels,
            datasets: vec![dataset],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CompositionData;

    #[test]
    fn test_atmosphere_slices() {
        let composition = CompositionData::atmosphere();
        assert_eq!(composition.labels.len(), 5);
        assert_eq!(composition.datasets.len(), 1);
        let dataset = &composition.datasets[0];
        assert_eq!(dataset.data, vec![78.08, 20.95, 0.93, 0.04, 0.00]);
        assert_eq!(dataset.background_color[0], "rgba(54, 162, 235, 0.8)");
        assert_eq!(dataset.border_color[4], "rgba(255, 159, 64, 1)");
        assert_eq!(dataset.border_width, 1);
    }

    #[test]
    fn test_composition_json_shape() {
        let json = serde_json::to_value(CompositionData::atmosphere()).unwrap();
        assert_eq!(json["labels"][3], "Carbon Dioxide (CO₂)");
        assert_eq!(json["datasets"][0]["borderWidth"], 1);
        assert_eq!(json["datasets"][0]["backgroundColor"][2], "rgba(153, 102, 255, 0.8)");
    }
}
