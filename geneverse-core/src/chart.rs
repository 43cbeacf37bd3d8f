//! Chart.js configuration objects for the analytics page.

use serde::Serialize;

use crate::{or_placeholder, GeneStudies, PatternCount};

pub const PIE_PALETTE: [&str; 6] = [
    "#ff5a5f", "#087e8b", "#bfd7ea", "#0b3954", "#c81d25", "#f0a500",
];
pub const BAR_COLOR: &str = "#087e8b";
pub const BAR_LABEL: &str = "Number of Studies";

pub const INHERITANCE_ENDPOINT: &str = "charts/inheritance-patterns";
pub const MOST_STUDIED_ENDPOINT: &str = "charts/most-studied";

pub const UNAVAILABLE_MESSAGE: &str = "Chart data unavailable.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Pie,
    Bar,
}

/// A single-colour bar dataset serializes the colour as a string, a pie
/// dataset as one colour per slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    Palette(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<u64>,
    pub background_color: Colors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartType,
    pub data: ChartData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

impl ChartConfig {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub fn pie_chart_config(slices: &[PatternCount]) -> ChartConfig {
    ChartConfig {
        kind: ChartType::Pie,
        data: ChartData {
            labels: slices
                .iter()
                .map(|s| or_placeholder(s.pattern.as_deref()).to_string())
                .collect(),
            datasets: vec![Dataset {
                label: None,
                data: slices.iter().map(|s| s.count).collect(),
                background_color: Colors::Palette(
                    PIE_PALETTE.iter().map(|c| c.to_string()).collect(),
                ),
                border_color: Some("#fff".into()),
                border_width: Some(2),
            }],
        },
        options: None,
    }
}

pub fn bar_chart_config(bars: &[GeneStudies]) -> ChartConfig {
    ChartConfig {
        kind: ChartType::Bar,
        data: ChartData {
            labels: bars
                .iter()
                .map(|b| or_placeholder(b.gene.as_deref()).to_string())
                .collect(),
            datasets: vec![Dataset {
                label: Some(BAR_LABEL.into()),
                data: bars.iter().map(|b| b.studies).collect(),
                background_color: Colors::Single(BAR_COLOR.into()),
                border_color: None,
                border_width: None,
            }],
        },
        options: Some(serde_json::json!({
            "plugins": { "legend": { "display": false } },
            "scales": { "y": { "beginAtZero": true } }
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn pie_config_matches_chartjs_shape() {
        let slices = vec![
            PatternCount {
                pattern: Some("Autosomal dominant".into()),
                count: 3,
            },
            PatternCount {
                pattern: None,
                count: 1,
            },
        ];
        let value: Value = serde_json::from_str(&pie_chart_config(&slices).to_json().unwrap()).unwrap();
        assert_eq!(value["type"], "pie");
        assert_eq!(value["data"]["labels"], json!(["Autosomal dominant", "N/A"]));
        let ds = &value["data"]["datasets"][0];
        assert_eq!(ds["data"], json!([3, 1]));
        assert_eq!(ds["backgroundColor"].as_array().unwrap().len(), 6);
        assert_eq!(ds["borderColor"], "#fff");
        assert_eq!(ds["borderWidth"], 2);
        assert!(ds.get("label").is_none());
        assert!(value.get("options").is_none());
    }

    #[test]
    fn bar_config_hides_legend_and_starts_at_zero() {
        let bars = vec![GeneStudies {
            gene: Some("APOE".into()),
            studies: 12,
        }];
        let value: Value = serde_json::from_str(&bar_chart_config(&bars).to_json().unwrap()).unwrap();
        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["labels"], json!(["APOE"]));
        let ds = &value["data"]["datasets"][0];
        assert_eq!(ds["label"], "Number of Studies");
        assert_eq!(ds["backgroundColor"], "#087e8b");
        assert_eq!(value["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], true);
    }

    #[test]
    fn unnamed_bar_gets_placeholder_label() {
        let bars = vec![
            GeneStudies {
                gene: Some("APOE".into()),
                studies: 12,
            },
            GeneStudies {
                gene: None,
                studies: 3,
            },
        ];
        let config = bar_chart_config(&bars);
        assert_eq!(config.data.labels, vec!["APOE".to_string(), "N/A".to_string()]);
        assert_eq!(config.data.datasets[0].data, vec![12, 3]);
    }

    #[test]
    fn empty_data_still_builds() {
        let config = bar_chart_config(&[]);
        assert!(config.data.labels.is_empty());
        assert!(config.data.datasets[0].data.is_empty());
    }
}
