//! Chart payloads
//!
//! The shape handed to a chart renderer: labels plus one or more datasets.

use serde::{Deserialize, Serialize};

/// Fill color for a dataset: one color for all points, or one per point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fill {
    Single(String),
    PerPoint(Vec<String>),
}

/// One series of values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: Fill,
}

/// Labels and datasets for one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}
