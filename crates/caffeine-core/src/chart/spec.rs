//! Data-only chart description.
//!
//! A [`ChartSpec`] carries everything a renderer needs and nothing about how
//! to draw it. The CLI renders it as text or serializes it as JSON.

use serde::{Deserialize, Serialize};

use crate::decay::HalfLifePreset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Shaded region between the slowest and fastest elimination curves
    pub band: Band,
    /// Curve for the average half-life
    pub average: LineSeries,
    /// One point per preset at the selected time
    pub markers: Vec<PointMarker>,
    /// Vertical rule at each dose's intake time
    pub dose_lines: Vec<VerticalLine>,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    pub min: f64,
    pub max: f64,
    /// Labeled tick positions; empty means the renderer picks its own
    #[serde(default)]
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub label: String,
    pub x: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
    /// CSS color for the fill
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: String,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMarker {
    pub preset: HalfLifePreset,
    pub x: f64,
    pub y: f64,
    /// Rounded value, e.g. `"76 mg"`
    pub text: String,
    pub color: String,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalLine {
    pub x: f64,
    pub color: String,
    pub dashed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendOrientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub orientation: LegendOrientation,
    /// Entries in trace order
    pub entries: Vec<String>,
}
