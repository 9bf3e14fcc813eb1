//! Cumulative caffeine chart.
//!
//! [`build_chart`] turns a dose list and a selected time into a data-only
//! [`ChartSpec`]; [`render_ascii`] is the terminal renderer for it.

mod builder;
mod render;
mod spec;

pub use builder::{
    build_chart, linspace, sample_axis, sample_count, tick_interval, tick_positions, MAX_SAMPLES,
};
pub use render::{render_ascii, MIN_HEIGHT, MIN_WIDTH};
pub use spec::{
    Axis, Band, ChartSpec, Legend, LegendOrientation, LineSeries, PointMarker, Tick, VerticalLine,
};
