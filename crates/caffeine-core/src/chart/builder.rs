//! Curve sampling and chart assembly.
//!
//! The time axis runs from the first dose to 24h after the last one. All
//! three presets are evaluated on the same sample grid so the band and the
//! average line line up point for point.

use tracing::trace;

use super::spec::{
    Axis, Band, ChartSpec, Legend, LegendOrientation, LineSeries, PointMarker, Tick,
    VerticalLine,
};
use crate::decay::{cumulative, cumulative_at, HalfLifePreset};
use crate::dose::{Dose, DoseBounds};
use crate::time_fmt::format_total_hours;

/// Upper limit on samples per curve.
pub const MAX_SAMPLES: usize = 500;

/// Target number of x-axis ticks.
const TICK_TARGET: f64 = 10.0;

const BAND_LABEL: &str = "Min–Max Range";
const BAND_FILL: &str = "rgba(173,216,230,0.3)";
const DOSE_LINE_COLOR: &str = "gray";
const MARKER_SIZE: u32 = 10;

/// `n` evenly spaced values over `[start, end]`, endpoints included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            points[n - 1] = end;
            points
        }
    }
}

/// Number of samples for an axis of `span` hours.
pub fn sample_count(span: f64) -> usize {
    (span.trunc().max(0.0) as usize).min(MAX_SAMPLES)
}

/// Sample grid over `[first, last + 24]`.
pub fn sample_axis(bounds: &DoseBounds) -> Vec<f64> {
    linspace(bounds.first, bounds.end(), sample_count(bounds.span()))
}

/// Hours between ticks: about a tenth of the span, at least one.
pub fn tick_interval(span: f64) -> f64 {
    (span / TICK_TARGET).round_ties_even().max(1.0)
}

/// Tick positions from `floor(first)` up to `ceil(last + 24)`.
pub fn tick_positions(bounds: &DoseBounds) -> Vec<f64> {
    let start = bounds.first.floor();
    let stop = bounds.end().ceil() + 1.0;
    let interval = tick_interval(bounds.span());
    let count = ((stop - start) / interval).ceil().max(0.0) as usize;
    (0..count).map(|k| start + interval * k as f64).collect()
}

/// Assemble the chart for `doses`, marking `selected` hours.
///
/// Returns `None` for an empty dose list.
pub fn build_chart(doses: &[Dose], selected: f64) -> Option<ChartSpec> {
    let bounds = DoseBounds::of(doses)?;
    let hours = sample_axis(&bounds);
    trace!(
        samples = hours.len(),
        first = bounds.first,
        end = bounds.end(),
        "sampling caffeine curves"
    );

    let min_curve = cumulative(doses, &hours, HalfLifePreset::Min.hours());
    let avg_curve = cumulative(doses, &hours, HalfLifePreset::Average.hours());
    let max_curve = cumulative(doses, &hours, HalfLifePreset::Max.hours());

    let markers: Vec<PointMarker> = HalfLifePreset::ALL
        .iter()
        .map(|&preset| {
            let value = cumulative_at(doses, selected, preset.hours());
            PointMarker {
                preset,
                x: selected,
                y: value,
                text: format!("{value:.0} mg"),
                color: preset.color().to_string(),
                size: MARKER_SIZE,
            }
        })
        .collect();

    let dose_lines = doses
        .iter()
        .map(|dose| VerticalLine {
            x: dose.total_hours(),
            color: DOSE_LINE_COLOR.to_string(),
            dashed: true,
        })
        .collect();

    let ticks = tick_positions(&bounds)
        .into_iter()
        .map(|value| Tick {
            value,
            label: format_total_hours(value),
        })
        .collect();

    let y_max = max_curve
        .iter()
        .chain(markers.iter().map(|m| &m.y))
        .copied()
        .fold(0.0_f64, f64::max);

    let mut entries = vec![
        BAND_LABEL.to_string(),
        HalfLifePreset::Average.label().to_string(),
    ];
    entries.extend(HalfLifePreset::ALL.iter().map(|p| p.label().to_string()));

    Some(ChartSpec {
        title: "Cumulative Caffeine".to_string(),
        x_axis: Axis {
            title: "Time".to_string(),
            min: bounds.first,
            max: bounds.end(),
            ticks,
        },
        y_axis: Axis {
            title: "Caffeine Remaining (mg)".to_string(),
            min: 0.0,
            max: y_max,
            ticks: Vec::new(),
        },
        band: Band {
            label: BAND_LABEL.to_string(),
            x: hours.clone(),
            upper: max_curve,
            lower: min_curve,
            fill: BAND_FILL.to_string(),
        },
        average: LineSeries {
            label: HalfLifePreset::Average.label().to_string(),
            x: hours,
            y: avg_curve,
            color: HalfLifePreset::Average.color().to_string(),
            width: 2,
        },
        markers,
        dose_lines,
        legend: Legend {
            orientation: LegendOrientation::Horizontal,
            entries,
        },
    })
}
