//! Plain-text rendering of a [`ChartSpec`].
//!
//! Produces a fixed-size character grid: the min/max band is shaded, the
//! average curve drawn over it, doses shown as dashed columns, and the
//! selected-time markers placed last so they stay visible.

use super::spec::ChartSpec;
use crate::decay::HalfLifePreset;

const BAND: char = '░';
const AVERAGE: char = '•';
const DOSE_RULE: char = '┆';
const Y_LABEL_WIDTH: usize = 6;

/// Smallest plot area that still reads as a chart.
pub const MIN_WIDTH: usize = 20;
pub const MIN_HEIGHT: usize = 5;

fn marker_glyph(preset: HalfLifePreset) -> char {
    match preset {
        HalfLifePreset::Min => '▼',
        HalfLifePreset::Average => '◆',
        HalfLifePreset::Max => '▲',
    }
}

/// Linear interpolation of `ys` over ascending `xs` at `x`.
fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    match xs.len() {
        0 => 0.0,
        1 => ys[0],
        _ => {
            let idx = xs.partition_point(|&v| v < x);
            if idx == 0 {
                return ys[0];
            }
            if idx >= xs.len() {
                return ys[xs.len() - 1];
            }
            let (x0, x1) = (xs[idx - 1], xs[idx]);
            let (y0, y1) = (ys[idx - 1], ys[idx]);
            if x1 == x0 {
                y1
            } else {
                y0 + (y1 - y0) * (x - x0) / (x1 - x0)
            }
        }
    }
}

struct Grid {
    width: usize,
    height: usize,
    x_min: f64,
    x_max: f64,
    y_max: f64,
    cells: Vec<Vec<char>>,
}

impl Grid {
    fn new(width: usize, height: usize, chart: &ChartSpec) -> Self {
        Self {
            width,
            height,
            x_min: chart.x_axis.min,
            x_max: chart.x_axis.max,
            y_max: if chart.y_axis.max > 0.0 { chart.y_axis.max } else { 1.0 },
            cells: vec![vec![' '; width]; height],
        }
    }

    fn column_x(&self, col: usize) -> f64 {
        let frac = col as f64 / (self.width - 1) as f64;
        self.x_min + frac * (self.x_max - self.x_min)
    }

    fn x_column(&self, x: f64) -> Option<usize> {
        let range = self.x_max - self.x_min;
        if range <= 0.0 || x < self.x_min || x > self.x_max {
            return None;
        }
        Some((((x - self.x_min) / range) * (self.width - 1) as f64).round() as usize)
    }

    /// Row index counted from the top.
    fn y_row(&self, y: f64) -> usize {
        let frac = (y / self.y_max).clamp(0.0, 1.0);
        let from_bottom = (frac * (self.height - 1) as f64).round() as usize;
        self.height - 1 - from_bottom
    }

    fn set(&mut self, row: usize, col: usize, ch: char) {
        self.cells[row][col] = ch;
    }
}

/// Render `chart` into a `width` x `height` plot area plus labels.
pub fn render_ascii(chart: &ChartSpec, width: usize, height: usize) -> String {
    let width = width.max(MIN_WIDTH);
    let height = height.max(MIN_HEIGHT);
    let mut grid = Grid::new(width, height, chart);

    for col in 0..width {
        let x = grid.column_x(col);
        let upper = interpolate(&chart.band.x, &chart.band.upper, x);
        let lower = interpolate(&chart.band.x, &chart.band.lower, x);
        let top = grid.y_row(upper);
        let bottom = grid.y_row(lower);
        for row in top..=bottom {
            grid.set(row, col, BAND);
        }
    }

    for line in &chart.dose_lines {
        if let Some(col) = grid.x_column(line.x) {
            for row in 0..height {
                if grid.cells[row][col] == ' ' {
                    grid.set(row, col, DOSE_RULE);
                }
            }
        }
    }

    for col in 0..width {
        let x = grid.column_x(col);
        let avg = interpolate(&chart.average.x, &chart.average.y, x);
        let row = grid.y_row(avg);
        grid.set(row, col, AVERAGE);
    }

    for marker in &chart.markers {
        if let Some(col) = grid.x_column(marker.x) {
            let row = grid.y_row(marker.y);
            grid.set(row, col, marker_glyph(marker.preset));
        }
    }

    let mut output = format!("\n{}\n", chart.title);
    output.push_str(&"─".repeat(width + Y_LABEL_WIDTH + 2));
    output.push('\n');

    let y_label_rows = [
        (0, grid.y_max),
        (height / 2, grid.y_max * (height - 1 - height / 2) as f64 / (height - 1) as f64),
        (height - 1, 0.0),
    ];
    for (row, cells) in grid.cells.iter().enumerate() {
        let label = y_label_rows
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, v)| format!("{v:>width$.0}", width = Y_LABEL_WIDTH))
            .unwrap_or_else(|| " ".repeat(Y_LABEL_WIDTH));
        let line: String = cells.iter().collect();
        output.push_str(&format!("{label} ┤{line}\n"));
    }
    output.push_str(&format!(
        "{} └{}\n",
        " ".repeat(Y_LABEL_WIDTH),
        "─".repeat(width)
    ));
    output.push_str(&tick_label_line(chart, &grid));
    output.push('\n');
    output.push_str(&legend_line(chart));
    output
}

/// Tick labels laid out left to right, dropping any that would overlap.
fn tick_label_line(chart: &ChartSpec, grid: &Grid) -> String {
    let offset = Y_LABEL_WIDTH + 2;
    let mut line: Vec<char> = vec![' '; offset + grid.width + 16];
    let mut next_free = 0usize;
    for tick in &chart.x_axis.ticks {
        let Some(col) = grid.x_column(tick.value) else {
            continue;
        };
        let start = offset + col;
        if start < next_free {
            continue;
        }
        let label: Vec<char> = tick.label.chars().collect();
        if start + label.len() > line.len() {
            break;
        }
        line[start..start + label.len()].copy_from_slice(&label);
        next_free = start + label.len() + 2;
    }
    let text: String = line.into_iter().collect();
    text.trim_end().to_string()
}

fn legend_line(chart: &ChartSpec) -> String {
    let mut parts = vec![
        format!("{BAND} {}", chart.band.label),
        format!("{AVERAGE} {}", chart.average.label),
    ];
    for marker in &chart.markers {
        parts.push(format!(
            "{} {} {}",
            marker_glyph(marker.preset),
            marker.preset.label(),
            marker.text
        ));
    }
    parts.push(format!("{DOSE_RULE} dose"));
    format!("{}\n", parts.join("  "))
}
