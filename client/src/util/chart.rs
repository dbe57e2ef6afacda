//! Bar chart geometry for the dashboard SVG charts.
//!
//! Layout is computed here in plain numbers so `BarChart` only maps bars to
//! `<rect>`/`<text>` nodes.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 260.0;
const LABEL_BAND: f64 = 40.0;
const TOP_PAD: f64 = 20.0;
const GAP_RATIO: f64 = 0.3;

/// Palette cycled across bars.
pub const BAR_COLORS: [&str; 5] = ["#2e7d32", "#66bb6a", "#f9a825", "#1e88e5", "#8e24aa"];

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

impl Bar {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Y coordinate of the baseline bars grow up from.
pub fn baseline() -> f64 {
    CHART_HEIGHT - LABEL_BAND
}

/// Lay out `series` as evenly spaced bars scaled to the largest value.
/// An all-zero series yields zero-height bars.
#[allow(clippy::cast_precision_loss)]
pub fn layout_bars(series: &[(String, u64)]) -> Vec<Bar> {
    if series.is_empty() {
        return Vec::new();
    }
    let max = series.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let slot = CHART_WIDTH / series.len() as f64;
    let width = slot * (1.0 - GAP_RATIO);
    let usable = baseline() - TOP_PAD;

    series
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let height = if max == 0 { 0.0 } else { usable * (*value as f64) / (max as f64) };
            Bar {
                label: label.clone(),
                value: *value,
                x: slot * i as f64 + (slot - width) / 2.0,
                y: baseline() - height,
                width,
                height,
                color: BAR_COLORS[i % BAR_COLORS.len()],
            }
        })
        .collect()
}
