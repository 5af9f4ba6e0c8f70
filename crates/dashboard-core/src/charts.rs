// File: crates/dashboard-core/src/charts.rs
// Summary: Chart-mode dispatch and the aggregations behind each chart (daily totals, histogram, category totals, scatter).

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::config::DEFAULT_HISTOGRAM_BINS;
use crate::error::DashboardError;
use crate::record::{Category, Dataset};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ChartMode {
    #[default]
    Line,
    Histogram,
    Pie,
    Scatter,
}

impl ChartMode {
    pub const ALL: [ChartMode; 4] = [ChartMode::Line, ChartMode::Histogram, ChartMode::Pie, ChartMode::Scatter];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartMode::Line => "line",
            ChartMode::Histogram => "histogram",
            ChartMode::Pie => "pie",
            ChartMode::Scatter => "scatter",
        }
    }

    /// Human-facing chart title.
    pub fn title(&self) -> &'static str {
        match self {
            ChartMode::Line => "Daily value",
            ChartMode::Histogram => "Value distribution",
            ChartMode::Pie => "Value by category",
            ChartMode::Scatter => "Value vs quantity",
        }
    }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ChartMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DashboardError::UnsupportedChartMode(s.to_string()))
    }
}

/// Half-open `[lower, upper)` bucket; the last bucket of a histogram also holds its upper edge.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPoint {
    pub value: f64,
    pub quantity: u32,
    pub category: Category,
}

/// Chart-ready data for one mode.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartSpec {
    Line(Vec<(NaiveDate, f64)>),
    Histogram(Vec<HistogramBin>),
    Pie(Vec<(Category, f64)>),
    Scatter(Vec<ScatterPoint>),
}

impl ChartSpec {
    pub fn mode(&self) -> ChartMode {
        match self {
            ChartSpec::Line(_) => ChartMode::Line,
            ChartSpec::Histogram(_) => ChartMode::Histogram,
            ChartSpec::Pie(_) => ChartMode::Pie,
            ChartSpec::Scatter(_) => ChartMode::Scatter,
        }
    }

    /// Number of output points (line points, bins, slices or markers).
    pub fn len(&self) -> usize {
        match self {
            ChartSpec::Line(v) => v.len(),
            ChartSpec::Histogram(v) => v.len(),
            ChartSpec::Pie(v) => v.len(),
            ChartSpec::Scatter(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartOutcome {
    Chart(ChartSpec),
    /// The requested mode has no chart; front-ends show a notice.
    Unsupported { mode: String },
}

impl ChartOutcome {
    pub fn chart(&self) -> Option<&ChartSpec> {
        match self {
            ChartOutcome::Chart(spec) => Some(spec),
            ChartOutcome::Unsupported { .. } => None,
        }
    }
}

/// Dispatch on a mode name. Unknown names produce `ChartOutcome::Unsupported`.
pub fn render_chart(mode: &str, dataset: &Dataset) -> ChartOutcome {
    match mode.parse::<ChartMode>() {
        Ok(m) => ChartOutcome::Chart(build_chart(m, dataset, DEFAULT_HISTOGRAM_BINS)),
        Err(_) => {
            warn!(mode, "no chart for this mode");
            ChartOutcome::Unsupported { mode: mode.to_string() }
        }
    }
}

pub fn build_chart(mode: ChartMode, dataset: &Dataset, histogram_bins: usize) -> ChartSpec {
    match mode {
        ChartMode::Line => ChartSpec::Line(daily_totals(dataset)),
        ChartMode::Histogram => ChartSpec::Histogram(histogram(&dataset.values(), histogram_bins)),
        ChartMode::Pie => ChartSpec::Pie(category_totals(dataset)),
        ChartMode::Scatter => ChartSpec::Scatter(scatter_points(dataset)),
    }
}

/// Sum of `value` per date, in date order.
pub fn daily_totals(dataset: &Dataset) -> Vec<(NaiveDate, f64)> {
    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for r in dataset {
        *by_day.entry(r.date).or_default() += r.value;
    }
    by_day.into_iter().collect()
}

/// Sum of `value` per category present, in label order.
pub fn category_totals(dataset: &Dataset) -> Vec<(Category, f64)> {
    let mut by_cat: BTreeMap<Category, f64> = BTreeMap::new();
    for r in dataset {
        *by_cat.entry(r.category).or_default() += r.value;
    }
    by_cat.into_iter().collect()
}

pub fn scatter_points(dataset: &Dataset) -> Vec<ScatterPoint> {
    dataset
        .iter()
        .map(|r| ScatterPoint { value: r.value, quantity: r.quantity, category: r.category })
        .collect()
}

/// `bins` equal-width buckets spanning the observed range of the finite values.
/// All-equal input yields one bucket of width 1.0; empty input or `bins == 0` yields none.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if bins == 0 || finite.is_empty() {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        return vec![HistogramBin { lower: min, upper: min + 1.0, count: finite.len() }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in &finite {
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lower = min + width * i as f64;
            let upper = if i + 1 == bins { max } else { min + width * (i + 1) as f64 };
            HistogramBin { lower, upper, count }
        })
        .collect()
}
