// File: crates/chart-core/src/series.rs
// Summary: Series model for line, histogram, scatter and pie data.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Histogram, // (x, count) bars from baseline; x is the bar's left edge
    Scatter,   // unconnected (x, y) markers
    Pie,       // labelled slices, drawn without axes
}

/// One labelled pie wedge. `value` must be non-negative to be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Fixed palette index; unset slices are colored by position.
    pub color_slot: Option<usize>,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, color_slot: None }
    }

    pub fn with_color_slot(mut self, slot: usize) -> Self {
        self.color_slot = Some(slot);
        self
    }

    /// Palette index for a slice at `position` in its series.
    pub fn palette_index(&self, position: usize) -> usize {
        self.color_slot.unwrap_or(position)
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub name: Option<String>,      // legend entry
    pub data_xy: Vec<(f64, f64)>,  // used by Line/Histogram/Scatter
    pub slices: Vec<Slice>,        // used by Pie
    pub baseline: Option<f64>,     // used by Histogram (origin)
    pub bar_width: Option<f64>,    // used by Histogram, in data units
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self {
            series_type,
            name: None,
            data_xy: Vec::new(),
            slices: Vec::new(),
            baseline: None,
            bar_width: None,
        }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(series_type) }
    }

    pub fn from_slices(slices: Vec<Slice>) -> Self {
        Self { slices, ..Self::new(SeriesType::Pie) }
    }

    /// Histogram bars whose left edges are the x values, each `width` wide.
    pub fn histogram(bars: Vec<(f64, f64)>, width: f64) -> Self {
        Self { bar_width: Some(width), baseline: Some(0.0), ..Self::with_data(SeriesType::Histogram, bars) }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get baseline value or default (0.0) when not set.
    pub fn baseline_value(&self) -> f64 { self.baseline.unwrap_or(0.0) }

    /// Bar width in data units; falls back to the spacing of the first two bars, then 1.0.
    pub fn bar_width_value(&self) -> f64 {
        if let Some(w) = self.bar_width.filter(|w| *w > 0.0) {
            return w;
        }
        match self.data_xy.as_slice() {
            [a, b, ..] if b.0 > a.0 => b.0 - a.0,
            _ => 1.0,
        }
    }

    /// Sum of drawable (positive, finite) slice values.
    pub fn slice_total(&self) -> f64 {
        self.slices
            .iter()
            .map(|s| s.value)
            .filter(|v| v.is_finite() && *v > 0.0)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        match self.series_type {
            SeriesType::Pie => self.slices.is_empty(),
            _ => self.data_xy.is_empty(),
        }
    }
}
