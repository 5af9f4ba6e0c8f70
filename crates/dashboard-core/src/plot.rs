// File: crates/dashboard-core/src/plot.rs
// Summary: Bridge from chart-ready data to renderable chart-core charts.

use chart_core::{Axis, Chart, RenderOptions, Series, SeriesType, Slice, TickFormat};
use chrono::Datelike;

use crate::charts::ChartSpec;
use crate::error::{DashboardError, Result};
use crate::record::Category;

/// Build a chart with titled, autoscaled axes for `spec`.
pub fn to_chart(spec: &ChartSpec) -> Chart {
    let mut chart = Chart::new().with_title(spec.mode().title());
    match spec {
        ChartSpec::Line(points) => {
            chart.x_axis = Axis::new("Date", 0.0, 1.0).with_format(TickFormat::Date);
            chart.y_axis = Axis::new("Value", 0.0, 1.0);
            let xy = points
                .iter()
                .map(|(d, v)| (d.num_days_from_ce() as f64, *v))
                .collect();
            chart.add_series(Series::with_data(SeriesType::Line, xy));
        }
        ChartSpec::Histogram(bins) => {
            chart.x_axis = Axis::new("Value", 0.0, 1.0);
            chart.y_axis = Axis::new("Count", 0.0, 1.0).with_format(TickFormat::Number { decimals: 0 });
            let width = bins.first().map(|b| b.width()).unwrap_or(1.0);
            let bars = bins.iter().map(|b| (b.lower, b.count as f64)).collect();
            chart.add_series(Series::histogram(bars, width));
        }
        ChartSpec::Pie(slices) => {
            let slices = slices
                .iter()
                .map(|(c, v)| Slice::new(c.label(), *v).with_color_slot(c.index()))
                .collect();
            chart.add_series(Series::from_slices(slices));
        }
        ChartSpec::Scatter(points) => {
            chart.x_axis = Axis::new("Value", 0.0, 1.0);
            chart.y_axis = Axis::new("Quantity", 0.0, 1.0).with_format(TickFormat::Number { decimals: 0 });
            // One series per category in label order so each keeps its palette slot.
            for category in Category::ALL {
                let xy: Vec<(f64, f64)> = points
                    .iter()
                    .filter(|p| p.category == category)
                    .map(|p| (p.value, f64::from(p.quantity)))
                    .collect();
                let mut series = Series::with_data(SeriesType::Scatter, xy);
                if !series.is_empty() {
                    series = series.with_name(category.label());
                }
                chart.add_series(series);
            }
        }
    }
    chart.autoscale_axes(0.02);
    chart
}

/// Render `spec` to PNG bytes.
pub fn render_png(spec: &ChartSpec, opts: &RenderOptions) -> Result<Vec<u8>> {
    to_chart(spec)
        .render_to_png_bytes(opts)
        .map_err(DashboardError::Render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{HistogramBin, ScatterPoint};
    use chrono::NaiveDate;

    #[test]
    fn line_axis_uses_dates() {
        let d0 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let chart = to_chart(&ChartSpec::Line(vec![(d0, 10.0), (d1, 30.0)]));
        assert_eq!(chart.x_axis.format, TickFormat::Date);
        assert_eq!(chart.x_axis.format_tick(chart.x_axis.min), "2024-01-01");
        assert_eq!(chart.x_axis.format_tick(chart.x_axis.max), "2024-01-03");
        assert!(chart.y_axis.min < 10.0 && chart.y_axis.max > 30.0);
    }

    #[test]
    fn histogram_axis_covers_all_bins() {
        let bins = vec![
            HistogramBin { lower: 0.0, upper: 2.0, count: 3 },
            HistogramBin { lower: 2.0, upper: 4.0, count: 1 },
        ];
        let chart = to_chart(&ChartSpec::Histogram(bins));
        assert_eq!(chart.x_axis.min, 0.0);
        assert_eq!(chart.x_axis.max, 4.0);
        assert!(chart.y_axis.min <= 0.0);
        assert!(chart.y_axis.max >= 3.0);
    }

    #[test]
    fn scatter_keeps_category_palette_slots() {
        let points = vec![
            ScatterPoint { value: 90.0, quantity: 5, category: Category::C },
            ScatterPoint { value: 110.0, quantity: 50, category: Category::C },
            ScatterPoint { value: 100.0, quantity: 20, category: Category::A },
        ];
        let chart = to_chart(&ChartSpec::Scatter(points));
        assert_eq!(chart.series.len(), 4);
        assert_eq!(chart.series[0].name.as_deref(), Some("A"));
        assert!(chart.series[1].name.is_none());
        assert_eq!(chart.series[2].data_xy.len(), 2);
    }

    #[test]
    fn pie_is_pie_only() {
        let chart = to_chart(&ChartSpec::Pie(vec![(Category::A, 5.0), (Category::B, 7.0)]));
        assert!(chart.is_pie_only());
        assert_eq!(chart.series[0].slices.len(), 2);
    }

    #[test]
    fn pie_slices_share_scatter_palette_slots() {
        // A is absent; B and D must keep their own colors rather than shift down.
        let chart = to_chart(&ChartSpec::Pie(vec![(Category::B, 5.0), (Category::D, 7.0)]));
        let slots: Vec<usize> = chart.series[0].slices.iter().enumerate().map(|(i, s)| s.palette_index(i)).collect();
        assert_eq!(slots, vec![Category::B.index(), Category::D.index()]);
    }
}
