// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (RGBA8 / PNG) using Skia CPU raster surfaces.

use anyhow::{anyhow, bail, Context, Result};
use skia_safe as skia;

use crate::grid::{linspace, project};
use crate::series::{Series, SeriesType};
use crate::theme::Theme;
use crate::types::{Insets, PlotRect, WIDTH, HEIGHT};
use crate::view::ViewState;
use crate::Axis;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, tick labels, axis labels and legend. Off for pixel-stable snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data, padding Y by `margin` (fraction of span).
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// True when every series is a pie; such charts skip grid and axes.
    pub fn is_pie_only(&self) -> bool {
        !self.series.is_empty() && self.series.iter().all(|s| s.series_type == SeriesType::Pie)
    }

    /// Render into a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let width = opts.width.max(1);
        let height = opts.height.max(1);
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;

        self.paint(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None::<skia::ColorSpace>,
        );
        let row_bytes = width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * height as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            bail!("pixel readback from raster surface failed");
        }
        Ok((pixels, width as u32, height as u32, row_bytes))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (rgba, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, rgba)
            .context("RGBA buffer does not match surface size")?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);
        let plot = opts.insets.plot_rect(opts.width, opts.height);

        if opts.draw_labels {
            if let Some(title) = &self.title {
                draw_text(canvas, title, plot.left as f32, 30.0, 18.0, theme.title);
            }
        }

        if self.is_pie_only() {
            for s in &self.series {
                draw_pie_series(canvas, &plot, s, theme);
            }
        } else {
            draw_grid(canvas, &plot, theme);
            draw_axes(canvas, &plot, &self.x_axis, &self.y_axis, theme, opts.draw_labels);

            canvas.save();
            canvas.clip_rect(rect_of(&plot), skia::ClipOp::Intersect, false);
            for (i, s) in self.series.iter().enumerate() {
                let color = theme.series_color(i);
                match s.series_type {
                    SeriesType::Line => draw_line_series(canvas, &plot, &self.x_axis, &self.y_axis, s, color),
                    SeriesType::Histogram => draw_histogram_series(canvas, &plot, &self.x_axis, &self.y_axis, s, theme.histogram),
                    SeriesType::Scatter => draw_scatter_series(canvas, &plot, &self.x_axis, &self.y_axis, s, color),
                    // pies only render on their own
                    SeriesType::Pie => {}
                }
            }
            canvas.restore();
        }

        if opts.draw_labels {
            draw_legend(canvas, &plot, &legend_entries(self, theme), theme);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn rect_of(plot: &PlotRect) -> skia::Rect {
    skia::Rect::from_ltrb(plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32)
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_text(canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
    let paint = fill_paint(color);
    let mut font = skia::Font::default();
    font.set_size(size);
    canvas.draw_str(text, (x, y), &font, &paint);
}

fn draw_grid(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    let (l, t, r, b) = (plot.left as f64, plot.top as f64, plot.right as f64, plot.bottom as f64);

    // verticals
    for x in linspace(l, r, 10) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    // horizontals
    for y in linspace(t, b, 6) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
    draw_labels: bool,
) {
    let axis_paint = stroke_paint(theme.axis_line, 1.5);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    if !draw_labels {
        return;
    }

    for v in linspace(x.min, x.max, 5) {
        let px = project(v, x.min, x.max, plot.left, plot.right);
        draw_text(canvas, &x.format_tick(v), px - 30.0, b + 18.0, 11.0, theme.tick);
    }
    for v in linspace(y.min, y.max, 6) {
        let py = project(v, y.min, y.max, plot.bottom, plot.top);
        draw_text(canvas, &y.format_tick(v), l - 64.0, py + 4.0, 11.0, theme.tick);
    }

    draw_text(canvas, &x.label, r - 80.0, b + 42.0, 14.0, theme.axis_label);
    draw_text(canvas, &y.label, l, t - 8.0, 14.0, theme.axis_label);
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    let sx = |x: f64| project(x, x_axis.min, x_axis.max, plot.left, plot.right);
    let sy = |y: f64| project(y, y_axis.min, y_axis.max, plot.bottom, plot.top);

    let data = &series.data_xy;
    match data.as_slice() {
        [] => {}
        [(x, y)] => {
            canvas.draw_circle((sx(*x), sy(*y)), 3.0, &fill_paint(color));
        }
        [(x0, y0), rest @ ..] => {
            let mut path = skia::Path::new();
            path.move_to((sx(*x0), sy(*y0)));
            for &(x, y) in rest {
                path.line_to((sx(x), sy(y)));
            }
            canvas.draw_path(&path, &stroke_paint(color, 2.0));
        }
    }
}

fn draw_histogram_series(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    if series.data_xy.is_empty() { return; }

    let sx = |x: f64| project(x, x_axis.min, x_axis.max, plot.left, plot.right);
    let sy = |y: f64| project(y, y_axis.min, y_axis.max, plot.bottom, plot.top);

    let body = fill_paint(color);
    let outline = stroke_paint(skia::Color::from_argb(160, 0, 0, 0), 1.0);
    let width = series.bar_width_value();
    let base = sy(series.baseline_value());

    for &(x, count) in &series.data_xy {
        let left = sx(x);
        let right = sx(x + width);
        let top = sy(count);
        let rect = skia::Rect::from_ltrb(left, top.min(base), right.max(left + 1.0), top.max(base));
        canvas.draw_rect(rect, &body);
        canvas.draw_rect(rect, &outline);
    }
}

fn draw_scatter_series(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    let marker = fill_paint(color);
    for &(x, y) in &series.data_xy {
        let px = project(x, x_axis.min, x_axis.max, plot.left, plot.right);
        let py = project(y, y_axis.min, y_axis.max, plot.bottom, plot.top);
        canvas.draw_circle((px, py), 3.5, &marker);
    }
}

fn draw_pie_series(canvas: &skia::Canvas, plot: &PlotRect, series: &Series, theme: &Theme) {
    let total = series.slice_total();
    if total <= 0.0 { return; }

    let (cx, cy) = plot.center();
    let radius = (plot.width().min(plot.height()) as f32 * 0.45).max(1.0);
    let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);
    let edge = stroke_paint(theme.background, 1.5);

    // Start at 12 o'clock, clockwise.
    let mut start = -90.0f32;
    for (i, slice) in series.slices.iter().enumerate() {
        if !slice.value.is_finite() || slice.value <= 0.0 { continue; }
        let sweep = (slice.value / total * 360.0) as f32;
        canvas.draw_arc(oval, start, sweep, true, &fill_paint(theme.series_color(slice.palette_index(i))));
        canvas.draw_arc(oval, start, sweep, true, &edge);
        start += sweep;
    }
}

fn legend_entries(chart: &Chart, theme: &Theme) -> Vec<(String, skia::Color)> {
    let mut entries = Vec::new();
    for (i, s) in chart.series.iter().enumerate() {
        match s.series_type {
            SeriesType::Pie => {
                let total = s.slice_total();
                for (j, slice) in s.slices.iter().enumerate() {
                    let pct = if total > 0.0 { slice.value.max(0.0) / total * 100.0 } else { 0.0 };
                    entries.push((format!("{} {:.1}%", slice.label, pct), theme.series_color(slice.palette_index(j))));
                }
            }
            _ => {
                if let Some(name) = &s.name {
                    entries.push((name.clone(), theme.series_color(i)));
                }
            }
        }
    }
    entries
}

fn draw_legend(canvas: &skia::Canvas, plot: &PlotRect, entries: &[(String, skia::Color)], theme: &Theme) {
    let x = plot.right as f32 + 16.0;
    let mut y = plot.top as f32 + 8.0;
    for (label, color) in entries {
        canvas.draw_rect(skia::Rect::from_xywh(x, y, 12.0, 12.0), &fill_paint(*color));
        draw_text(canvas, label, x + 18.0, y + 11.0, 13.0, theme.axis_label);
        y += 22.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Slice;

    #[test]
    fn pie_only_detection() {
        let mut chart = Chart::new();
        assert!(!chart.is_pie_only());
        chart.add_series(Series::from_slices(vec![Slice::new("A", 1.0)]));
        assert!(chart.is_pie_only());
        chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 1.0)]));
        assert!(!chart.is_pie_only());
    }

    #[test]
    fn legend_lists_named_series_and_slices() {
        let theme = Theme::dark();
        let mut scatter = Chart::new();
        scatter.add_series(Series::with_data(SeriesType::Scatter, vec![(1.0, 1.0)]).with_name("A"));
        scatter.add_series(Series::with_data(SeriesType::Scatter, vec![(2.0, 2.0)]));
        let entries = legend_entries(&scatter, &theme);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "A");

        let mut pie = Chart::new();
        pie.add_series(Series::from_slices(vec![Slice::new("A", 1.0), Slice::new("B", 3.0)]));
        let labels: Vec<String> = legend_entries(&pie, &theme).into_iter().map(|e| e.0).collect();
        assert_eq!(labels, vec!["A 25.0%".to_string(), "B 75.0%".to_string()]);
    }

    #[test]
    fn pie_legend_honours_color_slots() {
        let theme = Theme::dark();
        let mut pie = Chart::new();
        pie.add_series(Series::from_slices(vec![
            Slice::new("B", 1.0).with_color_slot(1),
            Slice::new("D", 1.0).with_color_slot(3),
        ]));
        let colors: Vec<_> = legend_entries(&pie, &theme).into_iter().map(|e| e.1).collect();
        assert_eq!(colors, vec![theme.series_color(1), theme.series_color(3)]);
    }
}
