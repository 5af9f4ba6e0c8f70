// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Axis, Chart, RenderOptions, Series, SeriesType, Slice, Theme};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background color and alpha in top-left pixel (RGBA)
    let bg = Theme::dark().background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn light_theme_changes_background() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_slices(vec![Slice::new("A", 1.0)]));

    let mut opts = RenderOptions::default();
    opts.width = 64;
    opts.height = 64;
    opts.draw_labels = false;
    opts.theme = Theme::light();
    let (px, _, _, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    let bg = Theme::light().background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);
}
