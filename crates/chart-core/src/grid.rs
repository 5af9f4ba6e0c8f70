// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Map `v` from the `[min, max]` data range into the `[lo_px, hi_px]` pixel range.
#[inline]
pub fn project(v: f64, min: f64, max: f64, lo_px: i32, hi_px: i32) -> f32 {
    let span = (max - min).max(1e-9);
    lo_px as f32 + ((v - min) / span) as f32 * (hi_px - lo_px) as f32
}
