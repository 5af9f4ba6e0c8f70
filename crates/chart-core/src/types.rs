// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, plot rectangle).

/// Default surface width in pixels.
pub const WIDTH: i32 = 960;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 540;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Plot area left after removing the insets from a `width` x `height` surface.
    /// Degenerate surfaces collapse to a 1px rectangle instead of inverting.
    pub fn plot_rect(&self, width: i32, height: i32) -> PlotRect {
        let left = self.left as i32;
        let top = self.top as i32;
        let right = (width - self.right as i32).max(left + 1);
        let bottom = (height - self.bottom as i32).max(top + 1);
        PlotRect { left, top, right, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // Extra room at the top for the title, on the right for the legend.
        Self::new(72, 120, 48, 56)
    }
}

/// Pixel rectangle of the plotting area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PlotRect {
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) as f32 * 0.5,
            (self.top + self.bottom) as f32 * 0.5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_rect_subtracts_insets() {
        let r = Insets::new(10, 20, 5, 15).plot_rect(100, 50);
        assert_eq!(r, PlotRect { left: 10, top: 5, right: 80, bottom: 35 });
        assert_eq!(r.width(), 70);
        assert_eq!(r.height(), 30);
    }

    #[test]
    fn tiny_surface_never_inverts() {
        let r = Insets::default().plot_rect(10, 10);
        assert!(r.width() >= 1);
        assert!(r.height() >= 1);
    }
}
