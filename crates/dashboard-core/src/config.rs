// File: crates/dashboard-core/src/config.rs
// Summary: Dashboard configuration with defaults and environment overrides.

use anyhow::Context;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::error::{DashboardError, Result};
use crate::generator::GeneratorSettings;

/// Smallest row count the dashboard will generate.
pub const MIN_ROWS: usize = 50;
/// Largest row count the dashboard will generate.
pub const MAX_ROWS: usize = 500;
pub const DEFAULT_ROWS: usize = 100;
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

#[derive(Clone, Debug)]
pub struct DashboardConfig {
    pub initial_rows: usize,
    pub row_bounds: RangeInclusive<usize>,
    pub histogram_bins: usize,
    /// Fixed RNG seed; `None` seeds from system entropy.
    pub seed: Option<u64>,
    pub export_dir: PathBuf,
    pub theme: String,
    pub generator: GeneratorSettings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            initial_rows: DEFAULT_ROWS,
            row_bounds: MIN_ROWS..=MAX_ROWS,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            seed: None,
            export_dir: PathBuf::from("."),
            theme: "dark".to_string(),
            generator: GeneratorSettings::default(),
        }
    }
}

impl DashboardConfig {
    /// Defaults overridden by `DASHBOARD_ROWS`, `DASHBOARD_SEED`, `DASHBOARD_EXPORT_DIR`
    /// and `DASHBOARD_THEME` when set. Row bounds are checked when a session is built,
    /// after any further overrides.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut cfg = Self::default();

        if let Some(rows) = var("DASHBOARD_ROWS") {
            cfg.initial_rows = rows
                .parse()
                .with_context(|| format!("DASHBOARD_ROWS must be an integer, got '{rows}'"))?;
        }
        if let Some(seed) = var("DASHBOARD_SEED") {
            cfg.seed = Some(
                seed.parse()
                    .with_context(|| format!("DASHBOARD_SEED must be a u64, got '{seed}'"))?,
            );
        }
        if let Some(dir) = var("DASHBOARD_EXPORT_DIR") {
            cfg.export_dir = PathBuf::from(dir);
        }
        if let Some(theme) = var("DASHBOARD_THEME") {
            cfg.theme = theme;
        }
        Ok(cfg)
    }

    /// Accept `rows` if it lies within the configured bounds.
    pub fn check_rows(&self, rows: usize) -> Result<usize> {
        if self.row_bounds.contains(&rows) {
            Ok(rows)
        } else {
            Err(DashboardError::RowCountOutOfRange {
                requested: rows,
                min: *self.row_bounds.start(),
                max: *self.row_bounds.end(),
            })
        }
    }
}

fn var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_controls() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.initial_rows, 100);
        assert_eq!(cfg.row_bounds, 50..=500);
        assert_eq!(cfg.histogram_bins, 30);
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn check_rows_rejects_outside_bounds() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.check_rows(50).unwrap(), 50);
        assert_eq!(cfg.check_rows(500).unwrap(), 500);
        assert!(matches!(
            cfg.check_rows(49),
            Err(DashboardError::RowCountOutOfRange { requested: 49, min: 50, max: 500 })
        ));
        assert!(cfg.check_rows(501).is_err());
    }

    #[test]
    fn env_rows_are_not_bounds_checked_before_overrides() {
        // Only test in this crate that touches DASHBOARD_ROWS.
        std::env::set_var("DASHBOARD_ROWS", "10");
        let cfg = DashboardConfig::from_env();
        std::env::remove_var("DASHBOARD_ROWS");
        let cfg = cfg.unwrap();
        assert_eq!(cfg.initial_rows, 10);
        assert!(cfg.check_rows(cfg.initial_rows).is_err());
    }
}
