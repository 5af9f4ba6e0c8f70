// File: crates/dashboard-core/src/session.rs
// Summary: Per-session dashboard state: row count, current dataset, selected chart mode, random source.

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

use crate::analyzer::{analyze, Analysis};
use crate::charts::{build_chart, ChartMode, ChartSpec};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::export;
use crate::generator::Generator;
use crate::record::Dataset;

/// One user's dashboard. Each session owns its dataset; nothing is shared between sessions.
pub struct DashboardSession {
    config: DashboardConfig,
    generator: Generator,
    row_count: usize,
    dataset: Option<Dataset>,
    chart_mode: ChartMode,
    rng: StdRng,
}

impl DashboardSession {
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let row_count = config.check_rows(config.initial_rows)?;
        let generator = Generator::new(config.generator)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            generator,
            row_count,
            dataset: None,
            chart_mode: ChartMode::default(),
            rng,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Set the row count used by the next generation. Does not regenerate.
    /// Out-of-range values are rejected and the previous count is kept.
    pub fn set_row_count(&mut self, rows: usize) -> Result<()> {
        self.row_count = self.config.check_rows(rows)?;
        Ok(())
    }

    /// Replace the dataset with a freshly generated one of the current row count.
    pub fn regenerate(&mut self) -> &Dataset {
        let fresh = self.generator.generate(self.row_count, &mut self.rng);
        info!(rows = fresh.len(), "regenerated dataset");
        self.dataset.insert(fresh)
    }

    /// Current dataset, generated on first access.
    pub fn dataset(&mut self) -> &Dataset {
        let (generator, rng, rows) = (&self.generator, &mut self.rng, self.row_count);
        self.dataset.get_or_insert_with(|| generator.generate(rows, rng))
    }

    /// Current dataset without triggering generation.
    pub fn current_dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn get_metrics(&mut self) -> Analysis {
        analyze(self.dataset())
    }

    pub fn chart_mode(&self) -> ChartMode {
        self.chart_mode
    }

    pub fn set_chart_mode(&mut self, mode: ChartMode) {
        self.chart_mode = mode;
    }

    /// Chart data for the selected mode over the current dataset.
    pub fn current_chart(&mut self) -> ChartSpec {
        let (mode, bins) = (self.chart_mode, self.config.histogram_bins);
        build_chart(mode, self.dataset(), bins)
    }

    pub fn export_csv(&mut self) -> Result<String> {
        export::export_csv(self.dataset())
    }

    /// Write `data_export_<timestamp>.csv` into the configured export directory.
    pub fn write_export(&mut self, now: &DateTime<Local>) -> Result<PathBuf> {
        let dir = self.config.export_dir.clone();
        export::write_export(&dir, self.dataset(), now)
    }
}
