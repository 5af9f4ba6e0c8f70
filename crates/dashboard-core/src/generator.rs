// File: crates/dashboard-core/src/generator.rs
// Summary: Synthetic dataset generator with an injected random source.

use chrono::NaiveDate;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::record::{Category, Dataset, Record};

/// First date of every generated dataset.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(d) => d,
    None => panic!("invalid epoch"),
};

/// Quantity is drawn from `QUANTITY_RANGE` (upper bound exclusive).
pub const QUANTITY_RANGE: std::ops::Range<u32> = 1..100;
/// Customer ids are drawn from `CUSTOMER_ID_RANGE` (upper bound exclusive).
pub const CUSTOMER_ID_RANGE: std::ops::Range<u32> = 1000..10000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorSettings {
    pub epoch: NaiveDate,
    pub value_mean: f64,
    pub value_std_dev: f64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self { epoch: EPOCH, value_mean: 100.0, value_std_dev: 15.0 }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Generator {
    settings: GeneratorSettings,
}

impl Generator {
    pub fn new(settings: GeneratorSettings) -> Result<Self> {
        if !settings.value_mean.is_finite() {
            return Err(DashboardError::InvalidSettings(format!(
                "value mean must be finite, got {}",
                settings.value_mean
            )));
        }
        if !settings.value_std_dev.is_finite() || settings.value_std_dev < 0.0 {
            return Err(DashboardError::InvalidSettings(format!(
                "value std dev must be finite and non-negative, got {}",
                settings.value_std_dev
            )));
        }
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Build `rows` records with consecutive daily dates from the epoch.
    /// Each row samples its fields independently from `rng`.
    pub fn generate<R: Rng>(&self, rows: usize, rng: &mut R) -> Dataset {
        let s = &self.settings;
        let dataset: Dataset = s
            .epoch
            .iter_days()
            .take(rows)
            .map(|date| {
                let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
                let z: f64 = StandardNormal.sample(&mut *rng);
                Record {
                    date,
                    category,
                    value: s.value_mean + s.value_std_dev * z,
                    quantity: rng.gen_range(QUANTITY_RANGE),
                    customer_id: rng.gen_range(CUSTOMER_ID_RANGE),
                }
            })
            .collect();
        debug!(rows = dataset.len(), epoch = %s.epoch, "generated dataset");
        dataset
    }
}

/// Generate `rows` records with the default settings.
pub fn generate<R: Rng>(rows: usize, rng: &mut R) -> Dataset {
    Generator::default().generate(rows, rng)
}
