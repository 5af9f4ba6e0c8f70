// File: crates/dashboard-core/src/error.rs
// Summary: Error taxonomy for dashboard operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("row count {requested} is outside the allowed range {min}..={max}")]
    RowCountOutOfRange { requested: usize, min: usize, max: usize },

    #[error("invalid generator settings: {0}")]
    InvalidSettings(String),

    #[error("unsupported chart mode '{0}' (expected line, histogram, pie or scatter)")]
    UnsupportedChartMode(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("chart rendering failed: {0:#}")]
    Render(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
