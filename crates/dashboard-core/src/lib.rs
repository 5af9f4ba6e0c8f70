// File: crates/dashboard-core/src/lib.rs
// Summary: Dashboard library entry point; synthetic dataset, metrics, chart building, CSV export, session state.

pub mod error;
pub mod config;
pub mod record;
pub mod generator;
pub mod analyzer;
pub mod charts;
pub mod plot;
pub mod export;
pub mod format;
pub mod session;

pub use error::{DashboardError, Result};
pub use config::DashboardConfig;
pub use record::{Category, Dataset, Record};
pub use generator::{generate, Generator, GeneratorSettings};
pub use analyzer::{analyze, Analysis, Metrics};
pub use charts::{render_chart, build_chart, ChartMode, ChartOutcome, ChartSpec, HistogramBin, ScatterPoint};
pub use export::{export_csv, parse_csv, export_file_name, write_export, CSV_MIME};
pub use session::DashboardSession;
