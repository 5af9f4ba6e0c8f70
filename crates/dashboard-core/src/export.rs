// File: crates/dashboard-core/src/export.rs
// Summary: CSV export/import of datasets and export file naming.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{DashboardError, Result};
use crate::record::{Dataset, Record};

pub const CSV_MIME: &str = "text/csv";
pub const CSV_HEADER: [&str; 5] = ["Date", "Category", "Value", "Quantity", "Customer_ID"];

/// Serialize to CSV text: header row, then one row per record in dataset order.
/// The header is written even for an empty dataset.
pub fn export_csv(dataset: &Dataset) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;
    for r in dataset {
        wtr.serialize(r)?;
    }
    let bytes = wtr.into_inner().map_err(|e| DashboardError::Io(e.into_error()))?;
    debug!(rows = dataset.len(), bytes = bytes.len(), "exported csv");
    String::from_utf8(bytes)
        .map_err(|e| DashboardError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Parse text produced by `export_csv` back into a dataset.
pub fn parse_csv(text: &str) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let records = rdr
        .deserialize::<Record>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Dataset::from_records(records))
}

/// `data_export_<YYYYMMDD_HHMMSS>.csv` for the given wall-clock time.
pub fn export_file_name<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("data_export_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Write the CSV export into `dir` (created if missing) and return the file path.
pub fn write_export<Tz>(dir: &Path, dataset: &Dataset, now: &DateTime<Tz>) -> Result<PathBuf>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let text = export_csv(dataset)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(now));
    std::fs::write(&path, text)?;
    info!(path = %path.display(), rows = dataset.len(), mime = CSV_MIME, "wrote csv export");
    Ok(path)
}
