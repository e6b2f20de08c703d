//! Output formatting and persistence for rendered reports.
//!
//! Supports writing the rendered document, exporting the statistics tables
//! as CSV, and JSON serialization of the report summary.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::model::Summary;
use crate::stats;
use csv::WriterBuilder;
use std::path::Path;

/// Writes a rendered report document to `path`, creating parent
/// directories as needed.
pub fn write_report(path: &str, contents: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    info!(path, bytes = contents.len(), "Report written");
    Ok(())
}

/// Exports each statistics table as a CSV file under `dir`.
///
/// Files are overwritten on every run; each carries a header row plus one
/// row per category.
pub fn export_tables(dir: &str) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    write_csv(&format!("{dir}/season_stats.csv"), &stats::season_rows())?;
    write_csv(&format!("{dir}/weather_stats.csv"), &stats::weather_rows())?;
    write_csv(&format!("{dir}/day_type_stats.csv"), &stats::day_type_rows())?;

    info!(dir, tables = 3, "CSV export complete");
    Ok(())
}

fn write_csv<T: Serialize>(path: &str, rows: &[T]) -> Result<()> {
    debug!(path, rows = rows.len(), "Writing CSV table");

    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Logs the report summary as pretty-printed JSON.
pub fn print_json(summary: &Summary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
