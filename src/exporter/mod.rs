// Output writers: JSON, CSV, XLSX and the generated JS data module
pub mod csv_export;
pub mod js_module;
pub mod json_export;
pub mod xlsx_export;

use crate::config::{ExportFormat, OutputConfig};
use crate::model::{CatalogRecord, ExportError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// `{dir}/{prefix}_{stamp}.{ext}`
pub fn timestamped_path(dir: &Path, prefix: &str, stamp: &str, format: ExportFormat) -> PathBuf {
    dir.join(format!("{}_{}.{}", prefix, stamp, format.extension()))
}

/// Writes every configured format and returns the files written, in config order.
pub fn export_all(
    records: &[CatalogRecord],
    output: &OutputConfig,
    stamp: &str,
) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(&output.dir)?;

    let mut written = Vec::with_capacity(output.formats.len());
    for format in &output.formats {
        let path = timestamped_path(&output.dir, &output.prefix, stamp, *format);
        match format {
            ExportFormat::Json => json_export::write_json(records, &path)?,
            ExportFormat::Csv => csv_export::write_csv(records, &path)?,
            ExportFormat::Xlsx => xlsx_export::write_xlsx(records, &path)?,
        }
        info!("Saved {}", path.display());
        written.push(path);
    }
    Ok(written)
}
