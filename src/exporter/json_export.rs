use crate::model::{CatalogRecord, ExportError};
use std::fs;
use std::path::Path;

/// Pretty JSON array. serde_json leaves non-ASCII text unescaped.
pub fn write_json(records: &[CatalogRecord], path: &Path) -> Result<(), ExportError> {
    let body = serde_json::to_string_pretty(records)?;
    fs::write(path, body)?;
    Ok(())
}
