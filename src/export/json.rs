use super::model::TripExport;
use crate::errors::AppResult;
use std::path::Path;

/// Write the derived sheets as pretty JSON.
pub(crate) fn export_json(doc: &TripExport<'_>, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, json)?;
    super::notify_export_success("JSON", path);
    Ok(())
}
