// src/export/logic.rs

use crate::core::timeline::DaySheet;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::TripExport;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::info;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write derived day sheets to `file` in `format`.
    ///
    /// An existing file is refused unless `force` is set.
    pub fn export(
        sheets: &[DaySheet],
        trip_id: Option<String>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        if file.trim().is_empty() {
            return Err(AppError::Export("output path is empty".into()));
        }
        let path = Path::new(file);

        ensure_writable(path, force)?;

        if sheets.is_empty() {
            warning("No days found in trip log, nothing to export.");
            return Ok(());
        }

        info!(format = format.as_str(), days = sheets.len(), path = %path.display(), "exporting");

        match format {
            ExportFormat::Csv => export_csv(sheets, path)?,
            ExportFormat::Json => export_json(
                &TripExport {
                    trip_id,
                    days: sheets,
                },
                path,
            )?,
        }

        Ok(())
    }
}
