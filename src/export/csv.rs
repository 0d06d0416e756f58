use super::model::sheet_to_cells;
use crate::core::timeline::DaySheet;
use crate::errors::AppResult;
use std::path::Path;

/// Write one record per day/status/hour cell (one per segment when crossed).
pub(crate) fn export_csv(sheets: &[DaySheet], path: &Path) -> AppResult<()> {
    let mut wtr = ::csv::Writer::from_path(path)?;

    for sheet in sheets {
        for cell in sheet_to_cells(sheet) {
            wtr.serialize(&cell)?;
        }
    }

    wtr.flush()?;
    super::notify_export_success("CSV", path);
    Ok(())
}
