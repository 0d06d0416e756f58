// src/export/model.rs

use crate::core::timeline::{DaySheet, HOURS_PER_DAY};
use crate::utils::display_annotation;
use serde::Serialize;

/// Whole-trip document written by the JSON export.
#[derive(Serialize, Debug)]
pub struct TripExport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    pub days: &'a [DaySheet],
}

/// Flat per-cell record used by the CSV export.
///
/// A cell crossed by several intervals yields one record per segment; a cell
/// with no segment yields a single record with empty geometry.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CellExport {
    pub day: u32,
    pub status: String,
    pub hour: usize,
    pub active: bool,
    pub width: Option<f64>,
    pub offset: Option<f64>,
    pub annotation: Option<String>,
}

pub(crate) fn sheet_to_cells(sheet: &DaySheet) -> Vec<CellExport> {
    let mut out = Vec::new();

    for row in &sheet.rows {
        for hour in 0..HOURS_PER_DAY {
            let base = CellExport {
                day: sheet.day,
                status: row.status.as_wire().to_string(),
                hour,
                active: row.active_hours[hour],
                width: None,
                offset: None,
                annotation: None,
            };

            let mut any = false;
            for seg in row.segments_in(hour) {
                any = true;
                let annotation = if seg.overlap.show_annotation {
                    row.transitions[seg.interval]
                        .annotation
                        .as_deref()
                        .map(display_annotation)
                } else {
                    None
                };
                out.push(CellExport {
                    width: Some(seg.overlap.width_fraction),
                    offset: Some(seg.overlap.offset_fraction),
                    annotation,
                    ..base.clone()
                });
            }

            if !any {
                out.push(base);
            }
        }
    }

    out
}
