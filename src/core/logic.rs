use crate::config::Config;
use crate::core::timeline::{DaySheet, SheetOptions, build_day_sheet, build_trip_sheets, validate_day};
use crate::errors::{AppError, AppResult};
use crate::models::TripLogs;
use std::fs;
use std::path::Path;
use tracing::info;

pub struct Core;

impl Core {
    /// Read a trip-logs JSON document from disk.
    pub fn load_trip(path: &Path) -> AppResult<TripLogs> {
        let content = fs::read_to_string(path)?;
        let trip = TripLogs::from_json(&content)?;
        info!(
            path = %path.display(),
            days = trip.logs.len(),
            "trip logs loaded"
        );
        Ok(trip)
    }

    /// Sheet options from config, with an optional command-line override.
    pub fn sheet_options(cfg: &Config, close_day_flag: bool) -> SheetOptions {
        SheetOptions {
            close_day: close_day_flag || cfg.close_day,
        }
    }

    /// Build the sheets to show: one day when `day` is given, every day otherwise.
    pub fn build_sheets(
        trip: &TripLogs,
        day: Option<u32>,
        options: SheetOptions,
    ) -> AppResult<Vec<DaySheet>> {
        match day {
            Some(d) => {
                let raw = trip.day(d).ok_or(AppError::NoSuchDay(d))?;
                let log = validate_day(raw)?;
                Ok(vec![build_day_sheet(&log, options)])
            }
            None => build_trip_sheets(trip, options),
        }
    }
}
