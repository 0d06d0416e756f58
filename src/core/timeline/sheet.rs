//! Per-day aggregation: one row per duty status, combining the occupancy
//! grid with that status' transition intervals and their cell geometry.

use super::overlap::{CellOverlap, overlaps};
use super::resolver::{OccupancyGrid, close_day, resolve};
use super::transitions::{TransitionInterval, extract};
use super::validate::validate_day;
use super::HOURS_PER_DAY;
use crate::errors::AppResult;
use crate::models::{DayLog, DutyStatus, LogSummary, TripLogs};
use serde::Serialize;
use std::thread;
use tracing::debug;

/// Knobs that change how a sheet is derived.
#[derive(Debug, Clone, Copy, Default)]
pub struct SheetOptions {
    /// Let the last status of the day run to 24:00.
    pub close_day: bool,
}

/// A cell segment of one transition interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Index into [`StatusRow::transitions`].
    pub interval: usize,
    #[serde(flatten)]
    pub overlap: CellOverlap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusRow {
    pub status: DutyStatus,
    pub active_hours: [bool; HOURS_PER_DAY],
    pub transitions: Vec<TransitionInterval>,
    pub segments: Vec<Segment>,
}

impl StatusRow {
    /// Segments drawn inside cell `hour`, in interval order.
    pub fn segments_in(&self, hour: usize) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(move |s| s.overlap.hour == hour)
    }

    pub fn active_count(&self) -> usize {
        self.active_hours.iter().filter(|a| **a).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySheet {
    pub day: u32,
    pub grid: OccupancyGrid,
    pub rows: Vec<StatusRow>,
    pub summary: LogSummary,
}

impl DaySheet {
    pub fn row(&self, status: DutyStatus) -> Option<&StatusRow> {
        self.rows.iter().find(|r| r.status == status)
    }
}

fn build_row(grid: &OccupancyGrid, day: &DayLog, status: DutyStatus) -> StatusRow {
    let transitions = extract(&day.graph_points, status);
    let segments = transitions
        .iter()
        .enumerate()
        .flat_map(|(i, t)| {
            overlaps(t)
                .into_iter()
                .map(move |overlap| Segment { interval: i, overlap })
        })
        .collect();

    StatusRow {
        status,
        active_hours: grid.mask(status),
        transitions,
        segments,
    }
}

pub fn build_day_sheet(day: &DayLog, options: SheetOptions) -> DaySheet {
    let closed;
    let day = if options.close_day {
        closed = DayLog {
            graph_points: close_day(&day.graph_points),
            ..day.clone()
        };
        &closed
    } else {
        day
    };

    let grid = resolve(&day.graph_points);
    let rows = DutyStatus::ALL
        .iter()
        .map(|s| build_row(&grid, day, *s))
        .collect();

    debug!(day = day.day, close_day = options.close_day, "sheet built");

    DaySheet {
        day: day.day,
        grid,
        rows,
        summary: day.summary,
    }
}

/// Validate and build every day of a trip, preserving input order.
///
/// Days share nothing, so each is built on its own scoped thread.
pub fn build_trip_sheets(trip: &TripLogs, options: SheetOptions) -> AppResult<Vec<DaySheet>> {
    if trip.logs.len() <= 1 {
        return trip
            .logs
            .iter()
            .map(|raw| validate_day(raw).map(|d| build_day_sheet(&d, options)))
            .collect();
    }

    thread::scope(|scope| {
        let handles: Vec<_> = trip
            .logs
            .iter()
            .map(|raw| scope.spawn(move || validate_day(raw).map(|d| build_day_sheet(&d, options))))
            .collect();

        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(res) => res,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}
