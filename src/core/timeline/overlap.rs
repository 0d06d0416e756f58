//! Geometry of a transition interval inside individual hour cells.

use super::HOURS_PER_DAY;
use super::transitions::TransitionInterval;
use serde::Serialize;

/// An overlap starting this close (in hours) to the interval's own start
/// counts as the interval's first cell.
pub const ANNOTATION_START_TOLERANCE: f64 = 0.1;

/// Minimum share of a cell a segment must cover to carry annotation text.
pub const ANNOTATION_MIN_WIDTH: f64 = 0.20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn of(interval: &TransitionInterval) -> Self {
        if interval.start_hour < interval.end_hour {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }

    /// Marker rotation used by the sheet renderer.
    pub fn rotation_degrees(&self) -> i32 {
        match self {
            Direction::Ascending => 10,
            Direction::Descending => -10,
        }
    }
}

/// Portion of one hour cell covered by a transition interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellOverlap {
    pub hour: usize,
    /// Covered share of the cell, in `[0, 1]`.
    pub width_fraction: f64,
    /// Where the covered share begins inside the cell, in `[0, 1]`.
    pub offset_fraction: f64,
    pub show_annotation: bool,
    pub direction: Direction,
}

/// Overlap of `interval` with cell `[hour, hour + 1)`, if any.
pub fn cell_overlap(interval: &TransitionInterval, hour: usize) -> Option<CellOverlap> {
    let cell_start = hour as f64;
    let cell_end = cell_start + 1.0;

    if !(interval.start_hour < cell_end && interval.end_hour > cell_start) {
        return None;
    }

    let overlap_start = interval.start_hour.max(cell_start);
    let overlap_end = interval.end_hour.min(cell_end);
    let width_fraction = overlap_end - overlap_start;
    let offset_fraction = overlap_start - cell_start;

    let starts_here = (overlap_start - interval.start_hour).abs() < ANNOTATION_START_TOLERANCE;
    let show_annotation =
        interval.annotation.is_some() && starts_here && width_fraction > ANNOTATION_MIN_WIDTH;

    Some(CellOverlap {
        hour,
        width_fraction,
        offset_fraction,
        show_annotation,
        direction: Direction::of(interval),
    })
}

/// Every cell of the day touched by `interval`, in hour order.
pub fn overlaps(interval: &TransitionInterval) -> Vec<CellOverlap> {
    (0..HOURS_PER_DAY)
        .filter_map(|h| cell_overlap(interval, h))
        .collect()
}
