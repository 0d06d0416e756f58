//! Duty-status timeline engine.
//!
//! Turns a day's ordered checkpoints into the 24-hour occupancy grid and the
//! per-status transition intervals used to draw change markers. Every function
//! here is pure: fresh output per call, no shared state.

pub mod overlap;
pub mod resolver;
pub mod sheet;
pub mod transitions;
pub mod validate;

pub use overlap::{CellOverlap, Direction, cell_overlap, overlaps};
pub use resolver::{OccupancyGrid, close_day, resolve};
pub use sheet::{DaySheet, Segment, SheetOptions, StatusRow, build_day_sheet, build_trip_sheets};
pub use transitions::{TransitionInterval, extract};
pub use validate::{validate_day, validate_trip};

/// Number of hour cells on a daily log sheet.
pub const HOURS_PER_DAY: usize = 24;
