//! Normalization of wire day logs into typed, ordered checkpoints.
//!
//! A day either validates completely or fails on its first bad checkpoint;
//! there is no partial result.

use crate::errors::{AppError, AppResult};
use crate::models::{Checkpoint, ClockTime, DayLog, DutyStatus, RawCheckpoint, RawDayLog, TripLogs};
use tracing::{debug, warn};

pub fn validate_checkpoint(day: u32, index: usize, raw: &RawCheckpoint) -> AppResult<Checkpoint> {
    let time = ClockTime::parse(&raw.time).map_err(|_| AppError::MalformedTime {
        day,
        index,
        value: raw.time.clone(),
    })?;

    let status = DutyStatus::from_wire(&raw.status).ok_or_else(|| AppError::UnknownStatus {
        day,
        index,
        value: raw.status.clone(),
    })?;

    Ok(Checkpoint {
        time,
        status,
        location: raw.location.clone(),
        annotation: raw.annotation.clone(),
    })
}

pub fn validate_day(raw: &RawDayLog) -> AppResult<DayLog> {
    let mut graph_points: Vec<Checkpoint> = Vec::with_capacity(raw.graph_points.len());

    for (index, point) in raw.graph_points.iter().enumerate() {
        let cp = validate_checkpoint(raw.day, index, point)?;

        if let Some(prev) = graph_points.last() {
            if cp.time < prev.time {
                warn!(day = raw.day, index, "checkpoints out of order");
                return Err(AppError::OrderingViolation {
                    day: raw.day,
                    index,
                    previous: prev.time_str(),
                    current: cp.time_str(),
                });
            }
        }

        graph_points.push(cp);
    }

    debug!(day = raw.day, checkpoints = graph_points.len(), "day validated");

    Ok(DayLog {
        day: raw.day,
        graph_points,
        summary: raw.summary,
    })
}

/// Validate every day; the first unrenderable day fails the whole trip.
pub fn validate_trip(trip: &TripLogs) -> AppResult<Vec<DayLog>> {
    trip.logs.iter().map(validate_day).collect()
}
