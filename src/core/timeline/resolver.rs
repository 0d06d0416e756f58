use super::HOURS_PER_DAY;
use crate::models::{Checkpoint, ClockTime, DutyStatus};
use serde::Serialize;
use std::ops::Index;
use tracing::{debug, trace};

/// Status assigned to each whole hour of the day (index = hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OccupancyGrid([DutyStatus; HOURS_PER_DAY]);

impl Default for OccupancyGrid {
    fn default() -> Self {
        Self([DutyStatus::default(); HOURS_PER_DAY])
    }
}

impl OccupancyGrid {
    pub fn get(&self, hour: usize) -> Option<DutyStatus> {
        self.0.get(hour).copied()
    }

    pub fn as_slice(&self) -> &[DutyStatus] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = DutyStatus> + '_ {
        self.0.iter().copied()
    }

    /// `true` for every hour owned by `status`.
    pub fn mask(&self, status: DutyStatus) -> [bool; HOURS_PER_DAY] {
        let mut out = [false; HOURS_PER_DAY];
        for (slot, s) in out.iter_mut().zip(self.0.iter()) {
            *slot = *s == status;
        }
        out
    }

    pub fn hours_in(&self, status: DutyStatus) -> usize {
        self.0.iter().filter(|s| **s == status).count()
    }
}

impl Index<usize> for OccupancyGrid {
    type Output = DutyStatus;

    fn index(&self, hour: usize) -> &DutyStatus {
        &self.0[hour]
    }
}

/// Assign whole hours to statuses.
///
/// Each consecutive pair `(current, next)` gives hours
/// `floor(current) .. floor(next)` to `current.status`; minutes are ignored.
/// Pairs that do not move forward by at least one whole hour assign nothing,
/// and the last checkpoint never owns any hour on its own. Later pairs win on
/// overlap. Unassigned hours stay off-duty.
pub fn resolve(checkpoints: &[Checkpoint]) -> OccupancyGrid {
    let mut grid = OccupancyGrid::default();

    for (i, pair) in checkpoints.windows(2).enumerate() {
        let (current, next) = (&pair[0], &pair[1]);
        let start_hour = usize::from(current.time.hour());
        let end_hour = usize::from(next.time.hour()).min(HOURS_PER_DAY);

        if end_hour <= start_hour {
            trace!(
                pair = i,
                from = %current.time,
                to = %next.time,
                status = %current.status,
                "pair spans no whole hour, nothing assigned"
            );
            continue;
        }

        for slot in &mut grid.0[start_hour..end_hour] {
            *slot = current.status;
        }
        debug!(
            pair = i,
            status = %current.status,
            start_hour,
            end_hour,
            "assigned hours"
        );
    }

    grid
}

/// Copy of `checkpoints` with a synthetic `24:00` checkpoint carrying the
/// last status, so the final status of the day owns the remaining hours.
///
/// Empty input, or input already ending at `24:00`, is returned unchanged.
pub fn close_day(checkpoints: &[Checkpoint]) -> Vec<Checkpoint> {
    let mut out = checkpoints.to_vec();
    match checkpoints.last() {
        Some(last) if !last.time.is_end_of_day() => {
            out.push(Checkpoint::new(ClockTime::END_OF_DAY, last.status));
        }
        _ => {}
    }
    out
}
