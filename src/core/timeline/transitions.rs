use crate::models::{Checkpoint, DutyStatus};
use serde::Serialize;
use tracing::debug;

/// Fractional-hour span during which `status` was active.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionInterval {
    pub status: DutyStatus,
    pub start_hour: f64,
    pub end_hour: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl TransitionInterval {
    pub fn duration_hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }
}

/// Intervals during which `target` was active, in input order.
///
/// A pair `(current, next)` is relevant when either side is `target`, but
/// only the leaving side (`current.status == target`) emits an interval.
/// Entering pairs are matched but emit nothing; the rendered sheet depends on
/// this. No sorting or merging is done.
pub fn extract(checkpoints: &[Checkpoint], target: DutyStatus) -> Vec<TransitionInterval> {
    let mut out = Vec::new();

    for pair in checkpoints.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if current.status != target && next.status != target {
            continue;
        }

        if current.status == target {
            let interval = TransitionInterval {
                status: target,
                start_hour: current.position(),
                end_hour: next.position(),
                annotation: current.annotation.clone(),
                location: current.location.clone(),
            };
            debug!(
                status = %target,
                start = interval.start_hour,
                end = interval.end_hour,
                "transition interval"
            );
            out.push(interval);
        }
    }

    out
}
