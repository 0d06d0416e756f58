use super::{clock::ClockTime, duty_status::DutyStatus};
use serde::Serialize;

/// A validated duty-status change: at `time` the driver entered `status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checkpoint {
    pub time: ClockTime,
    pub status: DutyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl Checkpoint {
    pub fn new(time: ClockTime, status: DutyStatus) -> Self {
        Self {
            time,
            status,
            location: None,
            annotation: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn time_str(&self) -> String {
        self.time.to_string()
    }

    pub fn position(&self) -> f64 {
        self.time.as_fractional_hours()
    }
}
