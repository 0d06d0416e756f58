use super::checkpoint::Checkpoint;
use serde::{Deserialize, Serialize};

/// Pre-aggregated hour totals supplied by the trip-logs service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LogSummary {
    #[serde(default)]
    pub driving_hours: f64,
    #[serde(default)]
    pub on_duty_hours: f64,
    #[serde(default)]
    pub rest_hours: f64,
}

/// One graph point exactly as received on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCheckpoint {
    pub time: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

/// One day of a trip log as received on the wire (not yet validated).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDayLog {
    #[serde(alias = "day_number")]
    pub day: u32,
    #[serde(default)]
    pub graph_points: Vec<RawCheckpoint>,
    #[serde(default)]
    pub summary: LogSummary,
}

/// Response of the trip-logs endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripLogs {
    /// String UUIDs and numeric ids are both seen in the wild.
    #[serde(default)]
    pub trip_id: Option<serde_json::Value>,
    pub logs: Vec<RawDayLog>,
}

impl TripLogs {
    /// Accepts either `{ "trip_id": ..., "logs": [...] }` or a bare array of day logs.
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        if s.trim_start().starts_with('[') {
            let logs: Vec<RawDayLog> = serde_json::from_str(s)?;
            return Ok(TripLogs {
                trip_id: None,
                logs,
            });
        }
        serde_json::from_str(s)
    }

    pub fn trip_label(&self) -> Option<String> {
        match &self.trip_id {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }

    pub fn day(&self, day: u32) -> Option<&RawDayLog> {
        self.logs.iter().find(|d| d.day == day)
    }
}

/// A validated day: checkpoints are typed and in non-decreasing time order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DayLog {
    pub day: u32,
    pub graph_points: Vec<Checkpoint>,
    pub summary: LogSummary,
}
