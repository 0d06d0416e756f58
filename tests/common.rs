#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use eldlog::models::{Checkpoint, ClockTime, DutyStatus};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn eld() -> Command {
    cargo_bin_cmd!("eldlog")
}

/// Build a checkpoint from `"HH:MM"`, panicking on bad test input.
pub fn cp(time: &str, status: DutyStatus) -> Checkpoint {
    Checkpoint::new(ClockTime::parse(time).expect("valid test time"), status)
}

/// Create a unique path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eldlog.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `json` to a fresh temp file and return its path
pub fn write_trip(name: &str, json: &str) -> String {
    let p = temp_path(name, "json");
    fs::write(&p, json).expect("write trip json");
    p
}

/// Config file pointing nowhere special, so tests never read the user's config
pub fn isolated_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}

/// Two-day trip shaped like the trip-logs endpoint response.
pub const SAMPLE_TRIP: &str = r#"{
  "trip_id": "a1b2c3",
  "logs": [
    {
      "day": 1,
      "graph_points": [
        {"time": "00:00", "status": "off-duty"},
        {"time": "07:00", "status": "driving", "location": "Dallas, TX", "annotation": "DRIVING DALLAS TO TULSA"},
        {"time": "09:30", "status": "break", "annotation": "fuel stop"},
        {"time": "09:45", "status": "driving"},
        {"time": "18:00", "status": "off-duty"}
      ],
      "summary": {"driving_hours": 10.75, "on_duty_hours": 11.0, "rest_hours": 13.0}
    },
    {
      "day_number": 2,
      "graph_points": [
        {"time": "06:00", "status": "on-duty", "annotation": "PICKUP"},
        {"time": "07:00", "status": "driving"},
        {"time": "12:00", "status": "rest", "annotation": "REST"}
      ],
      "summary": {"driving_hours": 5.0, "on_duty_hours": 6.0, "rest_hours": 18.0}
    }
  ]
}"#;
