//! Time utilities: parsing HH:MM and converting between clock and hour positions.

use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Render a fractional hour position back to `HH:MM` (`9.75` → `"09:45"`).
pub fn format_position(position: f64) -> String {
    let total = (position * 60.0).round() as i64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
