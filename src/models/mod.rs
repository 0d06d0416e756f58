pub mod checkpoint;
pub mod clock;
pub mod day_log;
pub mod duty_status;

pub use checkpoint::Checkpoint;
pub use clock::ClockTime;
pub use day_log::{DayLog, LogSummary, RawCheckpoint, RawDayLog, TripLogs};
pub use duty_status::DutyStatus;
