//! Unified application error type.
//! All modules (core, cli, export, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // (De)serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Checkpoint validation
    // ---------------------------
    #[error("Day {day}, checkpoint #{index}: malformed time value '{value}' (expected HH:MM)")]
    MalformedTime {
        day: u32,
        index: usize,
        value: String,
    },

    #[error("Day {day}, checkpoint #{index}: unknown duty status '{value}'")]
    UnknownStatus {
        day: u32,
        index: usize,
        value: String,
    },

    #[error(
        "Day {day}, checkpoint #{index}: time {current} is earlier than previous checkpoint {previous}"
    )]
    OrderingViolation {
        day: u32,
        index: usize,
        previous: String,
        current: String,
    },

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No log found for day {0}")]
    NoSuchDay(u32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for the three input-validation failures raised while normalizing a day.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::MalformedTime { .. }
                | AppError::UnknownStatus { .. }
                | AppError::OrderingViolation { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
