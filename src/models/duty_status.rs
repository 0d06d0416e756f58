use serde::{Deserialize, Serialize};
use std::fmt;

/// Regulatory duty-status categories, in log-sheet row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DutyStatus {
    #[default]
    OffDuty,
    Sleeper,
    Driving,
    OnDuty,
    Break,
    Rest,
}

impl DutyStatus {
    /// All statuses in the order their rows appear on the sheet.
    pub const ALL: [DutyStatus; 6] = [
        DutyStatus::OffDuty,
        DutyStatus::Sleeper,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
        DutyStatus::Break,
        DutyStatus::Rest,
    ];

    /// Convert wire string → enum
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "off-duty" => Some(DutyStatus::OffDuty),
            "sleeper" => Some(DutyStatus::Sleeper),
            "driving" => Some(DutyStatus::Driving),
            "on-duty" => Some(DutyStatus::OnDuty),
            "break" => Some(DutyStatus::Break),
            "rest" => Some(DutyStatus::Rest),
            _ => None,
        }
    }

    /// Convert enum → wire string
    pub fn as_wire(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "off-duty",
            DutyStatus::Sleeper => "sleeper",
            DutyStatus::Driving => "driving",
            DutyStatus::OnDuty => "on-duty",
            DutyStatus::Break => "break",
            DutyStatus::Rest => "rest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::Sleeper => "Sleeper",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDuty => "On-Duty",
            DutyStatus::Break => "Break",
            DutyStatus::Rest => "Rest",
        }
    }

    /// 1-based row number printed next to the label.
    pub fn row(&self) -> usize {
        match self {
            DutyStatus::OffDuty => 1,
            DutyStatus::Sleeper => 2,
            DutyStatus::Driving => 3,
            DutyStatus::OnDuty => 4,
            DutyStatus::Break => 5,
            DutyStatus::Rest => 6,
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}
