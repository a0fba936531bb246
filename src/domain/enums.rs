use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a task
///
/// Persisted as its integer code (0 to 3, in declaration order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Paused,
    Completed,
}

impl TaskStatus {
    /// Display label used in the task list
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "⏳ Pending",
            Self::InProgress => "▶ In Progress",
            Self::Paused => "⏸ Paused",
            Self::Completed => "✔ Completed",
        }
    }

    /// Integer code used in the task file
    pub fn code(&self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Paused => 2,
            Self::Completed => 3,
        }
    }

    pub fn all() -> &'static [TaskStatus] {
        &[
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Paused,
            TaskStatus::Completed,
        ]
    }
}

impl TryFrom<u8> for TaskStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Pending),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Paused),
            3 => Ok(Self::Completed),
            other => Err(format!("unknown task status code {}", other)),
        }
    }
}

impl From<TaskStatus> for u8 {
    fn from(status: TaskStatus) -> Self {
        status.code()
    }
}

/// UI mode for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Viewing,
    Adding,
}

/// Calendar convention used for the date column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarVariant {
    #[default]
    Gregorian,
    Jalali,
}

impl CalendarVariant {
    pub fn toggled(self) -> Self {
        match self {
            Self::Gregorian => Self::Jalali,
            Self::Jalali => Self::Gregorian,
        }
    }

    /// Indicator text shown under the stats bar
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gregorian => "Gregorian (MM/DD)",
            Self::Jalali => "Jalali (MM/DD)",
        }
    }
}

impl fmt::Display for CalendarVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gregorian => f.write_str("gregorian"),
            Self::Jalali => f.write_str("jalali"),
        }
    }
}

impl std::str::FromStr for CalendarVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gregorian" | "g" => Ok(Self::Gregorian),
            "jalali" | "j" => Ok(Self::Jalali),
            other => Err(format!("unknown calendar '{}' (expected gregorian or jalali)", other)),
        }
    }
}
