use super::enums::TaskStatus;
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID, never reused
    pub id: Uuid,
    /// What the task is about (non-empty after trimming)
    pub description: String,
    /// Current lifecycle status
    pub status: TaskStatus,
    /// Time accumulated by finished in-progress sessions
    #[serde(with = "nanos")]
    pub time_spent: Duration,
    /// Start of the current in-progress session, `None` when unset
    #[serde(with = "zero_time")]
    pub last_started_at: Option<DateTime<Local>>,
    /// When the task was created
    pub created_at: DateTime<Local>,
}

impl Task {
    pub fn new(description: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            status: TaskStatus::Pending,
            time_spent: Duration::zero(),
            last_started_at: None,
            created_at: now,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == TaskStatus::InProgress
    }

    /// Length of the running session at `now`.
    ///
    /// Zero unless the task is in progress with a start time that is not in
    /// the future, so a corrupt or skewed start never yields a bogus interval.
    pub fn live_interval(&self, now: DateTime<Local>) -> Duration {
        if !self.is_in_progress() {
            return Duration::zero();
        }
        match self.last_started_at {
            Some(started) if started <= now => now - started,
            _ => Duration::zero(),
        }
    }

    /// Total time spent including the running session
    pub fn effective_elapsed(&self, now: DateTime<Local>) -> Duration {
        self.time_spent + self.live_interval(now)
    }
}

/// `chrono::Duration` as integer nanoseconds
mod nanos {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(duration.num_nanoseconds().unwrap_or(i64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let nanos = i64::deserialize(deserializer)?;
        Ok(Duration::nanoseconds(nanos.max(0)))
    }
}

/// Optional timestamp where "unset" is written as the year-1 zero instant
mod zero_time {
    use chrono::{DateTime, Datelike, FixedOffset, Local};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const ZERO: &str = "0001-01-01T00:00:00Z";

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Local>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(at) => serializer.serialize_str(&at.to_rfc3339()),
            None => serializer.serialize_str(ZERO),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Local>>, D::Error> {
        let value = Option::<DateTime<FixedOffset>>::deserialize(deserializer)?;
        Ok(value
            .filter(|at| at.year() > 1)
            .map(|at| at.with_timezone(&Local)))
    }
}
