//! Study session domain type.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::api::{CourseId, SessionTypeId, StudySessionId};

/// A planned or completed block of study time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    /// Database id; `None` until persisted.
    pub id: Option<StudySessionId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Calendar day the session starts on.
    pub start_date: NaiveDate,
    /// Time of day the session starts at.
    pub start_time: NaiveTime,
    /// Planned length in minutes. Expected to be positive; validated at the
    /// API edge, not here.
    pub duration_minutes: i64,
    pub course_id: CourseId,
    pub session_type_id: SessionTypeId,
    pub date_created: NaiveDateTime,
    #[serde(default)]
    pub is_completed: bool,
}

impl StudySession {
    /// Instant the session starts.
    pub fn start(&self) -> NaiveDateTime {
        self.start_date.and_time(self.start_time)
    }

    /// Instant the session ends (start + duration).
    pub fn end(&self) -> NaiveDateTime {
        self.start() + Duration::minutes(self.duration_minutes)
    }

    /// Whether the session is still upcoming or in progress at `now`.
    ///
    /// A session stops being active once it is marked completed or `now`
    /// reaches its end instant.
    pub fn is_active_at(&self, now: NaiveDateTime) -> bool {
        !self.is_completed && now < self.end()
    }

    /// Session length in whole hours, sub-hour remainder truncated.
    ///
    /// This reproduces the hour projection the charts were historically
    /// built on: a 90-minute session counts as 1 hour, a 45-minute session
    /// as 0.
    pub fn duration_whole_hours(&self) -> f64 {
        (self.duration_minutes / 60) as f64
    }
}
