//! Shared data models re-exported for database layer consumers.

pub use crate::api::{Course, CourseId, SessionTypeId, StudySession, StudySessionId, UserId};
pub use crate::routes::charts::{ProgressionData, WorkloadBreakdown};
pub use crate::routes::courses::CourseInfo;
pub use crate::routes::sessions::{ConflictCheckResult, StudySessionInfo};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimal projection of a completed study session used for chart
/// aggregation: the day it started and its length in whole hours.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StudySessionDuration {
    pub start_date: NaiveDate,
    pub duration_hours: f64,
}

impl StudySessionDuration {
    pub fn new(start_date: NaiveDate, duration_hours: f64) -> Self {
        Self {
            start_date,
            duration_hours,
        }
    }
}
