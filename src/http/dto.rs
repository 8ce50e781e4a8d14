//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The chart and listing DTOs are re-exported from the routes module since
//! they already derive Serialize/Deserialize.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Charts
    ProgressionData,
    WorkloadBreakdown,
    // Courses
    CourseInfo,
    // Sessions
    ConflictCheckResult,
    StudySessionInfo,
};

use crate::api::{Course, CourseId, SessionTypeId, StudySession, UserId};

/// Request body for creating a new course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub credits: f64,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub user_id: i64,
}

impl CreateCourseRequest {
    /// Build the domain course, stamped with the current time.
    pub fn into_course(self) -> Course {
        Course {
            id: None,
            title: self.title,
            description: self.description,
            credits: self.credits,
            date_from: self.date_from,
            date_to: self.date_to,
            date_created: chrono::Utc::now().naive_utc(),
            user_id: UserId::new(self.user_id),
        }
    }
}

/// Response for course creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseResponse {
    pub course_id: i64,
}

/// Request body for creating, editing or conflict-checking a study session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySessionRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: i64,
    pub course_id: i64,
    pub session_type_id: i64,
}

impl StudySessionRequest {
    /// Build the domain session. `id` is `None` for a new session, or the
    /// stored id when the request edits an existing one.
    pub fn into_session(self, id: Option<crate::api::StudySessionId>) -> StudySession {
        StudySession {
            id,
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            start_time: self.start_time,
            duration_minutes: self.duration_minutes,
            course_id: CourseId::new(self.course_id),
            session_type_id: SessionTypeId::new(self.session_type_id),
            date_created: chrono::Utc::now().naive_utc(),
            is_completed: false,
        }
    }
}

/// Response for study session creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudySessionResponse {
    pub session_id: i64,
}

/// Query parameter for listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ActiveQuery {
    /// When true, restrict the listing to active entries.
    #[serde(default)]
    pub active: Option<bool>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage backend status
    pub database: String,
}

/// Course list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseInfo>,
    pub total: usize,
}

/// Study session list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySessionListResponse {
    pub sessions: Vec<StudySessionInfo>,
    pub total: usize,
}

impl From<&Course> for CourseInfo {
    fn from(course: &Course) -> Self {
        Self {
            course_id: course.id.unwrap_or(CourseId::new(0)),
            title: course.title.clone(),
            credits: course.credits,
            date_from: course.date_from,
            date_to: course.date_to,
            workload_hours: course.workload_hours(),
        }
    }
}

impl From<&StudySession> for StudySessionInfo {
    fn from(session: &StudySession) -> Self {
        Self {
            session_id: session.id.unwrap_or(crate::api::StudySessionId::new(0)),
            title: session.title.clone(),
            course_id: session.course_id,
            start: session.start(),
            end: session.end(),
            is_completed: session.is_completed,
        }
    }
}
