//! DTO types for the study session endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::api::{CourseId, StudySessionId};

/// Lightweight study session listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySessionInfo {
    pub session_id: StudySessionId,
    pub title: String,
    pub course_id: CourseId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub is_completed: bool,
}

/// Outcome of a conflict check against a user's active sessions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConflictCheckResult {
    pub conflict: bool,
}

pub const LIST_STUDY_SESSIONS: &str = "list_study_sessions";
pub const POST_STUDY_SESSION: &str = "store_study_session";
pub const CHECK_SESSION_CONFLICT: &str = "check_session_conflict";
pub const COMPLETE_STUDY_SESSION: &str = "complete_study_session";
