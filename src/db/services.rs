//! High-level service functions over the repository traits.
//!
//! These functions are the recommended entry points for application code:
//! they work with any repository implementation and add logging plus the
//! operation context the callers expect in error messages.

use crate::api::{Course, CourseId, StudySession, StudySessionId, UserId};
use crate::db::models::StudySessionDuration;
use crate::db::repository::{FullRepository, RepositoryResult};

/// Check that the repository backend is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Courses ====================

/// Store a new course, returning its assigned id.
pub async fn store_course(repo: &dyn FullRepository, course: &Course) -> RepositoryResult<CourseId> {
    let id = repo
        .store_course(course)
        .await
        .map_err(|e| e.with_operation("store_course"))?;
    log::debug!("Stored course {} ({})", id.value(), course.title);
    Ok(id)
}

/// Fetch a single course by id.
pub async fn get_course(repo: &dyn FullRepository, course_id: CourseId) -> RepositoryResult<Course> {
    repo.fetch_course(course_id)
        .await
        .map_err(|e| e.with_operation("get_course"))
}

/// List a user's courses, optionally restricted to those whose period has
/// not ended.
pub async fn list_courses(
    repo: &dyn FullRepository,
    user_id: UserId,
    only_current: bool,
) -> RepositoryResult<Vec<Course>> {
    repo.fetch_courses_for_user(user_id, only_current)
        .await
        .map_err(|e| e.with_operation("list_courses"))
}

/// Delete a course and its sessions.
pub async fn delete_course(
    repo: &dyn FullRepository,
    course_id: CourseId,
) -> RepositoryResult<usize> {
    repo.delete_course(course_id)
        .await
        .map_err(|e| e.with_operation("delete_course"))
}

// ==================== Study Sessions ====================

/// Store a new study session, returning its assigned id.
pub async fn store_study_session(
    repo: &dyn FullRepository,
    session: &StudySession,
) -> RepositoryResult<StudySessionId> {
    let id = repo
        .store_study_session(session)
        .await
        .map_err(|e| e.with_operation("store_study_session"))?;
    log::debug!("Stored study session {} ({})", id.value(), session.title);
    Ok(id)
}

/// Fetch a single study session by id.
pub async fn get_study_session(
    repo: &dyn FullRepository,
    session_id: StudySessionId,
) -> RepositoryResult<StudySession> {
    repo.fetch_study_session(session_id)
        .await
        .map_err(|e| e.with_operation("get_study_session"))
}

/// Replace a stored study session.
pub async fn update_study_session(
    repo: &dyn FullRepository,
    session: &StudySession,
) -> RepositoryResult<()> {
    repo.update_study_session(session)
        .await
        .map_err(|e| e.with_operation("update_study_session"))
}

/// Mark a study session as completed.
pub async fn complete_study_session(
    repo: &dyn FullRepository,
    session_id: StudySessionId,
) -> RepositoryResult<()> {
    repo.complete_study_session(session_id)
        .await
        .map_err(|e| e.with_operation("complete_study_session"))
}

/// Delete a study session.
pub async fn delete_study_session(
    repo: &dyn FullRepository,
    session_id: StudySessionId,
) -> RepositoryResult<usize> {
    repo.delete_study_session(session_id)
        .await
        .map_err(|e| e.with_operation("delete_study_session"))
}

/// List a user's study sessions, optionally restricted to active ones.
pub async fn list_study_sessions(
    repo: &dyn FullRepository,
    user_id: UserId,
    only_active: bool,
) -> RepositoryResult<Vec<StudySession>> {
    repo.fetch_study_sessions_for_user(user_id, only_active)
        .await
        .map_err(|e| e.with_operation("list_study_sessions"))
}

/// The active (not completed, not yet ended) sessions a conflict check runs
/// against.
pub async fn get_active_study_sessions_for_user(
    repo: &dyn FullRepository,
    user_id: UserId,
) -> RepositoryResult<Vec<StudySession>> {
    list_study_sessions(repo, user_id, true).await
}

// ==================== Chart Inputs ====================

/// Completed session durations for a course, ordered by start ascending.
pub async fn get_completed_session_durations_for_course(
    repo: &dyn FullRepository,
    course_id: CourseId,
) -> RepositoryResult<Vec<StudySessionDuration>> {
    repo.fetch_completed_session_durations(course_id)
        .await
        .map_err(|e| e.with_operation("get_completed_session_durations_for_course"))
}

/// Total completed study hours logged for a course.
pub async fn get_study_hours_for_course(
    repo: &dyn FullRepository,
    course_id: CourseId,
) -> RepositoryResult<f64> {
    repo.fetch_study_hours_for_course(course_id)
        .await
        .map_err(|e| e.with_operation("get_study_hours_for_course"))
}
