//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;

use super::dto::{
    ActiveQuery, CourseInfo, CourseListResponse, CreateCourseRequest, CreateCourseResponse,
    CreateStudySessionResponse, HealthResponse, StudySessionInfo, StudySessionListResponse,
    StudySessionRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{ConflictCheckResult, CourseId, StudySessionId, UserId};
use crate::db::services as db_services;
use crate::services::{charts, conflict};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the storage
/// backend is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repo()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Courses
// =============================================================================

/// GET /v1/users/{user_id}/courses
///
/// List a user's courses. `?active=true` restricts the listing to courses
/// whose period has not ended.
pub async fn list_courses(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(query): Query<ActiveQuery>,
) -> HandlerResult<CourseListResponse> {
    let only_current = query.active.unwrap_or(false);
    let courses = db_services::list_courses(
        state.repo(),
        UserId::new(user_id),
        only_current,
    )
    .await?;

    let infos: Vec<CourseInfo> = courses.iter().map(Into::into).collect();
    let total = infos.len();

    Ok(Json(CourseListResponse {
        courses: infos,
        total,
    }))
}

/// POST /v1/courses
///
/// Create a new course.
pub async fn create_course(
    State(state): State<AppState>,
    Json(request): Json<CreateCourseRequest>,
) -> HandlerResult<CreateCourseResponse> {
    if request.credits <= 0.0 {
        return Err(AppError::BadRequest("Credits must be positive".to_string()));
    }
    if request.date_to < request.date_from {
        return Err(AppError::BadRequest(
            "Course end date precedes its start date".to_string(),
        ));
    }

    let course = request.into_course();
    let id = db_services::store_course(state.repo(), &course).await?;

    Ok(Json(CreateCourseResponse {
        course_id: id.value(),
    }))
}

/// GET /v1/courses/{course_id}
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> HandlerResult<CourseInfo> {
    let course =
        db_services::get_course(state.repo(), CourseId::new(course_id)).await?;
    Ok(Json(CourseInfo::from(&course)))
}

// =============================================================================
// Study Sessions
// =============================================================================

/// GET /v1/users/{user_id}/study-sessions
///
/// List a user's study sessions. `?active=true` restricts the listing to
/// sessions that are not completed and have not yet ended.
pub async fn list_study_sessions(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(query): Query<ActiveQuery>,
) -> HandlerResult<StudySessionListResponse> {
    let only_active = query.active.unwrap_or(false);
    let sessions = db_services::list_study_sessions(
        state.repo(),
        UserId::new(user_id),
        only_active,
    )
    .await?;

    let infos: Vec<StudySessionInfo> = sessions.iter().map(Into::into).collect();
    let total = infos.len();

    Ok(Json(StudySessionListResponse {
        sessions: infos,
        total,
    }))
}

fn validate_session_request(request: &StudySessionRequest) -> Result<(), AppError> {
    if request.duration_minutes <= 0 {
        return Err(AppError::BadRequest(
            "Session duration must be positive".to_string(),
        ));
    }
    Ok(())
}

/// POST /v1/study-sessions
///
/// Create a new study session. The session is only stored when it does not
/// collide with any of the owner's active sessions; a collision yields 409.
pub async fn create_study_session(
    State(state): State<AppState>,
    Json(request): Json<StudySessionRequest>,
) -> HandlerResult<CreateStudySessionResponse> {
    validate_session_request(&request)?;

    let repo = state.repo();
    let course = db_services::get_course(repo, CourseId::new(request.course_id)).await?;
    let candidate = request.into_session(None);

    if conflict::check_session_conflict(repo, course.user_id, &candidate).await? {
        return Err(AppError::Conflict(
            "The planned study session collides with one that is already planned".to_string(),
        ));
    }

    let id = db_services::store_study_session(repo, &candidate).await?;
    Ok(Json(CreateStudySessionResponse {
        session_id: id.value(),
    }))
}

/// PUT /v1/study-sessions/{session_id}
///
/// Edit a stored study session, subject to the same collision guard as
/// creation. The stored session's own interval never counts as a collision.
pub async fn update_study_session(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
    Json(request): Json<StudySessionRequest>,
) -> HandlerResult<StudySessionInfo> {
    validate_session_request(&request)?;

    let repo = state.repo();
    let session_id = StudySessionId::new(session_id);
    let stored = db_services::get_study_session(repo, session_id).await?;
    let course = db_services::get_course(repo, CourseId::new(request.course_id)).await?;

    let mut updated = request.into_session(Some(session_id));
    updated.date_created = stored.date_created;
    updated.is_completed = stored.is_completed;

    if conflict::check_session_conflict(repo, course.user_id, &updated).await? {
        return Err(AppError::Conflict(
            "The planned study session collides with one that is already planned".to_string(),
        ));
    }

    db_services::update_study_session(repo, &updated).await?;
    Ok(Json(StudySessionInfo::from(&updated)))
}

/// POST /v1/study-sessions/conflict-check
///
/// Dry-run the collision guard for a candidate session without storing it.
pub async fn check_session_conflict(
    State(state): State<AppState>,
    Json(request): Json<StudySessionRequest>,
) -> HandlerResult<ConflictCheckResult> {
    validate_session_request(&request)?;

    let repo = state.repo();
    let course = db_services::get_course(repo, CourseId::new(request.course_id)).await?;
    let candidate = request.into_session(None);

    let conflict = conflict::check_session_conflict(repo, course.user_id, &candidate).await?;
    Ok(Json(ConflictCheckResult { conflict }))
}

/// POST /v1/study-sessions/{session_id}/complete
pub async fn complete_study_session(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
) -> HandlerResult<StudySessionInfo> {
    let repo = state.repo();
    let session_id = StudySessionId::new(session_id);
    db_services::complete_study_session(repo, session_id).await?;
    let session = db_services::get_study_session(repo, session_id).await?;
    Ok(Json(StudySessionInfo::from(&session)))
}

/// DELETE /v1/study-sessions/{session_id}
pub async fn delete_study_session(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
) -> Result<axum::http::StatusCode, AppError> {
    let deleted = db_services::delete_study_session(
        state.repo(),
        StudySessionId::new(session_id),
    )
    .await?;

    if deleted == 0 {
        return Err(AppError::NotFound(format!(
            "Study session {} not found",
            session_id
        )));
    }
    Ok(axum::http::StatusCode::NO_CONTENT)
}

// =============================================================================
// Charts
// =============================================================================

/// GET /v1/courses/{course_id}/charts/progression
///
/// Week-by-week cumulative progression for a course.
pub async fn get_progression_chart(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> HandlerResult<crate::api::ProgressionData> {
    let data = charts::get_progression_chart(
        state.repo(),
        CourseId::new(course_id),
        Utc::now().naive_utc(),
    )
    .await?;
    Ok(Json(data))
}

/// GET /v1/courses/{course_id}/charts/workload
///
/// Completed versus remaining study hours for a course.
pub async fn get_workload_chart(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> HandlerResult<crate::api::WorkloadBreakdown> {
    let data =
        charts::get_workload_chart(state.repo(), CourseId::new(course_id)).await?;
    Ok(Json(data))
}
