//! Repository trait definitions for course and study session storage.
//!
//! The traits abstract the persistence backend so the service layer can be
//! exercised against any implementation. Only the in-memory backend ships
//! today; the seam is where a SQL-backed implementation would plug in.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{Course, CourseId, StudySession, StudySessionId, UserId};
use crate::db::models::StudySessionDuration;

/// Repository trait for course operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Store a new course and return its assigned id.
    ///
    /// # Arguments
    /// * `course` - The course to store (id is ignored and reassigned)
    ///
    /// # Returns
    /// * `Ok(CourseId)` - The id of the stored course
    /// * `Err(RepositoryError)` - If the operation fails
    async fn store_course(&self, course: &Course) -> RepositoryResult<CourseId>;

    /// Fetch a single course by id.
    async fn fetch_course(&self, course_id: CourseId) -> RepositoryResult<Course>;

    /// Fetch a user's courses.
    ///
    /// # Arguments
    /// * `user_id` - The owning user
    /// * `only_current` - When true, only courses whose period has not ended
    async fn fetch_courses_for_user(
        &self,
        user_id: UserId,
        only_current: bool,
    ) -> RepositoryResult<Vec<Course>>;

    /// Replace a stored course. The course must carry an id.
    async fn update_course(&self, course: &Course) -> RepositoryResult<()>;

    /// Delete a course.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of courses deleted (0 or 1)
    async fn delete_course(&self, course_id: CourseId) -> RepositoryResult<usize>;
}

/// Repository trait for study session operations.
#[async_trait]
pub trait StudySessionRepository: Send + Sync {
    /// Store a new study session and return its assigned id.
    async fn store_study_session(&self, session: &StudySession)
        -> RepositoryResult<StudySessionId>;

    /// Fetch a single study session by id.
    async fn fetch_study_session(
        &self,
        session_id: StudySessionId,
    ) -> RepositoryResult<StudySession>;

    /// Fetch a user's study sessions across all their courses.
    ///
    /// # Arguments
    /// * `user_id` - The owning user
    /// * `only_active` - When true, only sessions that are not completed and
    ///   have not yet ended
    async fn fetch_study_sessions_for_user(
        &self,
        user_id: UserId,
        only_active: bool,
    ) -> RepositoryResult<Vec<StudySession>>;

    /// Replace a stored study session. The session must carry an id.
    async fn update_study_session(&self, session: &StudySession) -> RepositoryResult<()>;

    /// Mark a study session as completed.
    async fn complete_study_session(&self, session_id: StudySessionId) -> RepositoryResult<()>;

    /// Delete a study session.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of sessions deleted (0 or 1)
    async fn delete_study_session(&self, session_id: StudySessionId) -> RepositoryResult<usize>;

    /// Fetch the duration projection of a course's completed sessions,
    /// ordered by start date then start time ascending.
    async fn fetch_completed_session_durations(
        &self,
        course_id: CourseId,
    ) -> RepositoryResult<Vec<StudySessionDuration>>;

    /// Total completed study hours logged for a course (whole hours,
    /// sub-hour remainders truncated).
    async fn fetch_study_hours_for_course(&self, course_id: CourseId) -> RepositoryResult<f64>;
}

/// Combined repository trait providing everything the application needs.
#[async_trait]
pub trait FullRepository: CourseRepository + StudySessionRepository {
    /// Check that the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
