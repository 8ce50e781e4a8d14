//! In-memory repository implementation.
//!
//! Backs the default development configuration and the test suite. State
//! lives in id-keyed maps behind `parking_lot` locks; ids are assigned from
//! monotonically increasing counters, never reused within a process.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::api::{Course, CourseId, StudySession, StudySessionId, UserId};
use crate::db::models::StudySessionDuration;
use crate::db::repository::{
    CourseRepository, ErrorContext, FullRepository, RepositoryError, RepositoryResult,
    StudySessionRepository,
};

/// In-memory implementation of the repository traits.
#[derive(Default)]
pub struct LocalRepository {
    courses: RwLock<HashMap<i64, Course>>,
    sessions: RwLock<HashMap<i64, StudySession>>,
    next_course_id: AtomicI64,
    next_session_id: AtomicI64,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            courses: RwLock::new(HashMap::new()),
            sessions: RwLock::new(HashMap::new()),
            next_course_id: AtomicI64::new(1),
            next_session_id: AtomicI64::new(1),
        }
    }

    fn course_not_found(course_id: CourseId) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("Course {} not found", course_id.value()),
            ErrorContext::default()
                .with_entity("course")
                .with_entity_id(course_id.value()),
        )
    }

    fn session_not_found(session_id: StudySessionId) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("Study session {} not found", session_id.value()),
            ErrorContext::default()
                .with_entity("study_session")
                .with_entity_id(session_id.value()),
        )
    }

    /// Course ids owned by `user_id`.
    fn course_ids_for_user(&self, user_id: UserId) -> Vec<i64> {
        self.courses
            .read()
            .values()
            .filter(|c| c.user_id == user_id)
            .filter_map(|c| c.id.map(|id| id.value()))
            .collect()
    }
}

#[async_trait]
impl CourseRepository for LocalRepository {
    async fn store_course(&self, course: &Course) -> RepositoryResult<CourseId> {
        let id = CourseId::new(self.next_course_id.fetch_add(1, Ordering::SeqCst));
        let mut stored = course.clone();
        stored.id = Some(id);
        self.courses.write().insert(id.value(), stored);
        Ok(id)
    }

    async fn fetch_course(&self, course_id: CourseId) -> RepositoryResult<Course> {
        self.courses
            .read()
            .get(&course_id.value())
            .cloned()
            .ok_or_else(|| Self::course_not_found(course_id))
    }

    async fn fetch_courses_for_user(
        &self,
        user_id: UserId,
        only_current: bool,
    ) -> RepositoryResult<Vec<Course>> {
        let now = Utc::now().naive_utc();
        let mut courses: Vec<Course> = self
            .courses
            .read()
            .values()
            .filter(|c| c.user_id == user_id)
            .filter(|c| !only_current || c.is_current_at(now))
            .cloned()
            .collect();
        courses.sort_by_key(|c| c.id);
        Ok(courses)
    }

    async fn update_course(&self, course: &Course) -> RepositoryResult<()> {
        let id = course.id.ok_or_else(|| {
            RepositoryError::validation("Cannot update a course without an id")
        })?;
        let mut courses = self.courses.write();
        if !courses.contains_key(&id.value()) {
            return Err(Self::course_not_found(id));
        }
        courses.insert(id.value(), course.clone());
        Ok(())
    }

    async fn delete_course(&self, course_id: CourseId) -> RepositoryResult<usize> {
        let removed = self.courses.write().remove(&course_id.value());
        if removed.is_some() {
            // Sessions belong to their course; drop them with it.
            self.sessions
                .write()
                .retain(|_, s| s.course_id != course_id);
            Ok(1)
        } else {
            Ok(0)
        }
    }
}

#[async_trait]
impl StudySessionRepository for LocalRepository {
    async fn store_study_session(
        &self,
        session: &StudySession,
    ) -> RepositoryResult<StudySessionId> {
        if !self.courses.read().contains_key(&session.course_id.value()) {
            return Err(Self::course_not_found(session.course_id)
                .with_operation("store_study_session"));
        }
        let id = StudySessionId::new(self.next_session_id.fetch_add(1, Ordering::SeqCst));
        let mut stored = session.clone();
        stored.id = Some(id);
        self.sessions.write().insert(id.value(), stored);
        Ok(id)
    }

    async fn fetch_study_session(
        &self,
        session_id: StudySessionId,
    ) -> RepositoryResult<StudySession> {
        self.sessions
            .read()
            .get(&session_id.value())
            .cloned()
            .ok_or_else(|| Self::session_not_found(session_id))
    }

    async fn fetch_study_sessions_for_user(
        &self,
        user_id: UserId,
        only_active: bool,
    ) -> RepositoryResult<Vec<StudySession>> {
        let now = Utc::now().naive_utc();
        let course_ids = self.course_ids_for_user(user_id);
        let mut sessions: Vec<StudySession> = self
            .sessions
            .read()
            .values()
            .filter(|s| course_ids.contains(&s.course_id.value()))
            .filter(|s| !only_active || s.is_active_at(now))
            .cloned()
            .collect();
        sessions.sort_by_key(|s| s.id);
        Ok(sessions)
    }

    async fn update_study_session(&self, session: &StudySession) -> RepositoryResult<()> {
        let id = session.id.ok_or_else(|| {
            RepositoryError::validation("Cannot update a study session without an id")
        })?;
        let mut sessions = self.sessions.write();
        if !sessions.contains_key(&id.value()) {
            return Err(Self::session_not_found(id));
        }
        sessions.insert(id.value(), session.clone());
        Ok(())
    }

    async fn complete_study_session(&self, session_id: StudySessionId) -> RepositoryResult<()> {
        let mut sessions = self.sessions.write();
        let session = sessions
            .get_mut(&session_id.value())
            .ok_or_else(|| Self::session_not_found(session_id))?;
        session.is_completed = true;
        Ok(())
    }

    async fn delete_study_session(&self, session_id: StudySessionId) -> RepositoryResult<usize> {
        match self.sessions.write().remove(&session_id.value()) {
            Some(_) => Ok(1),
            None => Ok(0),
        }
    }

    async fn fetch_completed_session_durations(
        &self,
        course_id: CourseId,
    ) -> RepositoryResult<Vec<StudySessionDuration>> {
        let mut completed: Vec<StudySession> = self
            .sessions
            .read()
            .values()
            .filter(|s| s.course_id == course_id && s.is_completed)
            .cloned()
            .collect();
        completed.sort_by_key(|s| (s.start_date, s.start_time));
        Ok(completed
            .iter()
            .map(|s| StudySessionDuration::new(s.start_date, s.duration_whole_hours()))
            .collect())
    }

    async fn fetch_study_hours_for_course(&self, course_id: CourseId) -> RepositoryResult<f64> {
        Ok(self
            .sessions
            .read()
            .values()
            .filter(|s| s.course_id == course_id && s.is_completed)
            .map(|s| s.duration_whole_hours())
            .sum())
    }
}

#[async_trait]
impl FullRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
