//! Study session scheduling conflict detection.

use crate::api::{StudySession, UserId};
use crate::db::repository::FullRepository;
use crate::db::{self, RepositoryResult};

/// Whether `candidate` overlaps any of the user's existing active sessions.
///
/// Sessions occupy half-open `[start, end)` intervals: two sessions conflict
/// iff each starts before the other ends, so a session beginning exactly
/// when another ends is fine. When the candidate is an edit of a stored
/// session its own record is skipped by id, never counting as a conflict
/// with itself.
///
/// Returns on the first overlap found; an empty existing list never
/// conflicts.
pub fn has_session_conflict(candidate: &StudySession, existing_active: &[StudySession]) -> bool {
    let start = candidate.start();
    let end = candidate.end();

    existing_active
        .iter()
        .filter(|existing| match (candidate.id, existing.id) {
            (Some(candidate_id), Some(existing_id)) => candidate_id != existing_id,
            _ => true,
        })
        .any(|existing| start < existing.end() && existing.start() < end)
}

/// Check `candidate` against everything the user currently has planned.
pub async fn check_session_conflict(
    repo: &dyn FullRepository,
    user_id: UserId,
    candidate: &StudySession,
) -> RepositoryResult<bool> {
    let existing = db::services::get_active_study_sessions_for_user(repo, user_id).await?;
    Ok(has_session_conflict(candidate, &existing))
}

#[cfg(test)]
mod tests {
    use super::has_session_conflict;
    use crate::api::{CourseId, SessionTypeId, StudySession, StudySessionId};
    use chrono::{NaiveDate, NaiveTime};

    fn session(id: Option<i64>, start_hm: (u32, u32), duration_minutes: i64) -> StudySession {
        StudySession {
            id: id.map(StudySessionId::new),
            title: "session".to_string(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2018, 3, 5).unwrap(),
            start_time: NaiveTime::from_hms_opt(start_hm.0, start_hm.1, 0).unwrap(),
            duration_minutes,
            course_id: CourseId::new(1),
            session_type_id: SessionTypeId::new(1),
            date_created: NaiveDate::from_ymd_opt(2018, 3, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            is_completed: false,
        }
    }

    #[test]
    fn test_no_existing_sessions_never_conflicts() {
        let candidate = session(None, (10, 0), 60);
        assert!(!has_session_conflict(&candidate, &[]));
    }

    #[test]
    fn test_partial_overlap_conflicts() {
        // Existing 10:00-11:00, candidate 10:30-11:30.
        let existing = vec![session(Some(1), (10, 0), 60)];
        let candidate = session(None, (10, 30), 60);
        assert!(has_session_conflict(&candidate, &existing));
    }

    #[test]
    fn test_touching_boundary_does_not_conflict() {
        // Existing 10:00-11:00, candidate 11:00-12:00.
        let existing = vec![session(Some(1), (10, 0), 60)];
        let candidate = session(None, (11, 0), 60);
        assert!(!has_session_conflict(&candidate, &existing));
    }

    #[test]
    fn test_candidate_ending_at_existing_start_does_not_conflict() {
        let existing = vec![session(Some(1), (11, 0), 60)];
        let candidate = session(None, (10, 0), 60);
        assert!(!has_session_conflict(&candidate, &existing));
    }

    #[test]
    fn test_full_containment_conflicts() {
        let existing = vec![session(Some(1), (9, 0), 240)];
        let candidate = session(None, (10, 0), 30);
        assert!(has_session_conflict(&candidate, &existing));
        // And the other way around.
        let wide = session(None, (8, 0), 600);
        assert!(has_session_conflict(&wide, &existing));
    }

    #[test]
    fn test_disjoint_sessions_do_not_conflict() {
        let existing = vec![
            session(Some(1), (8, 0), 60),
            session(Some(2), (12, 0), 60),
        ];
        let candidate = session(None, (10, 0), 60);
        assert!(!has_session_conflict(&candidate, &existing));
    }

    #[test]
    fn test_edited_session_skips_itself() {
        // The stored copy of the session being edited is in the active list.
        let existing = vec![session(Some(7), (10, 0), 60)];
        let edited = session(Some(7), (10, 15), 60);
        assert!(!has_session_conflict(&edited, &existing));
    }

    #[test]
    fn test_edited_session_still_conflicts_with_others() {
        let existing = vec![
            session(Some(7), (10, 0), 60),
            session(Some(8), (11, 0), 60),
        ];
        let edited = session(Some(7), (10, 30), 60);
        assert!(has_session_conflict(&edited, &existing));
    }

    #[test]
    fn test_zero_duration_candidate_never_conflicts() {
        let existing = vec![session(Some(1), (9, 0), 240)];
        let candidate = session(None, (10, 0), 0);
        assert!(!has_session_conflict(&candidate, &existing));
    }

    #[test]
    fn test_conflict_is_deterministic() {
        let existing = vec![session(Some(1), (10, 0), 60)];
        let candidate = session(None, (10, 30), 60);
        let first = has_session_conflict(&candidate, &existing);
        let second = has_session_conflict(&candidate, &existing);
        assert_eq!(first, second);
    }
}
