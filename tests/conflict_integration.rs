use chrono::{Duration, NaiveTime, Utc};

use studyassistant_rust::api::{Course, CourseId, SessionTypeId, StudySession, UserId};
use studyassistant_rust::db::repositories::LocalRepository;
use studyassistant_rust::db::services::{store_course, store_study_session, update_study_session};
use studyassistant_rust::services::conflict::check_session_conflict;

fn create_course(user_id: i64) -> Course {
    let today = Utc::now().date_naive();
    Course {
        id: None,
        title: "Compilers".to_string(),
        description: None,
        credits: 10.0,
        date_from: today - Duration::days(30),
        date_to: today + Duration::days(60),
        date_created: Utc::now().naive_utc(),
        user_id: UserId::new(user_id),
    }
}

fn session_at(course_id: CourseId, hour: u32, minute: u32, duration_minutes: i64) -> StudySession {
    StudySession {
        id: None,
        title: "planned work".to_string(),
        description: None,
        // Tomorrow, so the stored copy counts as active.
        start_date: Utc::now().date_naive() + Duration::days(1),
        start_time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
        duration_minutes,
        course_id,
        session_type_id: SessionTypeId::new(1),
        date_created: Utc::now().naive_utc(),
        is_completed: false,
    }
}

#[tokio::test]
async fn test_no_sessions_means_no_conflict() {
    let repo = LocalRepository::new();
    let course_id = store_course(&repo, &create_course(1)).await.unwrap();

    let candidate = session_at(course_id, 10, 0, 60);
    let conflict = check_session_conflict(&repo, UserId::new(1), &candidate)
        .await
        .unwrap();
    assert!(!conflict);
}

#[tokio::test]
async fn test_overlapping_candidate_conflicts() {
    let repo = LocalRepository::new();
    let course_id = store_course(&repo, &create_course(1)).await.unwrap();
    // Existing 10:00-11:00.
    store_study_session(&repo, &session_at(course_id, 10, 0, 60))
        .await
        .unwrap();

    // Candidate 10:30-11:30.
    let candidate = session_at(course_id, 10, 30, 60);
    let conflict = check_session_conflict(&repo, UserId::new(1), &candidate)
        .await
        .unwrap();
    assert!(conflict);
}

#[tokio::test]
async fn test_touching_boundary_is_not_a_conflict() {
    let repo = LocalRepository::new();
    let course_id = store_course(&repo, &create_course(1)).await.unwrap();
    store_study_session(&repo, &session_at(course_id, 10, 0, 60))
        .await
        .unwrap();

    // Candidate 11:00-12:00 starts exactly when the existing session ends.
    let candidate = session_at(course_id, 11, 0, 60);
    let conflict = check_session_conflict(&repo, UserId::new(1), &candidate)
        .await
        .unwrap();
    assert!(!conflict);
}

#[tokio::test]
async fn test_completed_sessions_do_not_block() {
    let repo = LocalRepository::new();
    let course_id = store_course(&repo, &create_course(1)).await.unwrap();

    let mut completed = session_at(course_id, 10, 0, 60);
    completed.is_completed = true;
    store_study_session(&repo, &completed).await.unwrap();

    let candidate = session_at(course_id, 10, 30, 60);
    let conflict = check_session_conflict(&repo, UserId::new(1), &candidate)
        .await
        .unwrap();
    assert!(!conflict);
}

#[tokio::test]
async fn test_other_users_sessions_do_not_block() {
    let repo = LocalRepository::new();
    let mine = store_course(&repo, &create_course(1)).await.unwrap();
    let theirs = store_course(&repo, &create_course(2)).await.unwrap();

    store_study_session(&repo, &session_at(theirs, 10, 0, 60))
        .await
        .unwrap();

    let candidate = session_at(mine, 10, 0, 60);
    let conflict = check_session_conflict(&repo, UserId::new(1), &candidate)
        .await
        .unwrap();
    assert!(!conflict);
}

#[tokio::test]
async fn test_editing_a_session_does_not_conflict_with_itself() {
    let repo = LocalRepository::new();
    let course_id = store_course(&repo, &create_course(1)).await.unwrap();
    let session_id = store_study_session(&repo, &session_at(course_id, 10, 0, 60))
        .await
        .unwrap();

    // Shift the stored session by fifteen minutes; its old interval still
    // overlaps the new one but must not count.
    let mut edited = session_at(course_id, 10, 15, 60);
    edited.id = Some(session_id);
    let conflict = check_session_conflict(&repo, UserId::new(1), &edited)
        .await
        .unwrap();
    assert!(!conflict);

    update_study_session(&repo, &edited).await.unwrap();
}
