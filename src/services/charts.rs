//! Progress chart aggregation.
//!
//! Builds the two chart payloads for a course: a week-by-week cumulative
//! progression (real hours against an evenly spread reference) and a
//! completed-versus-remaining workload breakdown.

use chrono::NaiveDateTime;

use crate::api::{Course, CourseId};
use crate::db::models::StudySessionDuration;
use crate::db::repository::FullRepository;
use crate::db::{self, RepositoryResult};
use crate::models::week::week_number;
use crate::routes::charts::{ProgressionData, WorkloadBreakdown};

/// Build the cumulative progression series for a course.
///
/// Weeks run from the course start week to the current week while the
/// course is active, or to the course end week once it is over. Each week
/// contributes the summed hours of the completed sessions that started in
/// it to the real series, and an even share of the workload to the
/// reference series. Both series are seeded with a zero point under an
/// empty label so charts start at the origin.
///
/// A course confined to a single calendar week gets its full workload as
/// the per-week reference share (the week span is clamped to 1).
pub fn generate_progression(
    course: &Course,
    completed_durations: &[StudySessionDuration],
    now: NaiveDateTime,
) -> ProgressionData {
    let start_week = week_number(course.date_from);
    let end_week = if course.is_active_at(now) {
        week_number(now.date())
    } else {
        week_number(course.date_to)
    };

    let week_span = week_number(course.date_to).saturating_sub(week_number(course.date_from));
    let reference_per_week = course.workload_hours() / week_span.max(1) as f64;

    let mut agg_real = 0.0;
    let mut agg_reference = 0.0;

    let mut reference = vec![0.0];
    let mut real = vec![0.0];
    let mut labels = vec![String::new()];

    for week in start_week..=end_week {
        agg_real += completed_durations
            .iter()
            .filter(|d| week_number(d.start_date) == week)
            .map(|d| d.duration_hours)
            .sum::<f64>();
        agg_reference += reference_per_week;

        reference.push(agg_reference);
        real.push(agg_real);
        labels.push(format!("Week {}", week));
    }

    ProgressionData {
        reference,
        real,
        labels,
    }
}

/// Completed versus remaining hours for a course.
///
/// The remainder is the raw difference and goes negative when more time was
/// logged than the workload calls for.
pub fn generate_workload_breakdown(course: &Course, completed_hours: f64) -> WorkloadBreakdown {
    WorkloadBreakdown {
        completed_hours,
        remaining_hours: course.workload_hours() - completed_hours,
    }
}

/// Fetch a course's chart inputs and build its progression series.
pub async fn get_progression_chart(
    repo: &dyn FullRepository,
    course_id: CourseId,
    now: NaiveDateTime,
) -> RepositoryResult<ProgressionData> {
    let course = db::services::get_course(repo, course_id).await?;
    let durations =
        db::services::get_completed_session_durations_for_course(repo, course_id).await?;
    Ok(generate_progression(&course, &durations, now))
}

/// Fetch a course's logged hours and build its workload breakdown.
pub async fn get_workload_chart(
    repo: &dyn FullRepository,
    course_id: CourseId,
) -> RepositoryResult<WorkloadBreakdown> {
    let course = db::services::get_course(repo, course_id).await?;
    let completed = db::services::get_study_hours_for_course(repo, course_id).await?;
    Ok(generate_workload_breakdown(&course, completed))
}
