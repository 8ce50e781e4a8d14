//! DTO types for the course endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::CourseId;

/// Lightweight course listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseInfo {
    pub course_id: CourseId,
    pub title: String,
    pub credits: f64,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    /// Total expected study hours derived from credits.
    pub workload_hours: f64,
}

pub const LIST_COURSES: &str = "list_courses";
pub const POST_COURSE: &str = "store_course";
pub const GET_COURSE: &str = "get_course";
