//! Course domain type.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::api::{CourseId, UserId};

/// Expected study hours per credit point.
pub const HOURS_PER_CREDIT: f64 = 25.2;

/// A course a user is enrolled in for an academic period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Database id; `None` until persisted.
    pub id: Option<CourseId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Credit points (decimal-valued, e.g. 7.5).
    pub credits: f64,
    /// First day of the academic period.
    pub date_from: NaiveDate,
    /// Last day of the academic period.
    pub date_to: NaiveDate,
    pub date_created: NaiveDateTime,
    pub user_id: UserId,
}

impl Course {
    /// Total expected study hours for the course.
    pub fn workload_hours(&self) -> f64 {
        self.credits * HOURS_PER_CREDIT
    }

    /// Whether the course period contains `now`.
    ///
    /// Both bounds are midnight-anchored and compared strictly, so a course
    /// is not active on the morning of its `date_from` before midnight has
    /// passed, nor on `date_to` itself.
    pub fn is_active_at(&self, now: NaiveDateTime) -> bool {
        let from = self.date_from.and_time(chrono::NaiveTime::MIN);
        let to = self.date_to.and_time(chrono::NaiveTime::MIN);
        now > from && now < to
    }

    /// Whether the course period has not yet ended at `now`.
    pub fn is_current_at(&self, now: NaiveDateTime) -> bool {
        now <= self.date_to.and_time(chrono::NaiveTime::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(credits: f64, from: (i32, u32, u32), to: (i32, u32, u32)) -> Course {
        Course {
            id: Some(CourseId::new(1)),
            title: "Algorithms".to_string(),
            description: None,
            credits,
            date_from: NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap(),
            date_to: NaiveDate::from_ymd_opt(to.0, to.1, to.2).unwrap(),
            date_created: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap(),
            user_id: UserId::new(1),
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_workload_hours() {
        let c = course(10.0, (2018, 1, 8), (2018, 6, 1));
        assert!((c.workload_hours() - 252.0).abs() < 1e-9);
    }

    #[test]
    fn test_workload_hours_decimal_credits() {
        let c = course(7.5, (2018, 1, 8), (2018, 6, 1));
        assert!((c.workload_hours() - 189.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_active_inside_period() {
        let c = course(10.0, (2018, 1, 8), (2018, 6, 1));
        assert!(c.is_active_at(at(2018, 3, 15, 10)));
    }

    #[test]
    fn test_is_active_strict_bounds() {
        let c = course(10.0, (2018, 1, 8), (2018, 6, 1));
        // Midnight on date_from is not yet active; later the same day is.
        assert!(!c.is_active_at(at(2018, 1, 8, 0)));
        assert!(c.is_active_at(at(2018, 1, 8, 1)));
        // Midnight on date_to has already closed the window.
        assert!(!c.is_active_at(at(2018, 6, 1, 0)));
    }

    #[test]
    fn test_is_current_until_end() {
        let c = course(10.0, (2018, 1, 8), (2018, 6, 1));
        assert!(c.is_current_at(at(2018, 6, 1, 0)));
        assert!(!c.is_current_at(at(2018, 6, 2, 0)));
    }
}
