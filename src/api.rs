//! Public API surface for the study-assistant backend.
//!
//! This file consolidates the DTO types exposed to callers (HTTP layer,
//! integration tests). All types derive Serialize/Deserialize for JSON
//! serialization.

pub use crate::models::course::Course;
pub use crate::models::study_session::StudySession;
pub use crate::models::week::week_number;
pub use crate::routes::charts::ProgressionData;
pub use crate::routes::charts::WorkloadBreakdown;
pub use crate::routes::courses::CourseInfo;
pub use crate::routes::sessions::ConflictCheckResult;
pub use crate::routes::sessions::StudySessionInfo;

use serde::{Deserialize, Serialize};

/// User identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// Course identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseId(pub i64);

/// Study session identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudySessionId(pub i64);

/// Study session type identifier (reading, exercises, lecture, ...).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionTypeId(pub i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl CourseId {
    pub fn new(value: i64) -> Self {
        CourseId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl StudySessionId {
    pub fn new(value: i64) -> Self {
        StudySessionId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl SessionTypeId {
    pub fn new(value: i64) -> Self {
        SessionTypeId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_newtypes_roundtrip() {
        assert_eq!(UserId::new(7).value(), 7);
        assert_eq!(CourseId::new(42).value(), 42);
        assert_eq!(StudySessionId::new(1).value(), 1);
        assert_eq!(SessionTypeId::new(3).value(), 3);
    }

    #[test]
    fn test_course_id_serde() {
        let id = CourseId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");
        let back: CourseId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_ordering() {
        assert!(StudySessionId::new(1) < StudySessionId::new(2));
    }
}
