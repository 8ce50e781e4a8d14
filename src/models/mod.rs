//! Domain model types for courses, study sessions and calendar policy.

pub mod course;
pub mod study_session;
pub mod week;

pub use course::{Course, HOURS_PER_CREDIT};
pub use study_session::StudySession;
pub use week::week_number;
