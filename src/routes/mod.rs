pub mod charts;
pub mod courses;
pub mod sessions;
