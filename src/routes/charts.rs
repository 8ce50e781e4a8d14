//! DTO types for the course chart endpoints.

use serde::{Deserialize, Serialize};

/// Week-by-week cumulative progression for a course.
///
/// The three sequences are index-aligned: entry `i` of `reference` and
/// `real` belongs to label `i`. Both series are seeded with a leading zero
/// under an empty label so rendered charts start at the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionData {
    /// Cumulative recommended progress (workload spread evenly over weeks).
    pub reference: Vec<f64>,
    /// Cumulative completed study hours.
    pub real: Vec<f64>,
    /// `"Week {n}"` labels, one per chart point.
    pub labels: Vec<String>,
}

/// Completed versus remaining study hours for a course.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkloadBreakdown {
    pub completed_hours: f64,
    /// Workload minus completed hours. Negative when more time was logged
    /// than the workload calls for; deliberately not clamped.
    pub remaining_hours: f64,
}

pub const GET_PROGRESSION_CHART: &str = "get_progression_chart";
pub const GET_WORKLOAD_CHART: &str = "get_workload_chart";
