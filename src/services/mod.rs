//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that sits between the database
//! operations and the HTTP surface. Services orchestrate repository calls
//! and implement the scheduling and chart computations.

pub mod charts;

pub mod conflict;

pub use charts::{generate_progression, generate_workload_breakdown};
pub use conflict::has_session_conflict;
