//! # Study Assistant Backend
//!
//! Backend for a personal study-management application.
//!
//! This crate tracks a user's courses and study sessions, guards new
//! sessions against scheduling collisions, and aggregates completed study
//! time into week-by-week progress charts. The backend exposes a REST API
//! via Axum for the web frontend.
//!
//! ## Features
//!
//! - **Conflict Detection**: Half-open interval overlap test between a
//!   candidate session and the user's planned sessions
//! - **Progress Charts**: Cumulative real/reference progression series and
//!   workload breakdowns, bucketed by calendar week
//! - **Storage Abstraction**: Repository pattern with an in-memory backend
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and consolidated DTO re-exports
//! - [`models`]: Domain types and the calendar week policy
//! - [`db`]: Repository pattern and storage layer
//! - [`services`]: Conflict detection and chart aggregation
//! - [`routes`]: Route-specific data types
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
