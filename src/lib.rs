//! Weekly timesheet engine.
//!
//! This crate turns a batch of raw employee shift records into weekly
//! timesheets: regular hours up to a weekly threshold, overtime beyond it,
//! and the shifts rejected for overlapping another shift or for carrying
//! malformed timestamps.

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
