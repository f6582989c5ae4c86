//! Error types for the weekly timesheet engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition raised outside the aggregation pass. The
//! aggregation pass itself never fails: per-shift problems are recorded as
//! [`ShiftIssue`](crate::models::ShiftIssue) data instead.

use thiserror::Error;

/// The main error type for the weekly timesheet engine.
///
/// # Example
///
/// ```
/// use weekly_timesheet::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/timesheet.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/timesheet.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was outside its accepted range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration key.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The shift batch file was not found.
    #[error("Shift input not found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The shift batch could not be decoded.
    #[error("Failed to parse shift input '{source_name}': {message}")]
    InputParseError {
        /// File path, or a label such as "request body".
        source_name: String,
        /// A description of the decode error.
        message: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: i64,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// Reports could not be rendered.
    #[error("Failed to render reports: {message}")]
    RenderError {
        /// A description of the serialization error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
