//! Shift batch loading.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftRecord;

/// Reads a JSON array of shift records from a file.
///
/// # Example
///
/// ```no_run
/// use weekly_timesheet::batch::load_shift_records;
///
/// let records = load_shift_records("./demos/data.json").unwrap();
/// println!("{} shifts loaded", records.len());
/// ```
pub fn load_shift_records<P: AsRef<Path>>(path: P) -> EngineResult<Vec<ShiftRecord>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::InputNotFound {
        path: path_str.clone(),
    })?;

    decode(&content, path_str)
}

/// Decodes a JSON array of shift records from text.
///
/// # Example
///
/// ```
/// use weekly_timesheet::batch::parse_shift_records;
///
/// let records = parse_shift_records(
///     r#"[{"ShiftID": 1, "EmployeeID": 2, "StartTime": "x", "EndTime": "y"}]"#,
/// )
/// .unwrap();
/// // Timestamps are checked later, by the pipeline.
/// assert_eq!(records[0].start_time, "x");
/// ```
pub fn parse_shift_records(content: &str) -> EngineResult<Vec<ShiftRecord>> {
    decode(content, "<inline>".to_string())
}

fn decode(content: &str, source_name: String) -> EngineResult<Vec<ShiftRecord>> {
    serde_json::from_str(content).map_err(|e| EngineError::InputParseError {
        source_name,
        message: e.to_string(),
    })
}
