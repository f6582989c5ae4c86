//! Report rendering.

use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeWeekReport;

/// Renders reports as a JSON array indented with four spaces.
pub fn render_reports(reports: &[EmployeeWeekReport]) -> EngineResult<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

    reports
        .serialize(&mut serializer)
        .map_err(|e| EngineError::RenderError {
            message: e.to_string(),
        })?;

    String::from_utf8(buffer).map_err(|e| EngineError::RenderError {
        message: e.to_string(),
    })
}
