//! HTTP request handlers for the timesheet API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::summarize_shifts;
use crate::error::EngineError;
use crate::models::ShiftRecord;

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/timesheets", post(timesheets_handler))
        .with_state(state)
}

/// Query options for `POST /timesheets`.
#[derive(Debug, Default, Deserialize)]
pub struct TimesheetQuery {
    /// Return `{ reports, issues }` instead of the bare report array.
    #[serde(default)]
    pub include_issues: bool,
}

/// Handler for POST /timesheets.
///
/// Accepts a JSON array of shift records and returns the weekly reports.
async fn timesheets_handler(
    State(state): State<AppState>,
    Query(query): Query<TimesheetQuery>,
    payload: Result<Json<Vec<ShiftRecord>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet request");

    let records = match payload {
        Ok(Json(records)) => records,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
                    } else {
                        request_body_error(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    request_body_error(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiErrorResponse::bad_request(
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json"),
                ),
                other => request_body_error(other.body_text()),
            };
            return error.into_response();
        }
    };

    let batch = summarize_shifts(&records, state.config());
    info!(
        correlation_id = %correlation_id,
        shifts_count = records.len(),
        reports_count = batch.reports.len(),
        rejected_count = batch.issues.len(),
        "Timesheets calculated"
    );

    if query.include_issues {
        json_response(StatusCode::OK, &batch)
    } else {
        json_response(StatusCode::OK, &batch.reports)
    }
}

fn request_body_error(message: impl Into<String>) -> ApiErrorResponse {
    EngineError::InputParseError {
        source_name: "request body".to_string(),
        message: message.into(),
    }
    .into()
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
