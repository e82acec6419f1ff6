//! HTTP request handlers for the quotation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::export::quote_csv_bytes;

use super::request::{AddGroupRequest, RatesRequest};
use super::response::{
    AddGroupResponse, ApiError, ApiErrorResponse, ReportResponse, ResetResponse,
};
use super::state::AppState;

/// The filename offered for the report download.
const EXPORT_FILENAME: &str = "labor_cost_quotation.csv";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/groups", post(add_group_handler).delete(reset_handler))
        .route("/rates", put(set_rates_handler))
        .route("/report", get(report_handler))
        .route("/report/csv", get(export_csv_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /groups.
///
/// Validates and appends one staff group to the session.
async fn add_group_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddGroupRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing add-group request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let mut session = state.session().write().await;
    match session.add_group(
        &request.salary,
        request.headcount,
        request.weekday_days,
        request.holiday_days,
        request.overtime_hours,
    ) {
        Ok(group) => {
            let group = group.clone();
            let group_count = session.len();
            info!(
                correlation_id = %correlation_id,
                label = %group.label,
                annual_salary = group.annual_salary,
                headcount = group.headcount,
                group_count,
                "Staff group added"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(AddGroupResponse { group, group_count }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Staff group rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for DELETE /groups.
///
/// Unconditionally clears the staff-group list.
async fn reset_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let mut session = state.session().write().await;
    let removed = session.reset();
    info!(correlation_id = %correlation_id, removed, "Session reset");

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ResetResponse { removed }),
    )
        .into_response()
}

/// Handler for PUT /rates.
///
/// Replaces the markup rates; both values are clamped into the configured
/// bounds and apply to the next computation pass.
async fn set_rates_handler(
    State(state): State<AppState>,
    payload: Result<Json<RatesRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let mut session = state.session().write().await;
    let rates = session.set_rates(request.overhead_pct, request.margin_pct);
    info!(
        correlation_id = %correlation_id,
        overhead_pct = %rates.overhead_pct,
        margin_pct = %rates.margin_pct,
        "Markup rates updated"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(rates),
    )
        .into_response()
}

/// Handler for GET /report.
///
/// Computes the full quotation report for the current session state.
async fn report_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let session = state.session().read().await;
    let report = session.compute();
    info!(
        correlation_id = %correlation_id,
        groups = report.rows.len(),
        grand_total = %report.totals.grand_total,
        "Report computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ReportResponse::from(report)),
    )
        .into_response()
}

/// Handler for GET /report/csv.
///
/// Renders the current report as a UTF-8-with-BOM delimited download.
async fn export_csv_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let session = state.session().read().await;
    let report = session.compute();

    match quote_csv_bytes(&report) {
        Ok(bytes) => {
            info!(
                correlation_id = %correlation_id,
                groups = report.rows.len(),
                bytes = bytes.len(),
                "Report exported"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Export failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
