//! Response types for the quotation engine API.
//!
//! This module defines the success payloads, the display-formatted report
//! surfaces, and the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::format::format_currency;
use crate::models::{GroupBilling, QuoteReport, StaffGroup};

/// Response body for `POST /groups`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddGroupResponse {
    /// The stored staff group, including its assigned label.
    pub group: StaffGroup,
    /// The number of groups in the session after the insertion.
    pub group_count: usize,
}

/// Response body for `DELETE /groups`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    /// The number of groups the reset removed.
    pub removed: usize,
}

/// One display-formatted row of the report table.
///
/// Amount columns are whole-unit currency strings with comma grouping;
/// the total row blanks the salary and dashes the day/hour columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayRow {
    /// The group label, or "Total" for the synthesized total row.
    pub label: String,
    /// Formatted annual salary; empty on the total row.
    pub annual_salary: String,
    /// Headcount.
    pub headcount: String,
    /// Weekday workdays.
    pub weekday_days: String,
    /// Holiday workdays.
    pub holiday_days: String,
    /// Monthly overtime hours.
    pub overtime_hours: String,
    /// Formatted weekday total.
    pub weekday_total: String,
    /// Formatted holiday total.
    pub holiday_total: String,
    /// Formatted overtime total.
    pub overtime_total: String,
    /// Formatted grand total.
    pub grand_total: String,
}

impl From<&GroupBilling> for DisplayRow {
    fn from(row: &GroupBilling) -> Self {
        Self {
            label: row.label.clone(),
            annual_salary: format_currency(Decimal::from(row.annual_salary)),
            headcount: row.headcount.to_string(),
            weekday_days: row.weekday_days.to_string(),
            holiday_days: row.holiday_days.to_string(),
            overtime_hours: row.overtime_hours.normalize().to_string(),
            weekday_total: format_currency(row.weekday_total),
            holiday_total: format_currency(row.holiday_total),
            overtime_total: format_currency(row.overtime_total),
            grand_total: format_currency(row.grand_total),
        }
    }
}

/// The display-formatted 4-metric KPI summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySummary {
    /// Formatted weekday total across all groups.
    pub weekday_total: String,
    /// Formatted holiday total across all groups.
    pub holiday_total: String,
    /// Formatted overtime total across all groups.
    pub overtime_total: String,
    /// Formatted grand total across all groups.
    pub grand_total: String,
}

/// Response body for `GET /report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    /// The raw numeric report.
    pub report: QuoteReport,
    /// Display-formatted per-group rows.
    pub table: Vec<DisplayRow>,
    /// The display-formatted synthesized total row.
    pub total_row: DisplayRow,
    /// The display-formatted KPI summary.
    pub summary: DisplaySummary,
}

impl From<QuoteReport> for ReportResponse {
    fn from(report: QuoteReport) -> Self {
        let table: Vec<DisplayRow> = report.rows.iter().map(DisplayRow::from).collect();

        let totals = &report.totals;
        let total_row = DisplayRow {
            label: "Total".to_string(),
            annual_salary: String::new(),
            headcount: totals.headcount.to_string(),
            weekday_days: "-".to_string(),
            holiday_days: "-".to_string(),
            overtime_hours: "-".to_string(),
            weekday_total: format_currency(totals.weekday_total),
            holiday_total: format_currency(totals.holiday_total),
            overtime_total: format_currency(totals.overtime_total),
            grand_total: format_currency(totals.grand_total),
        };
        let summary = DisplaySummary {
            weekday_total: format_currency(totals.weekday_total),
            holiday_total: format_currency(totals.holiday_total),
            overtime_total: format_currency(totals.overtime_total),
            grand_total: format_currency(totals.grand_total),
        };

        Self {
            report,
            table,
            total_row,
            summary,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::SalaryNotNumeric { input } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "SALARY_NOT_NUMERIC",
                    format!("Salary must contain only digits and commas: '{}'", input),
                    "The group was not added to the session",
                ),
            },
            EngineError::SalaryNotPositive { salary } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "SALARY_NOT_POSITIVE",
                    format!("Salary must be greater than zero, got {}", salary),
                    "The group was not added to the session",
                ),
            },
            EngineError::ExportError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Export failed", message),
            },
        }
    }
}
