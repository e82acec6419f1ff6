//! Request types for the quotation engine API.
//!
//! This module defines the JSON request structures for the group and
//! rate endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for `POST /groups`.
///
/// The salary arrives as text, the way the form field captures it: digits
/// with optional comma grouping. Every other field is numeric and defaults
/// to zero when omitted, matching the form's initial values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddGroupRequest {
    /// Annual salary text (e.g., "36,000,000").
    pub salary: String,
    /// Number of staff in the group.
    #[serde(default)]
    pub headcount: u32,
    /// Weekday workdays in the month.
    #[serde(default)]
    pub weekday_days: u32,
    /// Holiday workdays in the month.
    #[serde(default)]
    pub holiday_days: u32,
    /// Monthly overtime hours.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

/// Request body for `PUT /rates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesRequest {
    /// Overhead percentage.
    pub overhead_pct: Decimal,
    /// Margin percentage.
    pub margin_pct: Decimal,
}
