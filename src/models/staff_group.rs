//! Staff group model.
//!
//! This module defines the StaffGroup struct representing one group of
//! identically paid staff with a shared monthly work pattern.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a group of staff sharing one salary and work pattern.
///
/// Groups are immutable once added to a session; the only way to remove
/// one is a full-list reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffGroup {
    /// Display label assigned at insertion (e.g., "Group 1").
    pub label: String,
    /// Annual salary in whole currency units. Always positive.
    pub annual_salary: i64,
    /// Number of staff in the group.
    pub headcount: u32,
    /// Weekday workdays in the month (0-31).
    pub weekday_days: u32,
    /// Holiday/weekend workdays in the month (0-31).
    pub holiday_days: u32,
    /// Monthly overtime hours (0-100, fractional allowed).
    pub overtime_hours: Decimal,
}

impl StaffGroup {
    /// Returns true if no category can produce a nonzero billed amount.
    ///
    /// # Examples
    ///
    /// ```
    /// use quote_engine::models::StaffGroup;
    /// use rust_decimal::Decimal;
    ///
    /// let group = StaffGroup {
    ///     label: "Group 1".to_string(),
    ///     annual_salary: 36_000_000,
    ///     headcount: 0,
    ///     weekday_days: 20,
    ///     holiday_days: 0,
    ///     overtime_hours: Decimal::ZERO,
    /// };
    /// assert!(group.is_idle());
    /// ```
    pub fn is_idle(&self) -> bool {
        self.headcount == 0
            || (self.weekday_days == 0
                && self.holiday_days == 0
                && self.overtime_hours.is_zero())
    }
}
