//! Quotation result models.
//!
//! This module contains the [`QuoteReport`] type and its associated
//! structures that capture all outputs of a quotation pass: per-group
//! billing rows, aggregate totals, and the category breakdown behind the
//! proportion chart.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BillingRates;

/// The three billable cost categories of a quotation.
///
/// # Example
///
/// ```
/// use quote_engine::models::CostCategory;
///
/// let category = CostCategory::Weekday;
/// assert_eq!(format!("{:?}", category), "Weekday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    /// Standard weekday work (8-hour days at the base billed rate).
    Weekday,
    /// Holiday/weekend work (8-hour days at the statutory 1.5x premium).
    Holiday,
    /// Extended work beyond standard shifts (hourly, at the 1.5x premium).
    Overtime,
}

/// The computed billing for a single staff group.
///
/// Echoes the group's input fields alongside the billed category totals so
/// one row carries everything the report table displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBilling {
    /// The group's display label.
    pub label: String,
    /// Annual salary in whole currency units.
    pub annual_salary: i64,
    /// Number of staff in the group.
    pub headcount: u32,
    /// Weekday workdays in the month.
    pub weekday_days: u32,
    /// Holiday workdays in the month.
    pub holiday_days: u32,
    /// Monthly overtime hours.
    pub overtime_hours: Decimal,
    /// Billed total for weekday work.
    pub weekday_total: Decimal,
    /// Billed total for holiday work.
    pub holiday_total: Decimal,
    /// Billed total for overtime work.
    pub overtime_total: Decimal,
    /// Sum of the three category totals.
    pub grand_total: Decimal,
}

/// Aggregated totals across all groups in a quotation.
///
/// These four amounts are the KPI summary; headcount is carried for the
/// synthesized total row of the report table and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTotals {
    /// Total billed weekday cost across all groups.
    pub weekday_total: Decimal,
    /// Total billed holiday cost across all groups.
    pub holiday_total: Decimal,
    /// Total billed overtime cost across all groups.
    pub overtime_total: Decimal,
    /// Grand total across all groups and categories.
    pub grand_total: Decimal,
    /// Total headcount across all groups.
    pub headcount: u32,
}

impl QuoteTotals {
    /// A totals record with every amount at zero.
    pub fn zero() -> Self {
        Self {
            weekday_total: Decimal::ZERO,
            holiday_total: Decimal::ZERO,
            overtime_total: Decimal::ZERO,
            grand_total: Decimal::ZERO,
            headcount: 0,
        }
    }
}

/// One slice of the cost proportion chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// The cost category this slice represents.
    pub category: CostCategory,
    /// The billed amount in this category.
    pub amount: Decimal,
    /// This category's percentage share of the grand total (0 when the
    /// grand total is zero).
    pub share_pct: Decimal,
}

/// The complete result of a quotation pass.
///
/// A pure function of the staff-group list and the markup rates; rebuilt in
/// full on every rate or list change, never updated incrementally.
///
/// # Example
///
/// ```
/// use quote_engine::models::{BillingRates, QuoteReport, QuoteTotals};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let report = QuoteReport {
///     quote_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     rates: BillingRates::default(),
///     rows: vec![],
///     totals: QuoteTotals::zero(),
///     breakdown: vec![],
/// };
/// assert!(report.rows.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteReport {
    /// Unique identifier for this quotation.
    pub quote_id: Uuid,
    /// When the quotation was computed.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the quotation.
    pub engine_version: String,
    /// The markup rates applied in this pass.
    pub rates: BillingRates,
    /// Per-group billing rows, in insertion order.
    pub rows: Vec<GroupBilling>,
    /// Aggregated totals across all rows.
    pub totals: QuoteTotals,
    /// Category amounts and shares for the proportion chart.
    pub breakdown: Vec<CategoryShare>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    /// Helper function to create Decimal values from strings
    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_row(grand_total: Decimal) -> GroupBilling {
        GroupBilling {
            label: "Group 1".to_string(),
            annual_salary: 36_000_000,
            headcount: 2,
            weekday_days: 20,
            holiday_days: 0,
            overtime_hours: dec("10.0"),
            weekday_total: grand_total,
            holiday_total: Decimal::ZERO,
            overtime_total: Decimal::ZERO,
            grand_total,
        }
    }

    #[test]
    fn test_cost_category_serialization() {
        let category = CostCategory::Weekday;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"weekday\"");

        let category = CostCategory::Holiday;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"holiday\"");

        let category = CostCategory::Overtime;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"overtime\"");
    }

    #[test]
    fn test_cost_category_round_trip() {
        for category in [
            CostCategory::Weekday,
            CostCategory::Holiday,
            CostCategory::Overtime,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            let deserialized: CostCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(category, deserialized);
        }
    }

    #[test]
    fn test_group_billing_serialization() {
        let row = create_sample_row(dec("7578947.37"));
        let json = serde_json::to_string(&row).unwrap();

        assert!(json.contains("\"label\":\"Group 1\""));
        assert!(json.contains("\"annual_salary\":36000000"));
        assert!(json.contains("\"headcount\":2"));
        assert!(json.contains("\"overtime_hours\":\"10.0\""));
        assert!(json.contains("\"grand_total\":\"7578947.37\""));
    }

    #[test]
    fn test_group_billing_deserialization() {
        let json = r#"{
            "label": "Group 2",
            "annual_salary": 48000000,
            "headcount": 1,
            "weekday_days": 22,
            "holiday_days": 2,
            "overtime_hours": "4.5",
            "weekday_total": "100.00",
            "holiday_total": "50.00",
            "overtime_total": "25.00",
            "grand_total": "175.00"
        }"#;

        let row: GroupBilling = serde_json::from_str(json).unwrap();
        assert_eq!(row.label, "Group 2");
        assert_eq!(row.annual_salary, 48_000_000);
        assert_eq!(row.grand_total, dec("175.00"));
    }

    #[test]
    fn test_quote_totals_zero() {
        let totals = QuoteTotals::zero();
        assert_eq!(totals.weekday_total, Decimal::ZERO);
        assert_eq!(totals.holiday_total, Decimal::ZERO);
        assert_eq!(totals.overtime_total, Decimal::ZERO);
        assert_eq!(totals.grand_total, Decimal::ZERO);
        assert_eq!(totals.headcount, 0);
    }

    #[test]
    fn test_quote_totals_serialization() {
        let totals = QuoteTotals {
            weekday_total: dec("1500.00"),
            holiday_total: dec("300.00"),
            overtime_total: dec("200.00"),
            grand_total: dec("2000.00"),
            headcount: 5,
        };

        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"weekday_total\":\"1500.00\""));
        assert!(json.contains("\"grand_total\":\"2000.00\""));
        assert!(json.contains("\"headcount\":5"));
    }

    #[test]
    fn test_grand_total_equals_sum_of_rows() {
        let rows = vec![
            create_sample_row(dec("100.00")),
            create_sample_row(dec("50.00")),
            create_sample_row(dec("75.50")),
        ];

        let sum: Decimal = rows.iter().map(|r| r.grand_total).sum();
        assert_eq!(sum, dec("225.50"));
    }

    #[test]
    fn test_quote_report_serialization() {
        let report = QuoteReport {
            quote_id: Uuid::nil(),
            generated_at: DateTime::parse_from_rfc3339("2026-01-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "1.0.0".to_string(),
            rates: BillingRates::default(),
            rows: vec![create_sample_row(dec("100.00"))],
            totals: QuoteTotals::zero(),
            breakdown: vec![CategoryShare {
                category: CostCategory::Weekday,
                amount: dec("100.00"),
                share_pct: dec("100.0"),
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"quote_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"engine_version\":\"1.0.0\""));
        assert!(json.contains("\"rates\":{"));
        assert!(json.contains("\"rows\":["));
        assert!(json.contains("\"breakdown\":["));
    }

    #[test]
    fn test_quote_report_deserialization() {
        let json = r#"{
            "quote_id": "12345678-1234-1234-1234-123456789012",
            "generated_at": "2026-01-15T10:00:00Z",
            "engine_version": "1.0.0",
            "rates": {"overhead_pct": "50.0", "margin_pct": "10.0"},
            "rows": [],
            "totals": {
                "weekday_total": "0",
                "holiday_total": "0",
                "overtime_total": "0",
                "grand_total": "0",
                "headcount": 0
            },
            "breakdown": []
        }"#;

        let report: QuoteReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.engine_version, "1.0.0");
        assert!(report.rows.is_empty());
        assert!(report.breakdown.is_empty());
    }
}
