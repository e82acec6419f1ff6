//! Quote aggregation across staff groups.
//!
//! This module applies the per-group billing to an ordered list of staff
//! groups and assembles the full quotation report: per-group rows,
//! aggregate totals, and the category breakdown for the proportion chart.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    BillingRates, CategoryShare, CostCategory, QuoteReport, QuoteTotals, StaffGroup,
};

use super::group_billing::bill_group;

/// Builds the complete quotation report for a list of staff groups.
///
/// Every group is billed independently via [`bill_group`] and the category
/// totals are summed across the list. The computation is stateless and
/// runs in full on every invocation; there is no caching or incremental
/// update since the list is small and recomputation is trivial.
///
/// Summation is associative and order-independent: reordering the groups
/// changes the row order but not the totals.
///
/// # Arguments
///
/// * `groups` - The staff groups, in insertion order
/// * `rates` - The markup rates for this pass
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::build_quote;
/// use quote_engine::models::BillingRates;
///
/// let report = build_quote(&[], &BillingRates::default());
/// assert!(report.rows.is_empty());
/// assert_eq!(report.totals.headcount, 0);
/// ```
pub fn build_quote(groups: &[StaffGroup], rates: &BillingRates) -> QuoteReport {
    let rows: Vec<_> = groups.iter().map(|g| bill_group(g, rates)).collect();

    let mut totals = QuoteTotals::zero();
    for row in &rows {
        totals.weekday_total += row.weekday_total;
        totals.holiday_total += row.holiday_total;
        totals.overtime_total += row.overtime_total;
        totals.grand_total += row.grand_total;
        totals.headcount += row.headcount;
    }

    let breakdown = vec![
        category_share(CostCategory::Weekday, totals.weekday_total, totals.grand_total),
        category_share(CostCategory::Holiday, totals.holiday_total, totals.grand_total),
        category_share(CostCategory::Overtime, totals.overtime_total, totals.grand_total),
    ];

    QuoteReport {
        quote_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        rates: *rates,
        rows,
        totals,
        breakdown,
    }
}

/// Builds one proportion-chart slice; the share is zero for an empty quote.
fn category_share(category: CostCategory, amount: Decimal, grand_total: Decimal) -> CategoryShare {
    let share_pct = if grand_total.is_zero() {
        Decimal::ZERO
    } else {
        (amount / grand_total * Decimal::ONE_HUNDRED).round_dp(1)
    };

    CategoryShare {
        category,
        amount,
        share_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn default_rates() -> BillingRates {
        BillingRates {
            overhead_pct: dec("50.0"),
            margin_pct: dec("10.0"),
        }
    }

    fn group(label: &str, salary: i64, headcount: u32, weekdays: u32, holidays: u32, overtime: &str) -> StaffGroup {
        StaffGroup {
            label: label.to_string(),
            annual_salary: salary,
            headcount,
            weekday_days: weekdays,
            holiday_days: holidays,
            overtime_hours: dec(overtime),
        }
    }

    /// QA-001: empty list produces an empty report with zero totals
    #[test]
    fn test_empty_list() {
        let report = build_quote(&[], &default_rates());

        assert!(report.rows.is_empty());
        assert_eq!(report.totals.grand_total, Decimal::ZERO);
        assert_eq!(report.totals.headcount, 0);
        assert_eq!(report.breakdown.len(), 3);
        for slice in &report.breakdown {
            assert_eq!(slice.amount, Decimal::ZERO);
            assert_eq!(slice.share_pct, Decimal::ZERO);
        }
    }

    /// QA-002: totals sum the per-group rows
    #[test]
    fn test_totals_sum_rows() {
        let groups = vec![
            group("Group 1", 36_000_000, 2, 20, 0, "10.0"),
            group("Group 2", 48_000_000, 1, 22, 2, "0.0"),
        ];

        let report = build_quote(&groups, &default_rates());
        assert_eq!(report.rows.len(), 2);

        let weekday_sum: Decimal = report.rows.iter().map(|r| r.weekday_total).sum();
        let grand_sum: Decimal = report.rows.iter().map(|r| r.grand_total).sum();
        assert_eq!(report.totals.weekday_total, weekday_sum);
        assert_eq!(report.totals.grand_total, grand_sum);
        assert_eq!(report.totals.headcount, 3);
    }

    /// QA-003: aggregation is order-independent
    #[test]
    fn test_order_independence() {
        let a = group("Group 1", 36_000_000, 2, 20, 0, "10.0");
        let b = group("Group 2", 52_000_000, 3, 18, 4, "7.5");

        let forward = build_quote(&[a.clone(), b.clone()], &default_rates());
        let reversed = build_quote(&[b, a], &default_rates());

        assert_eq!(
            forward.totals.grand_total.round_dp(4),
            reversed.totals.grand_total.round_dp(4)
        );
        assert_eq!(
            forward.totals.weekday_total.round_dp(4),
            reversed.totals.weekday_total.round_dp(4)
        );
    }

    /// QA-004: aggregating [A, B] equals aggregating [A] plus [B]
    #[test]
    fn test_aggregation_is_associative() {
        let a = group("Group 1", 36_000_000, 2, 20, 0, "10.0");
        let b = group("Group 2", 52_000_000, 3, 18, 4, "7.5");

        let combined = build_quote(&[a.clone(), b.clone()], &default_rates());
        let only_a = build_quote(&[a], &default_rates());
        let only_b = build_quote(&[b], &default_rates());

        assert_eq!(
            combined.totals.grand_total.round_dp(4),
            (only_a.totals.grand_total + only_b.totals.grand_total).round_dp(4)
        );
    }

    /// QA-005: breakdown shares cover the whole grand total
    #[test]
    fn test_breakdown_shares_sum_to_100() {
        let groups = vec![group("Group 1", 36_000_000, 2, 20, 3, "10.0")];
        let report = build_quote(&groups, &default_rates());

        let share_sum: Decimal = report.breakdown.iter().map(|s| s.share_pct).sum();
        // Per-slice rounding to 0.1% can leave the sum a notch off 100.
        assert!((share_sum - Decimal::ONE_HUNDRED).abs() <= dec("0.2"));

        let amount_sum: Decimal = report.breakdown.iter().map(|s| s.amount).sum();
        assert_eq!(amount_sum, report.totals.grand_total);
    }

    #[test]
    fn test_breakdown_categories_in_fixed_order() {
        let report = build_quote(&[], &default_rates());
        let categories: Vec<_> = report.breakdown.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                CostCategory::Weekday,
                CostCategory::Holiday,
                CostCategory::Overtime
            ]
        );
    }

    #[test]
    fn test_report_carries_rates_and_version() {
        let rates = BillingRates {
            overhead_pct: dec("35.0"),
            margin_pct: dec("5.0"),
        };
        let report = build_quote(&[], &rates);

        assert_eq!(report.rates, rates);
        assert_eq!(report.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_rows_preserve_insertion_order() {
        let groups = vec![
            group("Group 1", 30_000_000, 1, 20, 0, "0"),
            group("Group 2", 40_000_000, 1, 20, 0, "0"),
            group("Group 3", 50_000_000, 1, 20, 0, "0"),
        ];

        let report = build_quote(&groups, &default_rates());
        let labels: Vec<_> = report.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Group 1", "Group 2", "Group 3"]);
    }
}
