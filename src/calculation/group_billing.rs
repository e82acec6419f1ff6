//! Per-group billing calculation.
//!
//! This module computes the billed weekday, holiday, and overtime totals
//! for a single staff group, applying the statutory 1.5x premium to
//! holiday and overtime work before the markup pricing.

use rust_decimal::Decimal;

use crate::models::{BillingRates, GroupBilling, StaffGroup};

use super::billing_price::billing_price;
use super::hourly_wage::hourly_wage;

/// Hours in one standard working day.
pub const SHIFT_HOURS_PER_DAY: u32 = 8;

/// Returns the statutory premium multiplier for holiday and overtime work.
///
/// Labor law mandates a 50% premium on the standard wage for holiday work
/// and for extended hours beyond the standard shift, hence 1.5.
pub fn statutory_premium() -> Decimal {
    Decimal::new(15, 1)
}

/// Computes the billed monthly cost of one staff group.
///
/// The calculation derives the standard hourly wage from the annual
/// salary, prices one weekday, one holiday day (8 hours at the statutory
/// premium), and one overtime hour (at the statutory premium) through the
/// markup pricing, then multiplies by the group's days/hours and headcount:
///
/// 1. hourly wage = (annual salary / 12) / 209
/// 2. weekday daily billed = billed(wage x 8)
/// 3. holiday daily billed = billed(wage x 8 x 1.5)
/// 4. overtime hourly billed = billed(wage x 1.5)
/// 5. category total = billed unit cost x days-or-hours x headcount
///
/// A zero headcount or a zero day/hour field yields a zero contribution
/// for the affected categories, never an error. Salary is validated as
/// positive at the input boundary and never reaches this function at or
/// below zero.
///
/// # Arguments
///
/// * `group` - The staff group to bill
/// * `rates` - The markup rates for this computation pass
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::bill_group;
/// use quote_engine::models::{BillingRates, StaffGroup};
/// use rust_decimal::Decimal;
///
/// let group = StaffGroup {
///     label: "Group 1".to_string(),
///     annual_salary: 36_000_000,
///     headcount: 2,
///     weekday_days: 20,
///     holiday_days: 0,
///     overtime_hours: Decimal::from(10),
/// };
///
/// let billing = bill_group(&group, &BillingRates::default());
/// assert_eq!(billing.grand_total.round_dp(2), Decimal::new(828947368, 2));
/// ```
pub fn bill_group(group: &StaffGroup, rates: &BillingRates) -> GroupBilling {
    let wage = hourly_wage(group.annual_salary);
    let headcount = Decimal::from(group.headcount);

    // Weekday: one standard 8-hour day
    let weekday_daily_wage = wage * Decimal::from(SHIFT_HOURS_PER_DAY);
    let weekday_daily_billed = billing_price(weekday_daily_wage, rates.overhead_pct, rates.margin_pct);

    // Holiday: one 8-hour day at the statutory premium
    let holiday_daily_wage = weekday_daily_wage * statutory_premium();
    let holiday_daily_billed = billing_price(holiday_daily_wage, rates.overhead_pct, rates.margin_pct);

    // Overtime: one hour at the statutory premium
    let overtime_hourly_wage = wage * statutory_premium();
    let overtime_hourly_billed =
        billing_price(overtime_hourly_wage, rates.overhead_pct, rates.margin_pct);

    let weekday_total = weekday_daily_billed * Decimal::from(group.weekday_days) * headcount;
    let holiday_total = holiday_daily_billed * Decimal::from(group.holiday_days) * headcount;
    let overtime_total = overtime_hourly_billed * group.overtime_hours * headcount;
    let grand_total = weekday_total + holiday_total + overtime_total;

    GroupBilling {
        label: group.label.clone(),
        annual_salary: group.annual_salary,
        headcount: group.headcount,
        weekday_days: group.weekday_days,
        holiday_days: group.holiday_days,
        overtime_hours: group.overtime_hours,
        weekday_total,
        holiday_total,
        overtime_total,
        grand_total,
    }
}
