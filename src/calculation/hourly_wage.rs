//! Standard hourly wage calculation.
//!
//! This module converts an annual salary into the hourly wage baseline
//! using the fixed legal standard of 209 monthly hours.

use rust_decimal::Decimal;

/// The fixed legal standard monthly hours used to derive hourly wages.
pub const STANDARD_MONTHLY_HOURS: u32 = 209;

/// Derives the standard hourly wage from an annual salary.
///
/// The annual salary is divided into twelve monthly salaries, and the
/// monthly salary is divided by the 209 standard monthly hours.
///
/// # Arguments
///
/// * `annual_salary` - Annual salary in whole currency units; validated as
///   positive at the input boundary before it reaches this function
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::hourly_wage;
/// use rust_decimal::Decimal;
///
/// let wage = hourly_wage(36_000_000);
/// assert_eq!(wage.round_dp(2), Decimal::new(1435407, 2));
/// ```
pub fn hourly_wage(annual_salary: i64) -> Decimal {
    let monthly_salary = Decimal::from(annual_salary) / Decimal::from(12);
    monthly_salary / Decimal::from(STANDARD_MONTHLY_HOURS)
}
