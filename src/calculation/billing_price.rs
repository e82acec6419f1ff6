//! Markup pricing functionality.
//!
//! This module provides the pricing function that turns a base labor cost
//! into a billed price by applying the overhead markup and then the margin
//! markup on the loaded cost.

use rust_decimal::Decimal;

/// Computes the billed price for a base cost.
///
/// The overhead percentage is applied to the base cost to obtain the cost
/// price, and the margin percentage is then applied to the cost price:
///
/// ```text
/// cost_price = base_cost * (1 + overhead_pct / 100)
/// billed     = cost_price * (1 + margin_pct / 100)
/// ```
///
/// The function is pure and always succeeds for finite input. It accepts
/// any non-negative rates; the [0, 500] range is enforced by the input
/// boundary, not here.
///
/// # Arguments
///
/// * `base_cost` - The base labor cost before markups
/// * `overhead_pct` - Overhead percentage (e.g., 50 for 50%)
/// * `margin_pct` - Margin percentage (e.g., 10 for 10%)
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::billing_price;
/// use rust_decimal::Decimal;
///
/// let billed = billing_price(Decimal::from(100), Decimal::from(50), Decimal::from(10));
/// assert_eq!(billed, Decimal::from(165));
/// ```
pub fn billing_price(base_cost: Decimal, overhead_pct: Decimal, margin_pct: Decimal) -> Decimal {
    let overhead_amount = base_cost * (overhead_pct / Decimal::ONE_HUNDRED);
    let cost_price = base_cost + overhead_amount;
    let margin_amount = cost_price * (margin_pct / Decimal::ONE_HUNDRED);
    cost_price + margin_amount
}
