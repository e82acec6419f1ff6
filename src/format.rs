//! Currency display formatting.
//!
//! The report table and KPI summary display amounts truncated to whole
//! currency units with comma grouping; the export keeps raw numeric
//! values. This module provides the display-side formatting.

use rust_decimal::Decimal;

/// Formats an amount as a whole-unit currency string with comma grouping.
///
/// The fractional part is truncated, matching the quotation sheet's
/// integer display of billed amounts.
///
/// # Examples
///
/// ```
/// use quote_engine::format::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(828947368, 2)), "8,289,473");
/// assert_eq!(format_currency(Decimal::ZERO), "0");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let whole = amount.trunc();
    let digits = whole.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole.is_sign_negative() && !whole.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
