//! Calculation logic for the Labor Cost Quotation Engine.
//!
//! This module contains all the calculation functions for producing a
//! quotation: markup pricing, standard hourly wage derivation, per-group
//! billing with the statutory premium for holiday and overtime work, and
//! aggregation of the full report across a list of staff groups.

mod billing_price;
mod group_billing;
mod hourly_wage;
mod quote;

pub use billing_price::billing_price;
pub use group_billing::{SHIFT_HOURS_PER_DAY, bill_group, statutory_premium};
pub use hourly_wage::{STANDARD_MONTHLY_HOURS, hourly_wage};
pub use quote::build_quote;
