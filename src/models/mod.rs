//! Core data models for the Labor Cost Quotation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod quote;
mod rates;
mod staff_group;

pub use quote::{CategoryShare, CostCategory, GroupBilling, QuoteReport, QuoteTotals};
pub use rates::BillingRates;
pub use staff_group::StaffGroup;
