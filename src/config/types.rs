//! Configuration types for the quotation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the billing YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Default markup rates and the bounds the input boundary clamps to.
#[derive(Debug, Clone, Deserialize)]
pub struct RateDefaults {
    /// Default overhead percentage applied when a session starts.
    pub default_overhead_pct: Decimal,
    /// Default margin percentage applied when a session starts.
    pub default_margin_pct: Decimal,
    /// Lower bound for both markup percentages.
    pub min_pct: Decimal,
    /// Upper bound for both markup percentages.
    pub max_pct: Decimal,
    /// Adjustment step for the rate controls.
    pub step_pct: Decimal,
}

/// Bounds applied to staff-group input fields at the input boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct InputLimits {
    /// Maximum number of weekday or holiday workdays per month.
    pub max_month_days: u32,
    /// Maximum monthly overtime hours.
    pub max_overtime_hours: Decimal,
}

/// The complete billing configuration loaded from `billing.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Markup rate defaults and bounds.
    pub rates: RateDefaults,
    /// Input field limits.
    pub limits: InputLimits,
}

impl BillingConfig {
    /// Returns the markup rates a fresh session starts with.
    pub fn default_rates(&self) -> crate::models::BillingRates {
        crate::models::BillingRates {
            overhead_pct: self.rates.default_overhead_pct,
            margin_pct: self.rates.default_margin_pct,
        }
    }

    /// Clamps a markup percentage into the configured bounds.
    pub fn clamp_rate(&self, pct: Decimal) -> Decimal {
        pct.clamp(self.rates.min_pct, self.rates.max_pct)
    }

    /// Clamps a monthly workday count into the configured bounds.
    pub fn clamp_days(&self, days: u32) -> u32 {
        days.min(self.limits.max_month_days)
    }

    /// Clamps monthly overtime hours into the configured bounds.
    pub fn clamp_overtime_hours(&self, hours: Decimal) -> Decimal {
        hours.clamp(Decimal::ZERO, self.limits.max_overtime_hours)
    }
}

impl Default for BillingConfig {
    /// Built-in defaults matching the shipped `config/billing.yaml`, so the
    /// engine is usable without a configuration file on disk.
    fn default() -> Self {
        Self {
            rates: RateDefaults {
                default_overhead_pct: Decimal::new(500, 1),
                default_margin_pct: Decimal::new(100, 1),
                min_pct: Decimal::ZERO,
                max_pct: Decimal::from(500),
                step_pct: Decimal::new(5, 1),
            },
            limits: InputLimits {
                max_month_days: 31,
                max_overtime_hours: Decimal::from(100),
            },
        }
    }
}
