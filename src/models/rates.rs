//! Markup rate model.
//!
//! This module defines the session-wide overhead and margin percentages
//! applied uniformly to every staff group in a computation pass.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The pair of markup percentages applied to base labor cost.
///
/// Overhead covers employer-side costs (insurance, severance, operations);
/// margin is the provider's profit on top of the loaded cost. Both are
/// mutable at any time and are supplied fresh to every computation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingRates {
    /// Overhead percentage applied to base labor cost.
    pub overhead_pct: Decimal,
    /// Margin percentage applied after overhead.
    pub margin_pct: Decimal,
}

impl Default for BillingRates {
    /// The rates a fresh session starts with: 50% overhead, 10% margin.
    fn default() -> Self {
        Self {
            overhead_pct: Decimal::new(500, 1),
            margin_pct: Decimal::new(100, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_rates() {
        let rates = BillingRates::default();
        assert_eq!(rates.overhead_pct, dec("50.0"));
        assert_eq!(rates.margin_pct, dec("10.0"));
    }

    #[test]
    fn test_serialization() {
        let rates = BillingRates {
            overhead_pct: dec("45.5"),
            margin_pct: dec("12.0"),
        };

        let json = serde_json::to_string(&rates).unwrap();
        assert!(json.contains("\"overhead_pct\":\"45.5\""));
        assert!(json.contains("\"margin_pct\":\"12.0\""));
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{"overhead_pct": "50.0", "margin_pct": "10.0"}"#;
        let rates: BillingRates = serde_json::from_str(json).unwrap();
        assert_eq!(rates, BillingRates::default());
    }
}
