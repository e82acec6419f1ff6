//! Interactive quotation session.
//!
//! This module owns the mutable state of one quotation session: the
//! staff-group list and the markup rates. Both are held in an explicitly
//! passed state object rather than process-wide globals, and every
//! mutation goes through a plain method that returns a result.

use rust_decimal::Decimal;

use crate::calculation::build_quote;
use crate::config::BillingConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{BillingRates, QuoteReport, StaffGroup};

/// Parses a salary text field into a positive whole-currency amount.
///
/// The field accepts digits with optional comma grouping (e.g.,
/// "36,000,000"). Any other character rejects the input with
/// [`EngineError::SalaryNotNumeric`]; a parsed value at or below zero
/// rejects with the distinct [`EngineError::SalaryNotPositive`].
///
/// # Examples
///
/// ```
/// use quote_engine::session::parse_salary;
///
/// assert_eq!(parse_salary("36,000,000").unwrap(), 36_000_000);
/// assert!(parse_salary("abc").is_err());
/// assert!(parse_salary("0").is_err());
/// ```
pub fn parse_salary(raw: &str) -> EngineResult<i64> {
    let cleaned = raw.replace(',', "");
    let salary: i64 = cleaned
        .trim()
        .parse()
        .map_err(|_| EngineError::SalaryNotNumeric {
            input: raw.to_string(),
        })?;

    if salary <= 0 {
        return Err(EngineError::SalaryNotPositive { salary });
    }

    Ok(salary)
}

/// The state of one interactive quotation session.
///
/// Holds the staff-group list and the markup rates, plus the billing
/// configuration whose bounds the input boundary clamps to. Groups are
/// append-only; the only removal operation is a full reset.
///
/// # Example
///
/// ```
/// use quote_engine::session::QuoteSession;
/// use rust_decimal::Decimal;
///
/// let mut session = QuoteSession::default();
/// session
///     .add_group("36,000,000", 2, 20, 0, Decimal::from(10))
///     .unwrap();
///
/// let report = session.compute();
/// assert_eq!(report.rows.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QuoteSession {
    config: BillingConfig,
    groups: Vec<StaffGroup>,
    rates: BillingRates,
}

impl QuoteSession {
    /// Creates a session with the given billing configuration.
    ///
    /// The session starts with an empty group list and the configured
    /// default markup rates.
    pub fn new(config: BillingConfig) -> Self {
        let rates = config.default_rates();
        Self {
            config,
            groups: Vec::new(),
            rates,
        }
    }

    /// Validates and appends one staff group to the session.
    ///
    /// The salary text is parsed via [`parse_salary`]; day and hour fields
    /// are range-clamped into the configured limits, mirroring the bounded
    /// input controls of the form. The group receives the next sequential
    /// "Group N" label. The operation is atomic: on a salary rejection the
    /// list is untouched.
    ///
    /// # Arguments
    ///
    /// * `raw_salary` - Annual salary text, digits with optional commas
    /// * `headcount` - Number of staff in the group
    /// * `weekday_days` - Weekday workdays in the month
    /// * `holiday_days` - Holiday workdays in the month
    /// * `overtime_hours` - Monthly overtime hours
    ///
    /// # Returns
    ///
    /// Returns the stored group, or an error if:
    /// - The salary text is not numeric (`SalaryNotNumeric`)
    /// - The salary is zero or negative (`SalaryNotPositive`)
    pub fn add_group(
        &mut self,
        raw_salary: &str,
        headcount: u32,
        weekday_days: u32,
        holiday_days: u32,
        overtime_hours: Decimal,
    ) -> EngineResult<&StaffGroup> {
        let annual_salary = parse_salary(raw_salary)?;

        let group = StaffGroup {
            label: format!("Group {}", self.groups.len() + 1),
            annual_salary,
            headcount,
            weekday_days: self.config.clamp_days(weekday_days),
            holiday_days: self.config.clamp_days(holiday_days),
            overtime_hours: self.config.clamp_overtime_hours(overtime_hours),
        };

        self.groups.push(group);
        // Just pushed, so the list is non-empty.
        Ok(&self.groups[self.groups.len() - 1])
    }

    /// Replaces the markup rates, clamping both into the configured bounds.
    ///
    /// The new rates apply to the next computation pass; nothing is
    /// recomputed eagerly.
    pub fn set_rates(&mut self, overhead_pct: Decimal, margin_pct: Decimal) -> BillingRates {
        self.rates = BillingRates {
            overhead_pct: self.config.clamp_rate(overhead_pct),
            margin_pct: self.config.clamp_rate(margin_pct),
        };
        self.rates
    }

    /// Unconditionally clears the staff-group list.
    ///
    /// Returns the number of groups removed. Rates are left unchanged.
    pub fn reset(&mut self) -> usize {
        let removed = self.groups.len();
        self.groups.clear();
        removed
    }

    /// Computes the full quotation report for the current state.
    pub fn compute(&self) -> QuoteReport {
        build_quote(&self.groups, &self.rates)
    }

    /// Returns the staff groups in insertion order.
    pub fn groups(&self) -> &[StaffGroup] {
        &self.groups
    }

    /// Returns the current markup rates.
    pub fn rates(&self) -> BillingRates {
        self.rates
    }

    /// Returns the billing configuration this session was created with.
    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    /// Returns the number of staff groups in the session.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the session has no staff groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for QuoteSession {
    /// A session with the built-in billing defaults.
    fn default() -> Self {
        Self::new(BillingConfig::default())
    }
}
