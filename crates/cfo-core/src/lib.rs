#![deny(warnings)]

//! Core input records and invariants for the cash cockpit.
//!
//! This crate defines the serializable profit-and-loss / balance-sheet
//! baseline and the scenario deltas applied on top of it, together with the
//! validation helpers the input layer runs before handing data to the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod presets;

pub use presets::Industry;

/// Monthly PL figures and current BS balances of a business.
///
/// All amounts are in a single currency unit and expected to be >= 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialBaseline {
    /// Monthly revenue.
    pub revenue: Decimal,
    /// Monthly cost of goods sold.
    pub cogs: Decimal,
    /// Monthly fixed cost.
    pub fixed_cost: Decimal,
    /// Current cash and deposits.
    pub cash: Decimal,
    /// Current accounts receivable balance.
    pub receivables: Decimal,
    /// Current accounts payable balance.
    pub payables: Decimal,
}

/// What-if adjustments applied to a [`FinancialBaseline`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioDelta {
    /// Signed change of the monthly fixed cost (investment > 0, cost cut < 0).
    pub fixed_cost_change: Decimal,
    /// Signed percentage applied multiplicatively to the variable-cost rate.
    pub variable_cost_rate_change_pct: Decimal,
    /// Signed percentage applied multiplicatively to monthly revenue.
    pub revenue_change_pct: Decimal,
    /// Months over which revenue moves linearly to its target (>= 1).
    pub ramp_months: u32,
}

impl Default for ScenarioDelta {
    fn default() -> Self {
        Self {
            fixed_cost_change: Decimal::ZERO,
            variable_cost_rate_change_pct: Decimal::ZERO,
            revenue_change_pct: Decimal::ZERO,
            ramp_months: 1,
        }
    }
}

impl ScenarioDelta {
    /// True when the scenario leaves the baseline untouched.
    pub fn is_neutral(&self) -> bool {
        self.fixed_cost_change.is_zero()
            && self.variable_cost_rate_change_pct.is_zero()
            && self.revenue_change_pct.is_zero()
    }
}

/// A complete engine input, as loaded from a YAML/JSON document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub baseline: FinancialBaseline,
    #[serde(default)]
    pub scenario: ScenarioDelta,
}

/// Validation errors raised by the input layer.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A baseline amount was negative.
    #[error("{0} must not be negative")]
    NegativeMoney(&'static str),
    /// Ramp-up period must be at least one month.
    #[error("ramp-up period must be >= 1 month, got {0}")]
    InvalidRamp(u32),
    /// Sample dataset name not recognised.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    /// An amount exceeded [`MAX_AMOUNT`] in magnitude.
    #[error("{0} must not exceed 1e15 in magnitude")]
    AmountTooLarge(&'static str),
    /// A percentage fell outside [`MAX_CHANGE_PCT`] in magnitude.
    #[error("{0} must be within +/-1000%")]
    PercentOutOfRange(&'static str),
    /// More than [`MAX_DECIMAL_PLACES`] fractional digits.
    #[error("{0} must have at most 2 decimal places")]
    TooPrecise(&'static str),
}

/// Largest accepted magnitude for any amount (1e15).
///
/// Together with the percentage and precision limits this keeps every
/// intermediate engine value well inside the `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Largest accepted magnitude for a scenario percentage.
pub const MAX_CHANGE_PCT: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Fractional digits accepted on amounts and percentages.
pub const MAX_DECIMAL_PLACES: u32 = 2;

fn check_bounded(
    name: &'static str,
    value: Decimal,
    limit: Decimal,
    out_of_range: fn(&'static str) -> ValidationError,
) -> Result<(), ValidationError> {
    if value.normalize().scale() > MAX_DECIMAL_PLACES {
        return Err(ValidationError::TooPrecise(name));
    }
    if value.abs() > limit {
        return Err(out_of_range(name));
    }
    Ok(())
}

/// Validate that every baseline amount is non-negative, at most
/// [`MAX_AMOUNT`] and given to at most two decimal places.
pub fn validate_baseline(b: &FinancialBaseline) -> Result<(), ValidationError> {
    let fields = [
        ("revenue", b.revenue),
        ("cogs", b.cogs),
        ("fixed_cost", b.fixed_cost),
        ("cash", b.cash),
        ("receivables", b.receivables),
        ("payables", b.payables),
    ];
    for (name, value) in fields {
        if value < Decimal::ZERO {
            return Err(ValidationError::NegativeMoney(name));
        }
        check_bounded(name, value, MAX_AMOUNT, ValidationError::AmountTooLarge)?;
    }
    Ok(())
}

/// Validate scenario deltas. Percentages and the fixed-cost change are signed
/// and may push rates past 0% or 100%; they are only bounded in magnitude.
pub fn validate_scenario(s: &ScenarioDelta) -> Result<(), ValidationError> {
    if s.ramp_months == 0 {
        return Err(ValidationError::InvalidRamp(s.ramp_months));
    }
    check_bounded(
        "fixed_cost_change",
        s.fixed_cost_change,
        MAX_AMOUNT,
        ValidationError::AmountTooLarge,
    )?;
    check_bounded(
        "variable_cost_rate_change_pct",
        s.variable_cost_rate_change_pct,
        MAX_CHANGE_PCT,
        ValidationError::PercentOutOfRange,
    )?;
    check_bounded(
        "revenue_change_pct",
        s.revenue_change_pct,
        MAX_CHANGE_PCT,
        ValidationError::PercentOutOfRange,
    )
}

/// Validate a full input document.
pub fn validate_input(input: &ProjectionInput) -> Result<(), ValidationError> {
    validate_baseline(&input.baseline)?;
    validate_scenario(&input.scenario)
}
