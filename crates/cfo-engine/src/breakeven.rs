//! Break-even revenue, safety margin and investment payback.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::normalize::ratio_or_zero;
use crate::scenario::AdjustedModel;

/// Lower bound for the contribution margin rate. Keeps the break-even division
/// finite when the variable-cost rate reaches or exceeds 100%; it is not a
/// realistic business floor.
pub const CONTRIBUTION_MARGIN_FLOOR: Decimal = Decimal::from_parts(1, 0, 0, false, 3);

/// Scenario operating model with its break-even figures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedModel {
    pub target_revenue: Decimal,
    pub variable_cost_rate: Decimal,
    pub fixed_cost: Decimal,
    /// `max(1 - variable_cost_rate, 0.001)`.
    pub contribution_margin_rate: Decimal,
    /// Revenue at which operating profit is zero.
    pub break_even_revenue: Decimal,
    /// `target_revenue - break_even_revenue`; negative below break-even.
    pub break_even_gap: Decimal,
    /// Gap as a percentage of target revenue (0 when there is no revenue).
    pub safety_margin_pct: Decimal,
    /// Target revenue as a percentage of break-even revenue; above 100 means
    /// profitable. `None` when break-even revenue is zero.
    pub break_even_ratio_pct: Option<Decimal>,
    /// Monthly operating profit at target revenue.
    pub operating_profit: Decimal,
    /// Extra revenue needed to cover a fixed-cost increase (0 otherwise).
    pub payback_revenue: Decimal,
}

impl SimulatedModel {
    /// True when the contribution margin was lifted to its floor.
    pub fn is_margin_floored(&self) -> bool {
        Decimal::ONE - self.variable_cost_rate <= CONTRIBUTION_MARGIN_FLOOR
    }
}

/// Derive the break-even figures for an adjusted model.
///
/// `fixed_cost_change` is the scenario's fixed-cost delta; only a positive
/// delta (an investment) produces a payback revenue.
pub fn break_even(model: &AdjustedModel, fixed_cost_change: Decimal) -> SimulatedModel {
    let contribution_margin_rate =
        (Decimal::ONE - model.variable_cost_rate).max(CONTRIBUTION_MARGIN_FLOOR);
    let break_even_revenue = model.fixed_cost / contribution_margin_rate;
    let break_even_gap = model.target_revenue - break_even_revenue;
    let safety_margin_pct =
        ratio_or_zero(break_even_gap, model.target_revenue) * Decimal::ONE_HUNDRED;
    let break_even_ratio_pct = if break_even_revenue.is_zero() {
        None
    } else {
        Some(model.target_revenue / break_even_revenue * Decimal::ONE_HUNDRED)
    };
    let operating_profit = model.target_revenue
        - model.target_revenue * model.variable_cost_rate
        - model.fixed_cost;
    let payback_revenue =
        if fixed_cost_change > Decimal::ZERO && contribution_margin_rate > Decimal::ZERO {
            fixed_cost_change / contribution_margin_rate
        } else {
            Decimal::ZERO
        };

    SimulatedModel {
        target_revenue: model.target_revenue,
        variable_cost_rate: model.variable_cost_rate,
        fixed_cost: model.fixed_cost,
        contribution_margin_rate,
        break_even_revenue,
        break_even_gap,
        safety_margin_pct,
        break_even_ratio_pct,
        operating_profit,
        payback_revenue,
    }
}
