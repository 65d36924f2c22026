//! Applies scenario deltas to the base ratios.

use cfo_core::{FinancialBaseline, ScenarioDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::normalize::DerivedRatios;

/// Monthly operating model after the scenario has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedModel {
    /// Revenue the business is steering towards.
    pub target_revenue: Decimal,
    /// Scenario variable-cost rate. Not clamped to [0, 1].
    pub variable_cost_rate: Decimal,
    /// Scenario fixed cost. May go negative.
    pub fixed_cost: Decimal,
}

/// `1 + pct / 100`.
pub(crate) fn pct_factor(pct: Decimal) -> Decimal {
    Decimal::ONE + pct / Decimal::ONE_HUNDRED
}

/// Apply `delta` to the baseline. Extreme deltas are passed through unclamped:
/// a cost-rate cut beyond -100% yields a negative rate and a fixed-cost cut
/// larger than the fixed cost yields a negative fixed cost.
pub fn apply_scenario(
    baseline: &FinancialBaseline,
    ratios: &DerivedRatios,
    delta: &ScenarioDelta,
) -> AdjustedModel {
    AdjustedModel {
        target_revenue: baseline.revenue * pct_factor(delta.revenue_change_pct),
        variable_cost_rate: ratios.variable_cost_rate
            * pct_factor(delta.variable_cost_rate_change_pct),
        fixed_cost: baseline.fixed_cost + delta.fixed_cost_change,
    }
}
