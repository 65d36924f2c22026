#![deny(warnings)]

//! Financial projection engine for the cash cockpit.
//!
//! Turns a [`FinancialBaseline`] and a [`ScenarioDelta`] into:
//! - break-even revenue, safety margin and investment payback revenue
//! - a 6-month cash trajectory adjusted for receivable/payable timing
//! - risk indicators (minimum cash, first shortfall month)
//!
//! Every step is a pure function; identical inputs always produce identical
//! output.
//!
//! Example:
//! let baseline = cfo_core::Industry::ItService.baseline();
//! let p = cfo_engine::project(&baseline, &cfo_core::ScenarioDelta::default());
//! assert_eq!(p.trajectory().len(), 7);

use cfo_core::{FinancialBaseline, ScenarioDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub mod breakeven;
pub mod cashflow;
pub mod format;
pub mod normalize;
pub mod risk;
pub mod scenario;

pub use breakeven::{break_even, SimulatedModel, CONTRIBUTION_MARGIN_FLOOR};
pub use cashflow::{
    ramped_revenue, simulate_cash, CashTrajectory, MonthlyCashFlow, HORIZON_MONTHS,
};
pub use normalize::{derive_ratios, DerivedRatios};
pub use risk::{summarize, RiskSummary};
pub use scenario::{apply_scenario, AdjustedModel};

/// Full result of one projection run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub ratios: DerivedRatios,
    pub model: SimulatedModel,
    pub cash: CashTrajectory,
    pub risk: RiskSummary,
}

impl Projection {
    pub fn target_revenue(&self) -> Decimal {
        self.model.target_revenue
    }

    pub fn break_even_revenue(&self) -> Decimal {
        self.model.break_even_revenue
    }

    pub fn break_even_gap(&self) -> Decimal {
        self.model.break_even_gap
    }

    pub fn safety_margin_pct(&self) -> Decimal {
        self.model.safety_margin_pct
    }

    pub fn operating_profit(&self) -> Decimal {
        self.model.operating_profit
    }

    pub fn payback_revenue(&self) -> Decimal {
        self.model.payback_revenue
    }

    /// Balances for month 0 through month 6.
    pub fn trajectory(&self) -> &[Decimal] {
        &self.cash.balances
    }

    pub fn minimum_cash(&self) -> Decimal {
        self.risk.minimum_cash
    }

    pub fn shortfall_month(&self) -> Option<usize> {
        self.risk.shortfall_month
    }
}

/// Run the whole pipeline: ratios, scenario, break-even, cash, risk.
pub fn project(baseline: &FinancialBaseline, scenario: &ScenarioDelta) -> Projection {
    let ratios = derive_ratios(baseline);
    let adjusted = apply_scenario(baseline, &ratios, scenario);
    let model = break_even(&adjusted, scenario.fixed_cost_change);
    let cash = simulate_cash(baseline, &ratios, &model, scenario.ramp_months);
    let risk = summarize(&cash);

    info!(
        target_revenue = %model.target_revenue,
        break_even_revenue = %model.break_even_revenue,
        operating_profit = %model.operating_profit,
        ending_cash = %risk.ending_cash,
        "projection complete"
    );
    if model.is_margin_floored() {
        warn!(variable_cost_rate = %model.variable_cost_rate, "contribution margin floored");
    }
    if let Some(month) = risk.shortfall_month {
        warn!(month, minimum_cash = %risk.minimum_cash, "cash shortfall projected");
    }

    Projection {
        ratios,
        model,
        cash,
        risk,
    }
}
