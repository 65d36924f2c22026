//! Month-by-month cash balance with a working-capital adjustment.
//!
//! Accrual operating profit is not cash: revenue booked this month that sits
//! in receivables has not been collected yet, and COGS sitting in payables
//! has not been paid yet. Each projected month re-derives both balances from
//! the turnover ratios and moves cash by the change against the previous
//! month:
//!
//! `cash_flow = operating_profit - Δreceivables + Δpayables`

use cfo_core::FinancialBaseline;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::breakeven::SimulatedModel;
use crate::normalize::DerivedRatios;

/// Number of projected months after the current one.
pub const HORIZON_MONTHS: u32 = 6;

/// One projected month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCashFlow {
    /// 1-based month index.
    pub month: u32,
    pub revenue: Decimal,
    pub cogs: Decimal,
    pub operating_profit: Decimal,
    /// Receivables balance at month end.
    pub receivables: Decimal,
    /// Payables balance at month end.
    pub payables: Decimal,
    /// Net cash movement of the month.
    pub cash_flow: Decimal,
    /// Cash balance at month end.
    pub closing_cash: Decimal,
}

/// Cash balances for month 0 (today) through month 6.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashTrajectory {
    /// `HORIZON_MONTHS + 1` balances, index = month.
    pub balances: Vec<Decimal>,
    /// Breakdown of months 1..=HORIZON_MONTHS.
    pub months: Vec<MonthlyCashFlow>,
}

impl CashTrajectory {
    /// Current cash balance (month 0).
    pub fn opening(&self) -> Decimal {
        self.balances.first().copied().unwrap_or_default()
    }

    /// Balance at the end of the horizon.
    pub fn closing(&self) -> Decimal {
        self.balances.last().copied().unwrap_or_default()
    }
}

/// Revenue booked in `month` while moving linearly from `base` to `target`
/// over `ramp_months`. A ramp of 0 or 1 reaches the target in month 1.
pub fn ramped_revenue(base: Decimal, target: Decimal, month: u32, ramp_months: u32) -> Decimal {
    if ramp_months <= 1 {
        return target;
    }
    let progress = (Decimal::from(month) / Decimal::from(ramp_months)).min(Decimal::ONE);
    base + (target - base) * progress
}

/// Run the working-capital-adjusted cash projection.
pub fn simulate_cash(
    baseline: &FinancialBaseline,
    ratios: &DerivedRatios,
    model: &SimulatedModel,
    ramp_months: u32,
) -> CashTrajectory {
    let mut balances = Vec::with_capacity(HORIZON_MONTHS as usize + 1);
    let mut months = Vec::with_capacity(HORIZON_MONTHS as usize);
    let mut cash = baseline.cash;
    let mut prev_receivables = baseline.receivables;
    let mut prev_payables = baseline.payables;
    balances.push(cash);

    for month in 1..=HORIZON_MONTHS {
        let revenue = ramped_revenue(baseline.revenue, model.target_revenue, month, ramp_months);
        let cogs = revenue * model.variable_cost_rate;
        let operating_profit = revenue - cogs - model.fixed_cost;

        let receivables = revenue * ratios.receivable_months;
        let payables = cogs * ratios.payable_months;
        let delta_receivables = receivables - prev_receivables;
        let delta_payables = payables - prev_payables;

        let cash_flow = operating_profit - delta_receivables + delta_payables;
        cash += cash_flow;
        debug!(
            month,
            %revenue,
            %operating_profit,
            %delta_receivables,
            %delta_payables,
            %cash,
            "projected month"
        );

        balances.push(cash);
        months.push(MonthlyCashFlow {
            month,
            revenue,
            cogs,
            operating_profit,
            receivables,
            payables,
            cash_flow,
            closing_cash: cash,
        });
        prev_receivables = receivables;
        prev_payables = payables;
    }

    CashTrajectory { balances, months }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakeven::break_even;
    use crate::normalize::derive_ratios;
    use crate::scenario::apply_scenario;
    use cfo_core::{Industry, ScenarioDelta};

    fn run(baseline: &FinancialBaseline, delta: &ScenarioDelta) -> CashTrajectory {
        let ratios = derive_ratios(baseline);
        let adjusted = apply_scenario(baseline, &ratios, delta);
        let model = break_even(&adjusted, delta.fixed_cost_change);
        simulate_cash(baseline, &ratios, &model, delta.ramp_months)
    }

    #[test]
    fn steady_state_accumulates_profit() {
        let b = Industry::ItService.baseline();
        let t = run(&b, &ScenarioDelta::default());
        assert_eq!(t.balances.len(), 7);
        assert_eq!(t.opening(), b.cash);
        for (i, bal) in t.balances.iter().enumerate() {
            let expected = b.cash + Decimal::new(500_000, 0) * Decimal::from(i as u32);
            assert_eq!(*bal, expected, "month {i}");
        }
        assert!(t.months.iter().all(|m| m.cash_flow == m.operating_profit));
    }

    #[test]
    fn revenue_drop_releases_receivables_in_first_month() {
        let b = Industry::ItService.baseline();
        let t = run(
            &b,
            &ScenarioDelta {
                revenue_change_pct: Decimal::new(-30, 0),
                ..ScenarioDelta::default()
            },
        );
        let m1 = &t.months[0];
        assert_eq!(m1.revenue, Decimal::new(3_500_000, 0));
        assert_eq!(m1.operating_profit, Decimal::new(-400_000, 0));
        assert_eq!(m1.receivables, Decimal::new(5_250_000, 0));
        assert_eq!(m1.payables, Decimal::new(1_400_000, 0));
        // -400k profit + 2.25M collected receivables - 600k paid down payables
        assert_eq!(m1.cash_flow, Decimal::new(1_250_000, 0));
        assert_eq!(t.balances[1], Decimal::new(4_250_000, 0));
        assert_ne!(t.balances[1] - t.balances[0], m1.operating_profit);

        // balances settle after month 1
        let m2 = &t.months[1];
        assert_eq!(m2.cash_flow, m2.operating_profit);
        assert_eq!(t.closing(), Decimal::new(4_250_000 - 5 * 400_000, 0));
    }

    #[test]
    fn revenue_growth_ties_cash_up_in_receivables() {
        let b = Industry::ItService.baseline();
        let t = run(
            &b,
            &ScenarioDelta {
                revenue_change_pct: Decimal::new(20, 0),
                ..ScenarioDelta::default()
            },
        );
        let m1 = &t.months[0];
        assert!(m1.operating_profit > Decimal::ZERO);
        assert!(m1.cash_flow < m1.operating_profit);
    }

    #[test]
    fn ramp_interpolates_linearly() {
        let base = Decimal::new(1_000, 0);
        let target = Decimal::new(2_000, 0);
        assert_eq!(ramped_revenue(base, target, 1, 4), Decimal::new(1_250, 0));
        assert_eq!(ramped_revenue(base, target, 2, 4), Decimal::new(1_500, 0));
        assert_eq!(ramped_revenue(base, target, 4, 4), target);
        assert_eq!(ramped_revenue(base, target, 6, 4), target);
        assert_eq!(ramped_revenue(base, target, 1, 1), target);
        assert_eq!(ramped_revenue(base, target, 1, 0), target);
    }

    #[test]
    fn ramped_scenario_reaches_target() {
        let b = Industry::ItService.baseline();
        let t = run(
            &b,
            &ScenarioDelta {
                revenue_change_pct: Decimal::new(20, 0),
                ramp_months: 4,
                ..ScenarioDelta::default()
            },
        );
        assert_eq!(t.months[0].revenue, Decimal::new(5_250_000, 0));
        for m in &t.months[3..] {
            assert_eq!(m.revenue, Decimal::new(6_000_000, 0));
        }
    }

    #[test]
    fn zero_revenue_degenerates_to_profit_accumulation() {
        let mut b = Industry::Construction.baseline();
        b.revenue = Decimal::ZERO;
        let t = run(&b, &ScenarioDelta::default());
        // receivable months are 0, so the whole receivables balance is
        // collected in month 1; from then on cash only tracks profit
        let m1 = &t.months[0];
        assert_eq!(m1.receivables, Decimal::ZERO);
        for m in &t.months[1..] {
            assert_eq!(m.cash_flow, m.operating_profit);
            assert_eq!(m.operating_profit, -b.fixed_cost);
        }
    }
}
