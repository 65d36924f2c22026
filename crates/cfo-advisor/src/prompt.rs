//! Prompt construction from computed figures.

use cfo_core::ScenarioDelta;
use cfo_engine::{format, Projection, HORIZON_MONTHS};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Figures quoted in the prompt, already rendered as text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryFigures {
    pub target_revenue: String,
    pub revenue_change_pct: String,
    pub operating_profit: String,
    pub break_even_gap: String,
    pub safety_margin_pct: String,
    pub ending_cash: String,
    pub shortfall_month: Option<String>,
    pub break_even_ratio_pct: Option<String>,
    pub fixed_cost_change: String,
    pub cost_rate_change_pct: String,
    pub payback_revenue: Option<String>,
}

/// Input for one advisory request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    pub figures: AdvisoryFigures,
}

// whole percentages print without decimals, fractional ones with one
fn pct_decimals(v: Decimal) -> u32 {
    if v.fract().is_zero() {
        0
    } else {
        1
    }
}

impl AdvisoryRequest {
    pub fn new(projection: &Projection, scenario: &ScenarioDelta) -> Self {
        let model = &projection.model;
        let payback = projection.payback_revenue();
        let figures = AdvisoryFigures {
            target_revenue: format::amount(model.target_revenue),
            revenue_change_pct: format::signed_percent(
                scenario.revenue_change_pct,
                pct_decimals(scenario.revenue_change_pct),
            ),
            operating_profit: format::amount(model.operating_profit),
            break_even_gap: format::signed_amount(model.break_even_gap),
            safety_margin_pct: format::percent(model.safety_margin_pct, 1),
            ending_cash: format::amount(projection.risk.ending_cash),
            shortfall_month: projection.shortfall_month().map(format::month_label),
            break_even_ratio_pct: model.break_even_ratio_pct.map(|r| format::percent(r, 1)),
            fixed_cost_change: format::signed_amount(scenario.fixed_cost_change),
            cost_rate_change_pct: format::signed_percent(scenario.variable_cost_rate_change_pct, 1),
            payback_revenue: (payback > Decimal::ZERO).then(|| format::amount(payback)),
        };
        Self { figures }
    }

    /// Full prompt text sent to the advisory service.
    pub fn prompt(&self) -> String {
        let f = &self.figures;
        let mut lines = vec![
            "You are an experienced CFO advising the owner of a small business.".to_string(),
            "Review the simulation results below and give management advice.".to_string(),
            "Answer in Markdown and cover only these three points:".to_string(),
            String::new(),
            "1. **Financial health**: judge the profit structure and the distance to the break-even line.".to_string(),
            "2. **Cash risk**: how likely a cash shortfall is and how to prevent it.".to_string(),
            "3. **Actions**: three things the owner should start doing tomorrow, in plain words without jargon.".to_string(),
            String::new(),
            "The figures were computed by a projection model. Quote them exactly as written and do not recalculate or re-derive them.".to_string(),
            String::new(),
            "[Data, monthly amounts]".to_string(),
            format!(
                "- Monthly revenue: {} ({}% versus today)",
                f.target_revenue, f.revenue_change_pct
            ),
            format!(
                "- Operating profit: {} (distance to break-even revenue: {})",
                f.operating_profit, f.break_even_gap
            ),
            format!("- Safety margin: {}%", f.safety_margin_pct),
            format!(
                "- Cash balance after {} months: {}",
                HORIZON_MONTHS, f.ending_cash
            ),
            format!(
                "- First month with negative cash: {}",
                f.shortfall_month.as_deref().unwrap_or("none")
            ),
        ];
        match &f.break_even_ratio_pct {
            Some(r) => lines.push(format!(
                "- Revenue to break-even ratio: {r}% (above 100% means profitable)"
            )),
            None => lines.push("- Revenue to break-even ratio: n/a (no fixed cost)".to_string()),
        }
        lines.push(format!(
            "- Fixed cost change (investment): {} per month",
            f.fixed_cost_change
        ));
        lines.push(format!("- Variable cost rate change: {}%", f.cost_rate_change_pct));
        if let Some(p) = &f.payback_revenue {
            lines.push(format!(
                "- Additional revenue needed to cover the investment: {p} per month"
            ));
        }
        lines.join("\n")
    }
}
