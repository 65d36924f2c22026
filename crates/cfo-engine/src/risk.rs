//! Risk indicators scanned from a cash trajectory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cashflow::CashTrajectory;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Lowest balance over the whole trajectory, month 0 included.
    pub minimum_cash: Decimal,
    /// First month whose balance is negative.
    pub shortfall_month: Option<usize>,
    /// Balance at the end of the horizon.
    pub ending_cash: Decimal,
}

/// Scan balances for the minimum and the first shortfall. Month 0 is treated
/// like any other month.
pub fn summarize(trajectory: &CashTrajectory) -> RiskSummary {
    let balances = &trajectory.balances;
    RiskSummary {
        minimum_cash: balances.iter().copied().min().unwrap_or_default(),
        shortfall_month: balances.iter().position(|b| *b < Decimal::ZERO),
        ending_cash: trajectory.closing(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory(values: &[i64]) -> CashTrajectory {
        CashTrajectory {
            balances: values.iter().map(|v| Decimal::new(*v, 0)).collect(),
            months: vec![],
        }
    }

    #[test]
    fn healthy_trajectory() {
        let r = summarize(&trajectory(&[100, 120, 140, 160, 180, 200, 220]));
        assert_eq!(r.minimum_cash, Decimal::new(100, 0));
        assert_eq!(r.shortfall_month, None);
        assert_eq!(r.ending_cash, Decimal::new(220, 0));
    }

    #[test]
    fn first_negative_month_is_reported() {
        let r = summarize(&trajectory(&[100, 40, -20, -80, 10, -5, -30]));
        assert_eq!(r.shortfall_month, Some(2));
        assert_eq!(r.minimum_cash, Decimal::new(-80, 0));
    }

    #[test]
    fn zero_balance_is_not_a_shortfall() {
        let r = summarize(&trajectory(&[100, 50, 0, 0, 0, 0, 0]));
        assert_eq!(r.shortfall_month, None);
        assert_eq!(r.minimum_cash, Decimal::ZERO);
    }

    #[test]
    fn negative_opening_balance_is_month_zero() {
        let r = summarize(&trajectory(&[-10, 5, 5, 5, 5, 5, 5]));
        assert_eq!(r.shortfall_month, Some(0));
        assert_eq!(r.minimum_cash, Decimal::new(-10, 0));
    }
}
