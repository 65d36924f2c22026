//! Base ratios derived from the raw PL/BS figures.

use cfo_core::FinancialBaseline;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flow ratios of the current business. Never stored, always recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedRatios {
    /// COGS as a fraction of revenue.
    pub variable_cost_rate: Decimal,
    /// Months of revenue sitting in receivables.
    pub receivable_months: Decimal,
    /// Months of COGS sitting in payables.
    pub payable_months: Decimal,
}

/// `num / den`, or zero when the denominator is zero.
pub(crate) fn ratio_or_zero(num: Decimal, den: Decimal) -> Decimal {
    if den.is_zero() {
        Decimal::ZERO
    } else {
        num / den
    }
}

/// Derive the base ratios. A business without revenue (or without COGS) is a
/// valid state: the affected ratios degrade to zero instead of failing.
pub fn derive_ratios(b: &FinancialBaseline) -> DerivedRatios {
    DerivedRatios {
        variable_cost_rate: ratio_or_zero(b.cogs, b.revenue),
        receivable_months: ratio_or_zero(b.receivables, b.revenue),
        payable_months: ratio_or_zero(b.payables, b.cogs),
    }
}
