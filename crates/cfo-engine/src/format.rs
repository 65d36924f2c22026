//! Text rendering of computed figures.
//!
//! Output of these helpers is embedded verbatim in reports and in the
//! advisory prompt, so rounding is fixed to half-away-from-zero and the same
//! value always renders to the same string.

use rust_decimal::{Decimal, RoundingStrategy};

fn round(value: Decimal, dp: u32) -> Decimal {
    let r = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    // avoid printing "-0"
    if r.is_zero() {
        Decimal::ZERO
    } else {
        r
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole currency units with thousands separators, e.g. `-4,166,667`.
pub fn amount(value: Decimal) -> String {
    let r = round(value, 0);
    let grouped = group_thousands(&r.abs().trunc().to_string());
    if r < Decimal::ZERO {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Like [`amount`] but always signed, e.g. `+833,333`.
pub fn signed_amount(value: Decimal) -> String {
    let r = round(value, 0);
    if r < Decimal::ZERO {
        amount(r)
    } else {
        format!("+{}", amount(r))
    }
}

/// Percentage value with `dp` decimals, e.g. `16.7`.
pub fn percent(value: Decimal, dp: u32) -> String {
    format!("{:.*}", dp as usize, round(value, dp))
}

/// Always-signed percentage, e.g. `+5.0` or `-30`.
pub fn signed_percent(value: Decimal, dp: u32) -> String {
    let r = round(value, dp);
    if r < Decimal::ZERO {
        percent(r, dp)
    } else {
        format!("+{}", percent(r, dp))
    }
}

/// Label for a trajectory index.
pub fn month_label(month: usize) -> String {
    if month == 0 {
        "now".to_string()
    } else {
        format!("month {month}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn amounts_are_grouped_and_rounded() {
        assert_eq!(amount(d("0")), "0");
        assert_eq!(amount(d("999")), "999");
        assert_eq!(amount(d("1000")), "1,000");
        assert_eq!(amount(d("3500000")), "3,500,000");
        assert_eq!(amount(d("4166666.666666666666666666667")), "4,166,667");
        assert_eq!(amount(d("-400000.00")), "-400,000");
        assert_eq!(amount(d("0.5")), "1");
        assert_eq!(amount(d("-0.4")), "0");
    }

    #[test]
    fn signed_amounts() {
        assert_eq!(signed_amount(d("833333.33")), "+833,333");
        assert_eq!(signed_amount(d("-1250000")), "-1,250,000");
        assert_eq!(signed_amount(Decimal::ZERO), "+0");
    }

    #[test]
    fn percents() {
        assert_eq!(percent(d("16.666666"), 1), "16.7");
        assert_eq!(percent(d("120"), 1), "120.0");
        assert_eq!(percent(d("-0.01"), 1), "0.0");
        assert_eq!(signed_percent(d("-30"), 0), "-30");
        assert_eq!(signed_percent(d("5"), 1), "+5.0");
        assert_eq!(signed_percent(Decimal::ZERO, 0), "+0");
    }

    #[test]
    fn labels() {
        assert_eq!(month_label(0), "now");
        assert_eq!(month_label(3), "month 3");
    }
}
