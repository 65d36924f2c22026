//! Sample baselines for a few typical industries.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{FinancialBaseline, ValidationError};

/// Industries with a bundled sample baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    /// Long receivable cycle (about two months), thin margin.
    Construction,
    /// 40% variable-cost rate, 1.5 months of receivables.
    #[default]
    ItService,
    /// Near-cash business, 35% variable-cost rate.
    Restaurant,
}

impl Industry {
    pub const ALL: [Industry; 3] = [
        Industry::Construction,
        Industry::ItService,
        Industry::Restaurant,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Industry::Construction => "construction",
            Industry::ItService => "it-service",
            Industry::Restaurant => "restaurant",
        }
    }

    /// Monthly PL and current BS figures for this industry.
    pub fn baseline(self) -> FinancialBaseline {
        let d = |v: i64| Decimal::new(v, 0);
        match self {
            Industry::Construction => FinancialBaseline {
                revenue: d(8_000_000),
                cogs: d(5_600_000),
                fixed_cost: d(1_800_000),
                cash: d(5_000_000),
                receivables: d(16_000_000),
                payables: d(5_600_000),
            },
            Industry::ItService => FinancialBaseline {
                revenue: d(5_000_000),
                cogs: d(2_000_000),
                fixed_cost: d(2_500_000),
                cash: d(3_000_000),
                receivables: d(7_500_000),
                payables: d(2_000_000),
            },
            Industry::Restaurant => FinancialBaseline {
                revenue: d(3_500_000),
                cogs: d(1_225_000),
                fixed_cost: d(1_900_000),
                cash: d(1_500_000),
                receivables: d(350_000),
                payables: d(612_500),
            },
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Industry {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Industry::ALL
            .into_iter()
            .find(|i| i.name() == key)
            .ok_or_else(|| ValidationError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_baseline;

    #[test]
    fn presets_are_valid() {
        for industry in Industry::ALL {
            validate_baseline(&industry.baseline()).unwrap();
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("construction".parse(), Ok(Industry::Construction));
        assert_eq!("IT_Service".parse(), Ok(Industry::ItService));
        assert_eq!(" restaurant ".parse(), Ok(Industry::Restaurant));
        assert_eq!(
            "bakery".parse::<Industry>(),
            Err(ValidationError::UnknownPreset("bakery".to_string()))
        );
    }

    #[test]
    fn display_matches_parse() {
        for industry in Industry::ALL {
            assert_eq!(industry.to_string().parse(), Ok(industry));
        }
    }

    #[test]
    fn restaurant_is_near_cash() {
        let b = Industry::Restaurant.baseline();
        // receivables are a tenth of one month's revenue
        assert_eq!(b.receivables * Decimal::new(10, 0), b.revenue);
    }
}
