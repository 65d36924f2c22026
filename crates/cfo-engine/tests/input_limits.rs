use cfo_core::{
    validate_input, FinancialBaseline, ProjectionInput, ScenarioDelta, ValidationError,
    MAX_AMOUNT, MAX_CHANGE_PCT,
};
use cfo_engine::{format, project};
use rust_decimal::Decimal;

fn cent() -> Decimal {
    Decimal::new(1, 2)
}

fn flat(value: Decimal) -> FinancialBaseline {
    FinancialBaseline {
        revenue: value,
        cogs: value,
        fixed_cost: value,
        cash: value,
        receivables: value,
        payables: value,
    }
}

fn run(input: &ProjectionInput) {
    validate_input(input).unwrap();
    let p = project(&input.baseline, &input.scenario);
    assert_eq!(p.trajectory().len(), 7);
    // rendering must survive the same extremes
    assert!(!format::amount(p.break_even_revenue()).is_empty());
    assert!(!format::percent(p.safety_margin_pct(), 1).is_empty());
}

#[test]
fn oversized_amounts_rejected_before_projection() {
    let input = ProjectionInput {
        baseline: FinancialBaseline {
            revenue: Decimal::from_i128_with_scale(10i128.pow(26), 0),
            ..flat(Decimal::ZERO)
        },
        scenario: ScenarioDelta::default(),
    };
    assert_eq!(
        validate_input(&input),
        Err(ValidationError::AmountTooLarge("revenue"))
    );

    let input = ProjectionInput {
        baseline: flat(MAX_AMOUNT + cent()),
        scenario: ScenarioDelta::default(),
    };
    assert_eq!(
        validate_input(&input),
        Err(ValidationError::AmountTooLarge("revenue"))
    );
}

#[test]
fn largest_amounts_project_without_overflow() {
    for pct in [MAX_CHANGE_PCT, -MAX_CHANGE_PCT, Decimal::ZERO] {
        run(&ProjectionInput {
            baseline: flat(MAX_AMOUNT),
            scenario: ScenarioDelta {
                fixed_cost_change: MAX_AMOUNT,
                variable_cost_rate_change_pct: pct,
                revenue_change_pct: pct,
                ramp_months: 3,
            },
        });
    }
}

#[test]
fn tiny_revenue_against_large_costs_projects() {
    // a variable-cost rate of 1e17 with the margin at its floor
    let baseline = FinancialBaseline {
        revenue: cent(),
        ..flat(MAX_AMOUNT)
    };
    for rate_pct in [MAX_CHANGE_PCT, -MAX_CHANGE_PCT] {
        for revenue_pct in [MAX_CHANGE_PCT, Decimal::new(-9_999, 2), -MAX_CHANGE_PCT] {
            run(&ProjectionInput {
                baseline: baseline.clone(),
                scenario: ScenarioDelta {
                    fixed_cost_change: -MAX_AMOUNT + cent(),
                    variable_cost_rate_change_pct: rate_pct,
                    revenue_change_pct: revenue_pct,
                    ramp_months: 1,
                },
            });
        }
    }
}
