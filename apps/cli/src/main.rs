#![deny(warnings)]

//! Headless CLI: load a baseline and scenario, print the 6-month projection,
//! optionally ask the advisory service for commentary.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use cfo_advisor::{diagnose, AdvisorError, AdvisoryRequest, GeminiAdvisor, GeminiConfig};
use cfo_core::{validate_input, Industry, ProjectionInput, ScenarioDelta};
use cfo_engine::{format, project, Projection, HORIZON_MONTHS};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: cfo [--preset construction|it-service|restaurant] [--input FILE.yaml]
           [--revenue N] [--cogs N] [--fixed-cost N] [--cash N] [--receivables N] [--payables N]
           [--fixed-cost-change N] [--cost-rate-change PCT] [--revenue-change PCT] [--ramp-months N]
           [--json] [--advise]";

/// Parsed command line. An input file replaces the preset; flags override both.
#[derive(Debug, Default)]
struct Args {
    preset: Option<Industry>,
    input: Option<PathBuf>,
    overrides: Vec<(Field, Decimal)>,
    ramp_months: Option<u32>,
    json: bool,
    advise: bool,
    help: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Field {
    Revenue,
    Cogs,
    FixedCost,
    Cash,
    Receivables,
    Payables,
    FixedCostChange,
    CostRateChange,
    RevenueChange,
}

impl Field {
    fn from_flag(flag: &str) -> Option<Field> {
        Some(match flag {
            "--revenue" => Field::Revenue,
            "--cogs" => Field::Cogs,
            "--fixed-cost" => Field::FixedCost,
            "--cash" => Field::Cash,
            "--receivables" => Field::Receivables,
            "--payables" => Field::Payables,
            "--fixed-cost-change" => Field::FixedCostChange,
            "--cost-rate-change" => Field::CostRateChange,
            "--revenue-change" => Field::RevenueChange,
            _ => return None,
        })
    }

    fn apply(self, input: &mut ProjectionInput, value: Decimal) {
        let b = &mut input.baseline;
        let s = &mut input.scenario;
        match self {
            Field::Revenue => b.revenue = value,
            Field::Cogs => b.cogs = value,
            Field::FixedCost => b.fixed_cost = value,
            Field::Cash => b.cash = value,
            Field::Receivables => b.receivables = value,
            Field::Payables => b.payables = value,
            Field::FixedCostChange => s.fixed_cost_change = value,
            Field::CostRateChange => s.variable_cost_rate_change_pct = value,
            Field::RevenueChange => s.revenue_change_pct = value,
        }
    }
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut parsed = Args::default();
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        let mut value = |flag: &str| it.next().ok_or_else(|| anyhow!("{flag} expects a value"));
        match arg.as_str() {
            "--preset" => parsed.preset = Some(value(arg.as_str())?.parse()?),
            "--input" => parsed.input = Some(PathBuf::from(value(arg.as_str())?)),
            "--ramp-months" => {
                let raw = value(arg.as_str())?;
                let months = raw
                    .parse()
                    .with_context(|| format!("--ramp-months: not a month count: {raw}"))?;
                parsed.ramp_months = Some(months);
            }
            "--json" => parsed.json = true,
            "--advise" => parsed.advise = true,
            "-h" | "--help" => parsed.help = true,
            flag => match Field::from_flag(flag) {
                Some(field) => {
                    let raw = value(flag)?;
                    let amount: Decimal = raw
                        .parse()
                        .with_context(|| format!("{flag}: not a number: {raw}"))?;
                    parsed.overrides.push((field, amount));
                }
                None => bail!("unknown argument: {flag}\n{USAGE}"),
            },
        }
    }
    Ok(parsed)
}

/// Resolve the engine input from preset, optional YAML file and flag overrides.
fn load_input(args: &Args) -> Result<ProjectionInput> {
    let mut input = match &args.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_yaml::from_str::<ProjectionInput>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => ProjectionInput {
            baseline: args.preset.unwrap_or_default().baseline(),
            scenario: ScenarioDelta::default(),
        },
    };
    for (field, value) in &args.overrides {
        field.apply(&mut input, *value);
    }
    if let Some(months) = args.ramp_months {
        input.scenario.ramp_months = months;
    }
    validate_input(&input)?;
    Ok(input)
}

fn render_report(input: &ProjectionInput, p: &Projection) -> String {
    let s = &input.scenario;
    let m = &p.model;
    let mut out = String::new();
    if s.is_neutral() {
        out.push_str("Scenario | none, baseline figures as given\n");
    } else {
        out.push_str(&format!(
            "Scenario | fixed cost change: {} | cost rate change: {}% | revenue change: {}% | ramp: {} month(s)\n",
            format::signed_amount(s.fixed_cost_change),
            format::signed_percent(s.variable_cost_rate_change_pct, 1),
            format::signed_percent(s.revenue_change_pct, 1),
            s.ramp_months
        ));
    }
    out.push_str(&format!(
        "Ratios | variable cost rate: {}% | receivables: {} months | payables: {} months\n",
        format::percent(p.ratios.variable_cost_rate * Decimal::ONE_HUNDRED, 1),
        format::percent(p.ratios.receivable_months, 1),
        format::percent(p.ratios.payable_months, 1)
    ));
    out.push_str(&format!(
        "KPI | revenue: {} | operating profit: {} | break-even revenue: {} | margin: {} ({}%) | cash after {} months: {}\n",
        format::amount(m.target_revenue),
        format::amount(m.operating_profit),
        format::amount(m.break_even_revenue),
        format::signed_amount(m.break_even_gap),
        format::percent(m.safety_margin_pct, 1),
        HORIZON_MONTHS,
        format::amount(p.risk.ending_cash)
    ));
    if m.payback_revenue > Decimal::ZERO {
        out.push_str(&format!(
            "Payback | extra monthly revenue to cover the investment: {}\n",
            format::amount(m.payback_revenue)
        ));
    }
    out.push_str(&format!(
        "{:<8} {:>14} {:>14} {:>14} {:>14}\n",
        "month", "revenue", "op. profit", "cash flow", "cash"
    ));
    out.push_str(&format!(
        "{:<8} {:>14} {:>14} {:>14} {:>14}\n",
        format::month_label(0),
        "",
        "",
        "",
        format::amount(p.cash.opening())
    ));
    for row in &p.cash.months {
        out.push_str(&format!(
            "{:<8} {:>14} {:>14} {:>14} {:>14}\n",
            format::month_label(row.month as usize),
            format::amount(row.revenue),
            format::amount(row.operating_profit),
            format::signed_amount(row.cash_flow),
            format::amount(row.closing_cash)
        ));
    }
    match p.shortfall_month() {
        Some(month) => out.push_str(&format!(
            "Risk | WARNING: cash turns negative in {} | minimum cash: {}\n",
            format::month_label(month),
            format::amount(p.minimum_cash())
        )),
        None => out.push_str(&format!(
            "Risk | no shortfall within {} months | minimum cash: {}\n",
            HORIZON_MONTHS,
            format::amount(p.minimum_cash())
        )),
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a ProjectionInput,
    projection: &'a Projection,
    #[serde(skip_serializing_if = "Option::is_none")]
    advice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    advice_error: Option<String>,
}

/// Ask the advisory service. Failures never abort the run.
fn request_advice(
    input: &ProjectionInput,
    projection: &Projection,
) -> Result<String, AdvisorError> {
    let request = AdvisoryRequest::new(projection, &input.scenario);
    GeminiAdvisor::new(GeminiConfig::from_env())
        .and_then(|advisor| diagnose(&advisor, &request))
        .map_err(|e| {
            warn!(error = %e, "advisory text unavailable");
            e
        })
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }
    info!(preset = ?args.preset, input = ?args.input, "starting CLI");

    let input = load_input(&args)?;
    let projection = project(&input.baseline, &input.scenario);
    let advice = args.advise.then(|| request_advice(&input, &projection));

    if args.json {
        let (advice, advice_error) = match advice {
            Some(Ok(text)) => (Some(text), None),
            Some(Err(e)) => (None, Some(e.to_string())),
            None => (None, None),
        };
        let report = JsonReport {
            input: &input,
            projection: &projection,
            advice,
            advice_error,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_report(&input, &projection));
    match advice {
        Some(Ok(text)) => println!("\nAdvisory\n{text}"),
        Some(Err(e)) => println!("\nAdvisory text unavailable: {e}"),
        None => {}
    }
    Ok(())
}
