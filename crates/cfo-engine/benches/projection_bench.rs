use cfo_core::{Industry, ScenarioDelta};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;

fn bench_project(c: &mut Criterion) {
    let baseline = Industry::Construction.baseline();
    let scenario = ScenarioDelta {
        fixed_cost_change: Decimal::new(500_000, 0),
        variable_cost_rate_change_pct: Decimal::new(-25, 1),
        revenue_change_pct: Decimal::new(15, 0),
        ramp_months: 4,
    };
    c.bench_function("project 6 months", |b| {
        b.iter(|| black_box(cfo_engine::project(black_box(&baseline), black_box(&scenario))))
    });
}

criterion_group!(benches, bench_project);
criterion_main!(benches);
