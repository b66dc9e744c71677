//! Criterion benchmarks for skypie_core simulation
//!
//! Run with: cargo bench -p skypie_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use skypie_core::config::{AircraftBuilder, OwnershipConfig};
use skypie_core::model::{Acquisition, DepreciationModel, Engine, Propeller, Upgrade, UsageModel};
use skypie_core::report::{OutputMetric, evaluate_grid};
use skypie_core::simulation::simulate;

fn create_leaseback_config(years: u32) -> OwnershipConfig {
    let plane = AircraftBuilder::new("T210")
        .price(79_000.0)
        .performance(170.0, 18.0)
        .insurance(8_000.0)
        .annual(9_000.0)
        .engine(Engine::new(30_000.0, 1_400.0, "gas_100ll"))
        .propeller(Propeller::new(4_000.0, 2_000.0))
        .depreciation(DepreciationModel::exponential(0.03, 12))
        .upgrade(Upgrade::new(
            "G500_GTN750",
            52_000.0,
            DepreciationModel::combined([
                DepreciationModel::fixed(0.5),
                DepreciationModel::linear(120),
            ]),
        ))
        .build()
        .expect("benchmark profile is complete");

    OwnershipConfig::new(plane, Acquisition::mortgage(0.15, 120, 0.0625))
        .part91_hours(10.0)
        .part135_hours(30.0)
        .usage(UsageModel {
            revenue: 175.0,
            salary: 30.0,
            ..Default::default()
        })
        .years(years)
        .sell(true)
}

fn bench_single_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for years in [1, 10, 30].iter() {
        let config = create_leaseback_config(*years);
        group.bench_with_input(BenchmarkId::new("years", years), years, |b, _| {
            b.iter(|| simulate(black_box(&config)))
        });
    }

    group.finish();
}

fn bench_report_grid(c: &mut Criterion) {
    let config = create_leaseback_config(1);
    let hours: Vec<u32> = (0..=100).step_by(10).collect();
    let years: Vec<u32> = (1..=10).collect();

    c.bench_function("grid_11x10_hourly", |b| {
        b.iter(|| {
            evaluate_grid(
                black_box(&config),
                black_box(&hours),
                black_box(&years),
                OutputMetric::Hourly,
            )
        })
    });
}

criterion_group!(benches, bench_single_simulation, bench_report_grid);
criterion_main!(benches);
