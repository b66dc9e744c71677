//! Integration tests for the ownership simulation engine
//!
//! Tests are organized by topic:
//! - `ownership` - Acquisition, recurring costs and ledger totals
//! - `sale` - Liquidation at the end of the horizon
//! - `maintenance` - Overhauls and inspections
//! - `report_grid` - Grid evaluation and output metrics

mod ownership;

use crate::config::AircraftBuilder;
use crate::model::{AircraftProfile, DepreciationModel, Engine, Propeller};

/// $239k single with the 10%-a-year curve and a 2000 hour engine
fn da40() -> AircraftProfile {
    AircraftBuilder::new("DA40")
        .price(239_000.0)
        .performance(135.0, 9.0)
        .insurance(5_580.0)
        .annual(1_600.0)
        .yearly_costs(1_122.0)
        .engine(Engine::new(24_000.0, 2_000.0, "gas_100ll"))
        .propeller(Propeller::new(3_000.0, 2_000.0))
        .depreciation(DepreciationModel::exponential(0.10, 12))
        .build()
        .unwrap()
}

/// Cheap airplane that never loses value, with a short-lived engine
fn trainer() -> AircraftProfile {
    AircraftBuilder::new("trainer")
        .price(100_000.0)
        .performance(120.0, 8.0)
        .insurance(2_000.0)
        .annual(1_500.0)
        .engine(Engine::new(20_000.0, 100.0, "gas_100ll"))
        .propeller(Propeller::new(3_000.0, 2_000.0))
        .depreciation(DepreciationModel::fixed(1.0))
        .build()
        .unwrap()
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-6 * expected.abs().max(1.0),
        "{what}: expected {expected:.6}, got {actual:.6}"
    );
}
