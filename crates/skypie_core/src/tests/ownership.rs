//! Tests for acquisition and recurring ownership costs
//!
//! These tests verify:
//! - Year-one totals of a financed airplane against an independent payment stream
//! - Depreciation allocation across ownership years
//! - Leaseback revenue, salary and fuel accounting
//! - Validation happening before the ledger is touched

use super::{assert_close, da40, trainer};
use crate::config::OwnershipConfig;
use crate::error::SimulationError;
use crate::ledger::{BalanceSheet, EntryKind, Filter, LedgerEntry};
use crate::meterable::Meterable;
use crate::model::{Acquisition, Constants, Engine, UsageModel};
use crate::simulation::{simulate, simulate_into};
use crate::summary::{TaxParams, tax_adjusted_profit};

fn year_total(sheet: &BalanceSheet, year: u32, kind: EntryKind) -> f64 {
    sheet.sum(&Filter::all().year(year).kind(kind))
}

/// Financed DA40 kept on the ground for a year
#[test]
fn test_financed_first_year_totals() {
    let plane = da40();
    let acquisition = Acquisition::mortgage(0.15, 120, 0.0625);
    let config = OwnershipConfig::new(plane.clone(), acquisition);
    let sheet = simulate(&config).unwrap();

    // Twelve draws: the down payment, then eleven loan payments
    let payments: Vec<_> = acquisition.schedule(plane.price()).produce().take(12).collect();
    let principal: f64 = payments.iter().map(|p| p.principal).sum();
    let interest: f64 = payments.iter().map(|p| p.interest).sum();
    assert_close(payments[0].principal, 239_000.0 * 0.15, "down payment");

    let use_tax = 239_000.0 * 0.085;
    let property_tax = 239_000.0 * 0.01;
    let fixed_costs = 5_580.0 + property_tax + 1_122.0;

    assert_close(
        year_total(&sheet, 0, EntryKind::CapEx),
        use_tax + principal,
        "capex",
    );
    assert_close(
        year_total(&sheet, 0, EntryKind::OpEx),
        interest + fixed_costs + 1_600.0,
        "opex",
    );
    assert_close(
        year_total(&sheet, 0, EntryKind::Depreciation),
        239_000.0 * 0.10,
        "depreciation",
    );
    assert_eq!(year_total(&sheet, 0, EntryKind::Hobby), 0.0);
    assert_eq!(year_total(&sheet, 0, EntryKind::Income), 0.0);

    assert_eq!(sheet.month(), 12);
    let assets: Vec<_> = sheet.assets().collect();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].0, 0);
    assert_eq!(assets[0].1.value, 239_000.0);
}

#[test]
fn test_no_flying_means_no_fuel_entries() {
    let sheet = simulate(&OwnershipConfig::new(da40(), Acquisition::Cash)).unwrap();
    let kinds: Vec<EntryKind> = sheet
        .select(&Filter::all())
        .iter()
        .map(LedgerEntry::kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            EntryKind::Asset,
            EntryKind::CapEx,
            EntryKind::OpEx,
            EntryKind::Depreciation
        ]
    );
}

#[test]
fn test_cash_purchase_pays_price_in_month_zero() {
    let sheet = simulate(&OwnershipConfig::new(da40(), Acquisition::Cash)).unwrap();
    let month_zero = sheet.sum(&Filter::all().month(0).kind(EntryKind::CapEx));
    assert_close(month_zero, 239_000.0 * 1.085, "month zero capex");
    assert_eq!(sheet.sum(&Filter::all().month(1).kind(EntryKind::CapEx)), 0.0);

    // No income, so nothing is taxed and the profit is the negated spend
    let expenses = sheet.sum(&Filter::all().kinds([EntryKind::CapEx, EntryKind::OpEx]));
    let profit = tax_adjusted_profit(&sheet, &Filter::all(), &TaxParams::default());
    assert_close(profit, -expenses, "profit");
}

#[test]
fn test_depreciation_spread_evenly_across_years() {
    let plane = da40();
    let config = OwnershipConfig::new(plane.clone(), Acquisition::Cash).years(3);
    let sheet = simulate(&config).unwrap();

    let retained = plane.depreciation().at(36);
    let per_year = (239_000.0 - 239_000.0 * retained) / 3.0;
    for year in 0..3 {
        assert_close(
            year_total(&sheet, year, EntryKind::Depreciation),
            per_year,
            "yearly depreciation",
        );
    }

    // Insurance, property tax and recurring costs every year, plus one annual
    let fixed_costs = 5_580.0 + 239_000.0 * 0.01 + 1_122.0;
    for year in 1..3 {
        assert_close(
            year_total(&sheet, year, EntryKind::OpEx),
            fixed_costs + 1_600.0,
            "yearly opex",
        );
    }
}

#[test]
fn test_upgrade_is_capitalized_and_depreciated() {
    use crate::model::{DepreciationModel, Upgrade};

    let avionics = Upgrade::new(
        "G500_GTN750",
        52_000.0,
        DepreciationModel::combined([
            DepreciationModel::fixed(0.5),
            DepreciationModel::linear(120),
        ]),
    );
    let plane = da40().with_upgrades(vec![avionics.clone()]);
    let sheet = simulate(&OwnershipConfig::new(plane, Acquisition::Cash)).unwrap();

    let month_zero = sheet.sum(&Filter::all().month(0).kind(EntryKind::CapEx));
    assert_close(month_zero, 239_000.0 * 1.085 + 52_000.0, "capex with upgrade");

    let upgrade_loss = 52_000.0 - 52_000.0 * avionics.depreciation.at(12);
    assert_close(
        year_total(&sheet, 0, EntryKind::Depreciation),
        239_000.0 * 0.10 + upgrade_loss,
        "depreciation with upgrade",
    );
    assert_eq!(sheet.assets().count(), 2);
}

#[test]
fn test_leaseback_revenue_and_costs() {
    let plane = trainer().with_engine(Engine::new(20_000.0, 2_000.0, "gas_100ll"));
    let config = OwnershipConfig::new(plane, Acquisition::Cash)
        .part135_hours(5.0)
        .usage(UsageModel {
            hobbs_ratio: 1.0,
            revenue: 150.0,
            salary: 30.0,
        });
    let sheet = simulate(&config).unwrap();

    let hours = 12.0 * 5.0;
    assert_close(year_total(&sheet, 0, EntryKind::Income), hours * 150.0, "income");
    assert_eq!(year_total(&sheet, 0, EntryKind::Hobby), 0.0);

    let fixed_costs = 2_000.0 + 100_000.0 * 0.01;
    let fuel = hours * 8.0 * 6.00;
    let salary = hours * 30.0;
    assert_close(
        year_total(&sheet, 0, EntryKind::OpEx),
        fixed_costs + 1_500.0 + fuel + salary,
        "opex",
    );
}

#[test]
fn test_personal_flying_is_hobby_spend() {
    let plane = trainer().with_engine(Engine::new(20_000.0, 2_000.0, "gas_mogas"));
    let config = OwnershipConfig::new(plane, Acquisition::Cash)
        .part91_hours(4.0)
        .usage(UsageModel {
            hobbs_ratio: 1.0,
            ..Default::default()
        });
    let sheet = simulate(&config).unwrap();
    assert_close(
        year_total(&sheet, 0, EntryKind::Hobby),
        12.0 * 4.0 * 8.0 * 4.50,
        "hobby",
    );
}

#[test]
fn test_zero_years_leaves_sheet_untouched() {
    let config = OwnershipConfig::new(da40(), Acquisition::Cash).years(0);
    let mut sheet = BalanceSheet::new();
    let err = simulate_into(&config, &mut sheet).unwrap_err();

    assert_eq!(err, SimulationError::InvalidOwnershipYears(0));
    assert!(sheet.is_empty());
    assert_eq!(sheet.month(), 0);
}

#[test]
fn test_missing_fuel_constant() {
    let plane = da40().with_engine(Engine::new(24_000.0, 2_000.0, "gas_unobtainium"));
    let config = OwnershipConfig::new(plane, Acquisition::Cash);
    assert_eq!(
        simulate(&config).unwrap_err(),
        SimulationError::MissingConstant("gas_unobtainium".to_string())
    );

    let config = OwnershipConfig::new(da40(), Acquisition::Cash)
        .constants(Constants::from_iter([("gas_100ll", 6.0), ("use_tax", 0.085)]));
    assert_eq!(
        simulate(&config).unwrap_err(),
        SimulationError::MissingConstant("property_tax".to_string())
    );
}

#[test]
fn test_rejects_negative_hours() {
    let config = OwnershipConfig::new(da40(), Acquisition::Cash).part91_hours(-1.0);
    assert!(matches!(
        simulate(&config),
        Err(SimulationError::InvalidParameter {
            name: "part91_hours",
            ..
        })
    ));
}

#[test]
fn test_zero_term_loan_charges_full_price() {
    let config = OwnershipConfig::new(da40(), Acquisition::mortgage(0.15, 0, 0.0625)).years(2);
    let sheet = simulate(&config).unwrap();

    let capex = sheet.sum(&Filter::all().kind(EntryKind::CapEx));
    assert_close(capex, 239_000.0 + 239_000.0 * 0.085, "capex");
    assert_close(
        sheet.sum(&Filter::all().month(1).kind(EntryKind::CapEx)),
        239_000.0 * 0.85,
        "payoff",
    );
}

#[test]
fn test_simulate_into_continues_from_current_month() {
    let mut sheet = BalanceSheet::new();
    sheet.tick();
    sheet.tick();
    simulate_into(&OwnershipConfig::new(da40(), Acquisition::Cash), &mut sheet).unwrap();

    assert!(sheet.entries(0).is_empty());
    assert_eq!(sheet.month(), 14);
    assert_eq!(sheet.assets().next().map(|(month, _)| month), Some(2));
}

#[test]
fn test_simulate_into_sells_only_its_own_assets() {
    let mut sheet = BalanceSheet::new();
    simulate_into(&OwnershipConfig::new(trainer(), Acquisition::Cash), &mut sheet).unwrap();
    let config = OwnershipConfig::new(trainer(), Acquisition::Cash).sell(true);
    simulate_into(&config, &mut sheet).unwrap();

    assert_eq!(sheet.assets().count(), 2);
    assert_eq!(sheet.entries(24), &[LedgerEntry::Income(100_000.0)]);
}
