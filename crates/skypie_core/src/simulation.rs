//! Ownership simulation engine
//!
//! Drives one airplane through `years * 12` months of ownership, writing
//! every cost, income and asset into a [`BalanceSheet`]:
//!
//! - month 0: the airplane and its upgrades as assets, use tax, and the
//!   straight allocation of projected depreciation across ownership years
//! - every month: the next loan payment, fuel for personal and leaseback
//!   hours, leaseback revenue and salary, engine/propeller overhauls and
//!   inspections
//! - every 12th month: insurance, property tax, recurring costs and that
//!   year's depreciation charges
//! - optionally, a final sale netting resale value against the loan payoff

use std::collections::BTreeMap;

use tracing::{debug, info, trace};

use crate::acquisition::{Payment, PaymentStream};
use crate::config::OwnershipConfig;
use crate::depreciation::DepreciationModel;
use crate::error::{Result, SimulationError};
use crate::ledger::{Asset, BalanceSheet, LedgerEntry};
use crate::meterable::Meterable;
use crate::model::{PROPERTY_TAX, USE_TAX};

/// Inspection is due after this many months...
const ANNUAL_INTERVAL_MONTHS: u32 = 12;
/// ...or this many tach hours, whichever comes first
const INSPECTION_INTERVAL_HOURS: f64 = 100.0;

/// Run a simulation into a fresh balance sheet
pub fn simulate(config: &OwnershipConfig) -> Result<BalanceSheet> {
    let mut sheet = BalanceSheet::new();
    simulate_into(config, &mut sheet)?;
    Ok(sheet)
}

/// Run a simulation, appending to `sheet` from its current month on
///
/// Ownership years are counted from that month, and a sale only liquidates
/// assets this run recorded. All inputs are validated first; on error the
/// sheet is left untouched.
pub fn simulate_into(config: &OwnershipConfig, sheet: &mut BalanceSheet) -> Result<()> {
    let rates = Rates::resolve(config)?;

    let mut run = OwnershipRun::new(config, rates, sheet);
    run.acquire();
    for month in 0..config.months() {
        run.step(month);
    }
    if config.sell {
        run.sell();
    }
    Ok(())
}

/// Constants looked up once per run
#[derive(Debug, Clone, Copy)]
struct Rates {
    property_tax: f64,
    use_tax: f64,
    fuel_price: f64,
}

impl Rates {
    fn resolve(config: &OwnershipConfig) -> Result<Self> {
        if config.years == 0 {
            return Err(SimulationError::InvalidOwnershipYears(config.years));
        }
        for (name, hours) in [
            ("part91_hours", config.part91_hours),
            ("part135_hours", config.part135_hours),
        ] {
            if !hours.is_finite() || hours < 0.0 {
                return Err(SimulationError::InvalidParameter {
                    name,
                    reason: "must be a non-negative number of hours",
                });
            }
        }
        if !is_positive(config.usage.hobbs_ratio) {
            return Err(SimulationError::InvalidParameter {
                name: "hobbs_ratio",
                reason: "must be positive",
            });
        }
        if !is_positive(config.profile.engine().tbo) {
            return Err(SimulationError::InvalidParameter {
                name: "engine.tbo",
                reason: "must be positive",
            });
        }
        if !is_positive(config.profile.propeller().tbo) {
            return Err(SimulationError::InvalidParameter {
                name: "propeller.tbo",
                reason: "must be positive",
            });
        }

        Ok(Self {
            property_tax: config.constants.get(PROPERTY_TAX)?,
            use_tax: config.constants.get(USE_TAX)?,
            fuel_price: config.constants.get(&config.profile.engine().fuel)?,
        })
    }
}

/// False for NaN as well as zero and negatives
fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// Tach-hour counter for a component with a time between overhauls
#[derive(Debug, Clone, Copy)]
struct OverhaulCounter {
    component: &'static str,
    cost: f64,
    tbo: f64,
    hours: f64,
}

impl OverhaulCounter {
    fn due(&self) -> bool {
        self.hours > self.tbo
    }
}

struct OwnershipRun<'a> {
    config: &'a OwnershipConfig,
    rates: Rates,
    sheet: &'a mut BalanceSheet,
    /// Sheet month of the purchase
    start: u32,
    payments: PaymentStream,
    /// Depreciation charges by ownership year
    depreciation: BTreeMap<u32, Vec<f64>>,
    engine: OverhaulCounter,
    propeller: OverhaulCounter,
    months_since_annual: u32,
    hours_since_inspection: f64,
}

impl<'a> OwnershipRun<'a> {
    fn new(config: &'a OwnershipConfig, rates: Rates, sheet: &'a mut BalanceSheet) -> Self {
        let profile = &config.profile;
        let engine = profile.engine();
        let propeller = profile.propeller();

        Self {
            config,
            rates,
            start: sheet.month(),
            sheet,
            payments: config.acquisition.schedule(profile.price()).produce(),
            depreciation: BTreeMap::new(),
            engine: OverhaulCounter {
                component: "engine",
                cost: engine.overhaul,
                tbo: engine.tbo,
                hours: engine.smoh,
            },
            propeller: OverhaulCounter {
                component: "propeller",
                cost: propeller.overhaul,
                tbo: propeller.tbo,
                hours: propeller.spoh,
            },
            months_since_annual: 0,
            hours_since_inspection: 0.0,
        }
    }

    /// Record a cash entry unless it is exactly zero
    fn record(&mut self, entry: LedgerEntry) {
        if entry.amount() != Some(0.0) {
            self.sheet.record(entry);
        }
    }

    /// Month-zero purchase: assets, use tax, upgrades, depreciation schedule
    fn acquire(&mut self) {
        let config = self.config;
        let profile = &config.profile;
        let price = profile.price();

        self.sheet.record(LedgerEntry::Asset(
            Asset::new(price, profile.depreciation().clone()).with_value(profile.value()),
        ));
        self.record(LedgerEntry::CapEx(price * self.rates.use_tax));
        self.allocate_depreciation(price, profile.depreciation());

        for upgrade in profile.upgrades() {
            self.record(LedgerEntry::CapEx(upgrade.price));
            self.sheet.record(LedgerEntry::Asset(Asset::new(
                upgrade.price,
                upgrade.depreciation.clone(),
            )));
            self.allocate_depreciation(upgrade.price, &upgrade.depreciation);
        }

        debug!(
            plane = profile.name(),
            price,
            acquisition = %config.acquisition,
            years = config.years,
            upgrades = profile.upgrades().len(),
            "Acquired airplane"
        );
    }

    /// Spread the value lost over the horizon evenly across ownership years
    fn allocate_depreciation(&mut self, price: f64, model: &DepreciationModel) {
        let years = self.config.years;
        let lost = price - price * model.at(self.config.months());
        let charge = lost / years as f64;
        for year in 0..years {
            self.depreciation.entry(year).or_default().push(charge);
        }
    }

    fn step(&mut self, month: u32) {
        let config = self.config;
        let profile = &config.profile;
        let usage = config.usage;

        let Payment {
            principal,
            interest,
        } = self.payments.next().unwrap_or(Payment::ZERO);
        self.record(LedgerEntry::CapEx(principal));
        self.record(LedgerEntry::OpEx(interest));

        if month % 12 == 0 {
            let yearly = profile.insurance()
                + profile.price() * self.rates.property_tax
                + profile.yearly_costs();
            self.record(LedgerEntry::OpEx(yearly));
            for charge in self.depreciation.remove(&(month / 12)).unwrap_or_default() {
                self.record(LedgerEntry::Depreciation(charge));
            }
        }

        let hourly = profile.performance().gph * self.rates.fuel_price;
        let personal = config.part91_hours;
        let commercial = config.part135_hours;

        self.record(LedgerEntry::Hobby(hourly * personal));
        self.record(LedgerEntry::OpEx(hourly * commercial));
        self.record(LedgerEntry::Income(usage.revenue * commercial));
        self.record(LedgerEntry::OpEx(usage.salary * commercial));

        let tach = usage.tach_hours(personal + commercial);
        self.engine.hours += tach;
        self.propeller.hours += tach;

        while self.engine.due() {
            self.engine = self.overhaul(month, self.engine);
        }
        while self.propeller.due() {
            self.propeller = self.overhaul(month, self.propeller);
        }

        self.months_since_annual += 1;
        self.hours_since_inspection += tach;
        if self.months_since_annual >= ANNUAL_INTERVAL_MONTHS
            || self.hours_since_inspection >= INSPECTION_INTERVAL_HOURS
        {
            self.months_since_annual = 0;
            self.hours_since_inspection = 0.0;
            self.record(LedgerEntry::OpEx(profile.annual()));
        }

        trace!(
            month,
            engine_hours = self.engine.hours,
            propeller_hours = self.propeller.hours,
            "Month closed"
        );
        self.sheet.tick();
    }

    /// Capitalize an overhaul and depreciate it over its useful life
    fn overhaul(&mut self, month: u32, mut counter: OverhaulCounter) -> OverhaulCounter {
        counter.hours -= counter.tbo;

        let tach_per_month = self.config.usage.tach_hours(self.config.monthly_hours());
        let remaining_months = self.config.months() - month;
        let (useful_months, service_years) = if tach_per_month > 0.0 {
            (
                (counter.tbo / tach_per_month).ceil() as u32,
                (counter.tbo / (tach_per_month * 12.0)).ceil() as u32,
            )
        } else {
            // Not flying: the overhaul only has to last out the horizon
            (remaining_months, remaining_months.div_ceil(12))
        };
        let useful_months = useful_months.max(1);
        let service_years = service_years.max(1);

        self.record(LedgerEntry::CapEx(counter.cost));
        self.sheet.record(LedgerEntry::Asset(Asset::new(
            counter.cost,
            DepreciationModel::linear(useful_months),
        )));

        // This year's boundary has passed, so its share is claimed now
        let charge = counter.cost / service_years as f64;
        self.record(LedgerEntry::Depreciation(charge));
        let year = month / 12;
        let years_left = self.config.years - year;
        for offset in 1..service_years.min(years_left) {
            self.depreciation
                .entry(year + offset)
                .or_default()
                .push(charge);
        }

        debug!(
            component = counter.component,
            month,
            cost = counter.cost,
            useful_months,
            service_years,
            "Overhaul"
        );
        counter
    }

    /// Pay off what is still owed and sell this run's assets at their depreciated value
    fn sell(&mut self) {
        let remaining_principal: f64 = self
            .payments
            .by_ref()
            .take_while(|payment| !payment.is_zero())
            .map(|payment| payment.principal)
            .sum();

        let (start, now) = (self.start, self.sheet.month());
        let sale_income: f64 = self
            .sheet
            .assets()
            .filter(|(recorded, _)| *recorded >= start)
            .map(|(recorded, asset)| asset.value_after(now - recorded))
            .filter(|value| *value > 0.0)
            .sum();

        info!(
            month = now,
            sale_income, remaining_principal, "Sold airplane"
        );
        self.sheet
            .record(LedgerEntry::Income(sale_income - remaining_principal));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AircraftBuilder;
    use crate::model::{Acquisition, Engine, Propeller};

    #[test]
    fn test_overhaul_schedule_stops_at_horizon() {
        let plane = AircraftBuilder::new("glider tug")
            .price(100_000.0)
            .performance(100.0, 8.0)
            .insurance(2_000.0)
            .annual(1_500.0)
            .engine(Engine::new(20_000.0, 2_000.0, "gas_100ll").with_smoh(2_000.0))
            .propeller(Propeller::new(3_000.0, 2_000.0))
            .depreciation(DepreciationModel::fixed(1.0))
            .build()
            .unwrap();
        let config = OwnershipConfig::new(plane, Acquisition::Cash)
            .part91_hours(1e-5)
            .years(3);

        let rates = Rates::resolve(&config).unwrap();
        let mut sheet = BalanceSheet::new();
        let mut run = OwnershipRun::new(&config, rates, &mut sheet);
        run.acquire();
        run.step(0);

        let scheduled: Vec<u32> = run.depreciation.keys().copied().collect();
        assert_eq!(scheduled, vec![1, 2]);
        for charges in run.depreciation.values() {
            let overhaul = charges.last().copied().unwrap_or_default();
            assert!(overhaul > 0.0 && overhaul < 0.01, "{charges:?}");
        }
    }
}
