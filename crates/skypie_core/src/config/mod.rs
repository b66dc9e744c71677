//! Simulation configuration
//!
//! [`OwnershipConfig`] carries every input of one ownership simulation:
//! the airplane, how it is paid for, how much it flies, for how long, and
//! the constants table. [`AircraftBuilder`] assembles profiles and checks
//! that every required attribute was supplied.
//!
//! ```ignore
//! use skypie_core::config::OwnershipConfig;
//! use skypie_core::model::{Acquisition, UsageModel};
//!
//! let config = OwnershipConfig::new(plane, Acquisition::Cash)
//!     .part91_hours(8.0)
//!     .part135_hours(20.0)
//!     .usage(UsageModel { revenue: 150.0, ..Default::default() })
//!     .years(5)
//!     .sell(true);
//! ```

pub mod aircraft_builder;

pub use aircraft_builder::AircraftBuilder;

use crate::model::{Acquisition, AircraftProfile, Constants, UsageModel};

/// Complete input of one ownership simulation
#[derive(Debug, Clone)]
pub struct OwnershipConfig {
    pub profile: AircraftProfile,
    pub acquisition: Acquisition,
    /// Personal hobbs hours per month
    pub part91_hours: f64,
    /// Commercial (leaseback) hobbs hours per month
    pub part135_hours: f64,
    /// Ownership duration; must be at least one year
    pub years: u32,
    pub usage: UsageModel,
    pub constants: Constants,
    /// Sell the airplane (and pay off the loan) at the end of the horizon
    pub sell: bool,
}

impl OwnershipConfig {
    /// One year of keeping the airplane without flying it
    #[must_use]
    pub fn new(profile: AircraftProfile, acquisition: Acquisition) -> Self {
        Self {
            profile,
            acquisition,
            part91_hours: 0.0,
            part135_hours: 0.0,
            years: 1,
            usage: UsageModel::default(),
            constants: Constants::default(),
            sell: false,
        }
    }

    #[must_use]
    pub fn part91_hours(mut self, hours: f64) -> Self {
        self.part91_hours = hours;
        self
    }

    #[must_use]
    pub fn part135_hours(mut self, hours: f64) -> Self {
        self.part135_hours = hours;
        self
    }

    #[must_use]
    pub fn years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    #[must_use]
    pub fn usage(mut self, usage: UsageModel) -> Self {
        self.usage = usage;
        self
    }

    #[must_use]
    pub fn constants(mut self, constants: Constants) -> Self {
        self.constants = constants;
        self
    }

    #[must_use]
    pub fn sell(mut self, sell: bool) -> Self {
        self.sell = sell;
        self
    }

    /// Total hobbs hours flown per month
    pub fn monthly_hours(&self) -> f64 {
        self.part91_hours + self.part135_hours
    }

    pub fn months(&self) -> u32 {
        self.years * 12
    }
}
