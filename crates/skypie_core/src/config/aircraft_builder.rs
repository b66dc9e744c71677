//! Aircraft Builder DSL
//!
//! Provides a fluent API for assembling an [`AircraftProfile`]. Every
//! attribute that has no sensible default must be supplied; `build` reports
//! the first one that is missing.
//!
//! ```ignore
//! use skypie_core::config::AircraftBuilder;
//! use skypie_core::model::{DepreciationModel, Engine, Propeller};
//!
//! let t210 = AircraftBuilder::new("T210")
//!     .price(79_000.0)
//!     .performance(170.0, 18.0)
//!     .insurance(8_000.0)
//!     .annual(9_000.0)
//!     .engine(Engine::new(30_000.0, 1_400.0, "gas_100ll"))
//!     .propeller(Propeller::new(4_000.0, 2_000.0))
//!     .depreciation(DepreciationModel::exponential(0.03, 12))
//!     .build()?;
//! ```

use crate::error::ProfileError;
use crate::model::{AircraftProfile, DepreciationModel, Engine, Performance, Propeller, Upgrade};

/// Builder for [`AircraftProfile`]
#[derive(Debug, Clone, Default)]
pub struct AircraftBuilder {
    name: String,
    price: Option<f64>,
    value: Option<f64>,
    performance: Option<Performance>,
    insurance: Option<f64>,
    annual: Option<f64>,
    yearly_costs: f64,
    upgrades: Vec<Upgrade>,
    engine: Option<Engine>,
    propeller: Option<Propeller>,
    depreciation: Option<DepreciationModel>,
}

impl AircraftBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    // =========================================================================
    // Required attributes
    // =========================================================================

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Cruise speed (knots) and fuel burn (gallons per hour)
    #[must_use]
    pub fn performance(mut self, ktas: f64, gph: f64) -> Self {
        self.performance = Some(Performance { ktas, gph });
        self
    }

    /// Yearly insurance premium
    #[must_use]
    pub fn insurance(mut self, insurance: f64) -> Self {
        self.insurance = Some(insurance);
        self
    }

    /// Annual inspection cost
    #[must_use]
    pub fn annual(mut self, annual: f64) -> Self {
        self.annual = Some(annual);
        self
    }

    #[must_use]
    pub fn engine(mut self, engine: Engine) -> Self {
        self.engine = Some(engine);
        self
    }

    #[must_use]
    pub fn propeller(mut self, propeller: Propeller) -> Self {
        self.propeller = Some(propeller);
        self
    }

    #[must_use]
    pub fn depreciation(mut self, depreciation: DepreciationModel) -> Self {
        self.depreciation = Some(depreciation);
        self
    }

    // =========================================================================
    // Optional attributes
    // =========================================================================

    /// Market value, if different from price
    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn yearly_costs(mut self, yearly_costs: f64) -> Self {
        self.yearly_costs = yearly_costs;
        self
    }

    #[must_use]
    pub fn upgrade(mut self, upgrade: Upgrade) -> Self {
        self.upgrades.push(upgrade);
        self
    }

    /// Build the profile, failing on the first missing required attribute
    pub fn build(self) -> Result<AircraftProfile, ProfileError> {
        Ok(AircraftProfile::from_parts(
            self.name,
            self.price.ok_or(ProfileError::MissingField("price"))?,
            self.value,
            self.performance
                .ok_or(ProfileError::MissingField("performance"))?,
            self.insurance
                .ok_or(ProfileError::MissingField("insurance"))?,
            self.annual.ok_or(ProfileError::MissingField("annual"))?,
            self.yearly_costs,
            self.upgrades,
            self.engine.ok_or(ProfileError::MissingField("engine"))?,
            self.propeller
                .ok_or(ProfileError::MissingField("propeller"))?,
            self.depreciation
                .ok_or(ProfileError::MissingField("depreciation"))?,
        ))
    }
}
