//! Aircraft profile definitions
//!
//! A profile bundles every cost-relevant attribute of one airplane. Profiles
//! are immutable: the `with_*` methods return a modified copy, leaving the
//! original (usually a preset) untouched.

use serde::{Deserialize, Serialize};

use crate::depreciation::DepreciationModel;

/// Cruise performance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// Knots true airspeed
    pub ktas: f64,
    /// Fuel burn, gallons per hour
    pub gph: f64,
}

/// Engine overhaul profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    /// Cost of a major overhaul
    pub overhaul: f64,
    /// Time between overhauls, tach hours
    pub tbo: f64,
    /// Constants key of the fuel price, e.g. `gas_100ll`
    pub fuel: String,
    /// Hours since major overhaul at purchase
    #[serde(default)]
    pub smoh: f64,
}

impl Engine {
    pub fn new(overhaul: f64, tbo: f64, fuel: impl Into<String>) -> Self {
        Self {
            overhaul,
            tbo,
            fuel: fuel.into(),
            smoh: 0.0,
        }
    }

    #[must_use]
    pub fn with_smoh(mut self, smoh: f64) -> Self {
        self.smoh = smoh;
        self
    }
}

/// Propeller overhaul profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Propeller {
    pub overhaul: f64,
    pub tbo: f64,
    /// Hours since propeller overhaul at purchase
    #[serde(default)]
    pub spoh: f64,
}

impl Propeller {
    pub fn new(overhaul: f64, tbo: f64) -> Self {
        Self {
            overhaul,
            tbo,
            spoh: 0.0,
        }
    }

    #[must_use]
    pub fn with_spoh(mut self, spoh: f64) -> Self {
        self.spoh = spoh;
        self
    }
}

/// Capital addition installed at purchase (avionics, paint, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upgrade {
    pub name: String,
    pub price: f64,
    pub depreciation: DepreciationModel,
}

impl Upgrade {
    pub fn new(name: impl Into<String>, price: f64, depreciation: DepreciationModel) -> Self {
        Self {
            name: name.into(),
            price,
            depreciation,
        }
    }
}

/// Everything about an airplane that affects what it costs to own
///
/// Build one with [`crate::config::AircraftBuilder`] or deserialize it from
/// a profile file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    name: String,
    price: f64,
    /// Market value when different from the purchase price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    performance: Performance,
    /// Yearly insurance premium
    insurance: f64,
    /// Annual inspection cost
    annual: f64,
    /// Other recurring yearly costs (subscriptions, hangar, ...)
    #[serde(default)]
    yearly_costs: f64,
    #[serde(default)]
    upgrades: Vec<Upgrade>,
    engine: Engine,
    #[serde(alias = "prop")]
    propeller: Propeller,
    depreciation: DepreciationModel,
}

impl AircraftProfile {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        name: String,
        price: f64,
        value: Option<f64>,
        performance: Performance,
        insurance: f64,
        annual: f64,
        yearly_costs: f64,
        upgrades: Vec<Upgrade>,
        engine: Engine,
        propeller: Propeller,
        depreciation: DepreciationModel,
    ) -> Self {
        Self {
            name,
            price,
            value,
            performance,
            insurance,
            annual,
            yearly_costs,
            upgrades,
            engine,
            propeller,
            depreciation,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Market value, the purchase price unless overridden
    pub fn value(&self) -> f64 {
        self.value.unwrap_or(self.price)
    }

    pub fn performance(&self) -> Performance {
        self.performance
    }

    pub fn insurance(&self) -> f64 {
        self.insurance
    }

    pub fn annual(&self) -> f64 {
        self.annual
    }

    pub fn yearly_costs(&self) -> f64 {
        self.yearly_costs
    }

    pub fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn propeller(&self) -> Propeller {
        self.propeller
    }

    pub fn depreciation(&self) -> &DepreciationModel {
        &self.depreciation
    }

    // =========================================================================
    // Derived copies
    // =========================================================================

    /// New purchase price; the market value follows unless set separately
    #[must_use]
    pub fn with_price(&self, price: f64) -> Self {
        Self {
            price,
            value: None,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_value(&self, value: f64) -> Self {
        Self {
            value: Some(value),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_insurance(&self, insurance: f64) -> Self {
        Self {
            insurance,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_annual(&self, annual: f64) -> Self {
        Self {
            annual,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_yearly_costs(&self, yearly_costs: f64) -> Self {
        Self {
            yearly_costs,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_upgrades(&self, upgrades: Vec<Upgrade>) -> Self {
        Self {
            upgrades,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_engine(&self, engine: Engine) -> Self {
        Self {
            engine,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_propeller(&self, propeller: Propeller) -> Self {
        Self {
            propeller,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_depreciation(&self, depreciation: DepreciationModel) -> Self {
        Self {
            depreciation,
            ..self.clone()
        }
    }
}
