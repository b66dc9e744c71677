//! Named numeric constants consumed by the engine
//!
//! Tax rates and fuel prices live in a plain string-keyed table so callers
//! can override any of them with `key=value` pairs without the engine
//! knowing which keys exist beyond the ones it reads.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConstantError, SimulationError};

/// Yearly property tax as a fraction of purchase price
pub const PROPERTY_TAX: &str = "property_tax";
/// One-time use tax as a fraction of purchase price
pub const USE_TAX: &str = "use_tax";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Constants(FxHashMap<String, f64>);

impl Default for Constants {
    /// Property tax 1%, use tax 8.5%, fuel in dollars per gallon
    fn default() -> Self {
        Self::from_iter([
            (PROPERTY_TAX, 0.01),
            (USE_TAX, 0.085),
            ("gas_100ll", 6.00),
            ("gas_mogas", 4.50),
            ("gas_jet_a", 5.50),
        ])
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Constants {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<String>> Extend<(K, f64)> for Constants {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

impl Constants {
    /// Look up a constant the engine cannot run without
    pub fn get(&self, key: &str) -> Result<f64, SimulationError> {
        self.0
            .get(key)
            .copied()
            .ok_or_else(|| SimulationError::MissingConstant(key.to_string()))
    }

    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    /// Apply a `key=value` override
    pub fn apply_override(&mut self, raw: &str) -> Result<(), ConstantError> {
        let (key, value) = parse_override(raw)?;
        self.0.insert(key, value);
        Ok(())
    }

    /// All constants sorted by key
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> =
            self.0.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Split a `key=value` override into its parts
fn parse_override(raw: &str) -> Result<(String, f64), ConstantError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| ConstantError::Malformed(raw.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ConstantError::Malformed(raw.to_string()));
    }
    let value = value.trim();
    let number = value
        .parse::<f64>()
        .map_err(|_| ConstantError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })?;
    Ok((key.to_string(), number))
}
