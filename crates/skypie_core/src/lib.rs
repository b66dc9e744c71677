//! Aircraft ownership cost simulation library
//!
//! This crate models the total cost of owning an airplane over a horizon of
//! whole months. It supports:
//! - Cash and amortizing-loan acquisition schedules
//! - Fixed, exponential, straight-line and blended depreciation curves
//! - Personal (part 91) and leaseback (part 135) flying with fuel, revenue
//!   and salary accounting
//! - Engine and propeller overhauls as depreciable capital events
//! - Optional resale at the end of the horizon
//! - Tax-adjusted profit and (hours × years) report grids
//!
//! # Example
//!
//! ```ignore
//! use skypie_core::config::{AircraftBuilder, OwnershipConfig};
//! use skypie_core::model::{Acquisition, DepreciationModel, Engine, Propeller};
//! use skypie_core::simulation::simulate;
//!
//! let plane = AircraftBuilder::new("DA40")
//!     .price(239_000.0)
//!     .performance(135.0, 9.0)
//!     .insurance(5_580.0)
//!     .annual(1_600.0)
//!     .engine(Engine::new(24_000.0, 2_000.0, "gas_100ll"))
//!     .propeller(Propeller::new(3_000.0, 2_000.0))
//!     .depreciation(DepreciationModel::Exponential { amount: 0.10, rate_months: 12 })
//!     .build()?;
//!
//! let config = OwnershipConfig::new(plane, Acquisition::mortgage(0.15, 120, 0.0625))
//!     .part91_hours(10.0)
//!     .years(5);
//! let sheet = simulate(&config)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod acquisition;
pub mod depreciation;
pub mod error;
pub mod ledger;
pub mod meterable;
pub mod report;
pub mod simulation;
pub mod summary;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{AircraftBuilder, OwnershipConfig};
pub use ledger::{BalanceSheet, EntryKind, Filter, LedgerEntry};
pub use meterable::Meterable;
