mod aircraft;
mod constants;
mod usage;

pub use aircraft::{AircraftProfile, Engine, Performance, Propeller, Upgrade};
pub use constants::{Constants, PROPERTY_TAX, USE_TAX};
pub use usage::UsageModel;

pub use crate::acquisition::{Acquisition, Payment};
pub use crate::depreciation::DepreciationModel;
