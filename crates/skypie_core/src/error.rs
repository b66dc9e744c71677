use std::fmt;

/// Errors raised before a simulation touches the ledger
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Ownership must last at least one year
    InvalidOwnershipYears(u32),
    /// A constant the engine needs is not in the table
    MissingConstant(String),
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidOwnershipYears(years) => {
                write!(f, "ownership duration must be positive, got {years} years")
            }
            SimulationError::MissingConstant(key) => write!(f, "constant {key:?} is not defined"),
            SimulationError::InvalidParameter { name, reason } => {
                write!(f, "invalid {name}: {reason}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Errors building an aircraft profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    MissingField(&'static str),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::MissingField(field) => {
                write!(f, "aircraft profile is missing required field {field:?}")
            }
        }
    }
}

impl std::error::Error for ProfileError {}

/// Errors parsing constant overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantError {
    /// Not of the form `key=value`
    Malformed(String),
    InvalidNumber { key: String, value: String },
}

impl fmt::Display for ConstantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantError::Malformed(raw) => {
                write!(f, "invalid value for constant override: {raw:?} (expected key=value)")
            }
            ConstantError::InvalidNumber { key, value } => {
                write!(f, "constant {key:?} has non-numeric value {value:?}")
            }
        }
    }
}

impl std::error::Error for ConstantError {}

/// Errors evaluating a report grid
#[derive(Debug, Clone, PartialEq)]
pub enum ReportError {
    Simulation(SimulationError),
    /// Not a number or a `start,stop,step` triple
    InvalidRange(String),
    /// Not a `low,high` pair
    InvalidBreakeven(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Simulation(e) => write!(f, "{e}"),
            ReportError::InvalidRange(raw) => {
                write!(f, "invalid number or range string: {raw:?}")
            }
            ReportError::InvalidBreakeven(raw) => {
                write!(f, "invalid breakeven {raw:?} (expected low,high)")
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Simulation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SimulationError> for ReportError {
    fn from(err: SimulationError) -> Self {
        ReportError::Simulation(err)
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
