//! Depreciation models
//!
//! A [`DepreciationModel`] yields the fraction of the original price an asset
//! retains after each elapsed month. Index 0 is the value at purchase.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::meterable::Meterable;

/// Retained-value curve of an asset
///
/// Uses explicit field names so the tagged representation round-trips
/// through YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DepreciationModel {
    /// One-time write-down: `retained` forever
    Fixed { retained: f64 },
    /// `amount` of the value is lost every `rate_months` months; `amount`
    /// outside `[0, 1]` is clamped
    /// - (0.07, 12) => 7% per year
    /// - (0.03, 1) => 3% per month
    Exponential { amount: f64, rate_months: u32 },
    /// Straight line to zero over `months`
    Linear { months: u32 },
    /// Product of the constituent curves
    Combined { models: Vec<DepreciationModel> },
}

impl DepreciationModel {
    #[must_use]
    pub fn fixed(retained: f64) -> Self {
        DepreciationModel::Fixed { retained }
    }

    #[must_use]
    pub fn exponential(amount: f64, rate_months: u32) -> Self {
        DepreciationModel::Exponential {
            amount,
            rate_months,
        }
    }

    #[must_use]
    pub fn linear(months: u32) -> Self {
        DepreciationModel::Linear { months }
    }

    #[must_use]
    pub fn combined(models: impl IntoIterator<Item = DepreciationModel>) -> Self {
        DepreciationModel::Combined {
            models: models.into_iter().collect(),
        }
    }
}

impl Meterable for DepreciationModel {
    type Item = f64;
    type Stream = DepreciationStream;

    fn produce(&self) -> DepreciationStream {
        match self {
            DepreciationModel::Fixed { retained } => DepreciationStream::Fixed(*retained),
            DepreciationModel::Exponential {
                amount,
                rate_months,
            } => {
                // A zero period would mean an infinite rate; clamp to monthly
                let period = (*rate_months).max(1) as f64;
                // Can't lose more than everything or less than nothing
                let amount = amount.max(0.0).min(1.0);
                DepreciationStream::Exponential {
                    current: 1.0,
                    factor: (1.0 - amount).powf(1.0 / period),
                }
            }
            DepreciationModel::Linear { months } => DepreciationStream::Linear {
                months: *months,
                elapsed: 0,
            },
            DepreciationModel::Combined { models } => {
                DepreciationStream::Combined(models.iter().map(Meterable::produce).collect())
            }
        }
    }
}

impl fmt::Display for DepreciationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepreciationModel::Fixed { retained } => {
                write!(f, "Fixed depreciation of {:.2}%", retained * 100.0)
            }
            DepreciationModel::Exponential {
                amount,
                rate_months,
            } => write!(f, "{:.2}% per {rate_months} months", amount * 100.0),
            DepreciationModel::Linear { months } => {
                write!(f, "Fixed {months} month useful life.")
            }
            DepreciationModel::Combined { models } => {
                write!(f, "Blended depreciation: ")?;
                for (i, model) in models.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{model}")?;
                }
                Ok(())
            }
        }
    }
}

/// Running state of a depreciation curve
#[derive(Debug, Clone)]
pub enum DepreciationStream {
    Fixed(f64),
    Exponential { current: f64, factor: f64 },
    Linear { months: u32, elapsed: u32 },
    Combined(Vec<DepreciationStream>),
}

impl Iterator for DepreciationStream {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match self {
            DepreciationStream::Fixed(retained) => Some(*retained),
            DepreciationStream::Exponential { current, factor } => {
                let value = *current;
                *current *= *factor;
                Some(value)
            }
            DepreciationStream::Linear { months, elapsed } => {
                let value = if *elapsed < *months {
                    (*months - *elapsed) as f64 / *months as f64
                } else {
                    0.0
                };
                *elapsed = elapsed.saturating_add(1);
                Some(value)
            }
            DepreciationStream::Combined(streams) => streams
                .iter_mut()
                .map(|s| s.next())
                .try_fold(1.0, |acc, v| v.map(|v| acc * v)),
        }
    }
}
