//! Report grids over (leaseback hours × ownership years)
//!
//! Each cell is an independent simulation of the base configuration with its
//! own part 135 hours and horizon, reduced to a single [`OutputMetric`].

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use serde::{Deserialize, Serialize};

use crate::config::OwnershipConfig;
use crate::error::ReportError;
use crate::ledger::Filter;
use crate::simulation::simulate;
use crate::summary::{TaxParams, part91_fraction, tax_adjusted_profit};

/// How a cell's tax-adjusted profit is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMetric {
    /// Whole-horizon total
    Outlay,
    /// Per personal hobbs hour
    #[default]
    Hourly,
    /// Per ownership year
    Yearly,
}

impl OutputMetric {
    /// Reduce a whole-horizon value; zero wherever the denominator would be
    pub fn apply(self, value: f64, part91_hours: f64, years: u32) -> f64 {
        match self {
            OutputMetric::Outlay => value,
            OutputMetric::Hourly => {
                if part91_hours * years as f64 > 0.0 {
                    value / (part91_hours * 12.0 * years as f64)
                } else {
                    0.0
                }
            }
            OutputMetric::Yearly => {
                if years > 0 {
                    value / years as f64
                } else {
                    0.0
                }
            }
        }
    }
}

/// Simulate one cell and reduce it to `metric`
pub fn evaluate_cell(
    base: &OwnershipConfig,
    part135_hours: f64,
    years: u32,
    metric: OutputMetric,
) -> Result<f64, ReportError> {
    let config = base.clone().part135_hours(part135_hours).years(years);
    let sheet = simulate(&config)?;

    let params = TaxParams {
        part91_percentage: part91_fraction(config.part91_hours, part135_hours),
        ..Default::default()
    };
    let value = tax_adjusted_profit(&sheet, &Filter::all(), &params);
    Ok(metric.apply(value, config.part91_hours, years))
}

/// Evaluated grid; `values[row][column]` is `hours[row]` at `years[column]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub hours: Vec<u32>,
    pub years: Vec<u32>,
    pub values: Vec<Vec<f64>>,
}

/// Evaluate every (hours, years) cell
pub fn evaluate_grid(
    base: &OwnershipConfig,
    hours: &[u32],
    years: &[u32],
    metric: OutputMetric,
) -> Result<Grid, ReportError> {
    let cells: Vec<(u32, u32)> = hours
        .iter()
        .flat_map(|&h| years.iter().map(move |&y| (h, y)))
        .collect();

    #[cfg(feature = "parallel")]
    let results: Vec<Result<f64, ReportError>> = cells
        .par_iter()
        .map(|&(h, y)| evaluate_cell(base, h as f64, y, metric))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<f64, ReportError>> = cells
        .iter()
        .map(|&(h, y)| evaluate_cell(base, h as f64, y, metric))
        .collect();

    let flat = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    let values = if years.is_empty() {
        vec![Vec::new(); hours.len()]
    } else {
        flat.chunks(years.len()).map(<[f64]>::to_vec).collect()
    };

    Ok(Grid {
        hours: hours.to_vec(),
        years: years.to_vec(),
        values,
    })
}

/// Parse `N` or an inclusive `start,stop,step` range
pub fn parse_range(raw: &str) -> Result<Vec<u32>, ReportError> {
    let invalid = || ReportError::InvalidRange(raw.to_string());
    let number = |part: &str| part.trim().parse::<u32>().map_err(|_| invalid());

    let parts: Vec<&str> = raw.split(',').collect();
    match parts.as_slice() {
        [single] => Ok(vec![number(single)?]),
        [start, stop, step] => {
            let (start, stop, step) = (number(start)?, number(stop)?, number(step)?);
            if step == 0 || start > stop {
                return Err(invalid());
            }
            Ok((start..=stop).step_by(step as usize).collect())
        }
        _ => Err(invalid()),
    }
}

/// Color band of a value relative to a breakeven window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Below,
    Between,
    Above,
}

/// Low and high watermarks for coloring a grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakeven {
    pub low: f64,
    pub high: f64,
}

impl Breakeven {
    /// Parse a `low,high` pair
    pub fn parse(raw: &str) -> Result<Self, ReportError> {
        let invalid = || ReportError::InvalidBreakeven(raw.to_string());
        let (low, high) = raw.split_once(',').ok_or_else(invalid)?;
        let low = low.trim().parse::<f64>().map_err(|_| invalid())?;
        let high = high.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok(Self { low, high })
    }

    /// Values exactly on a watermark are not "between"
    pub fn classify(&self, value: f64) -> Band {
        if value < self.low {
            Band::Below
        } else if self.low < value && value < self.high {
            Band::Between
        } else {
            Band::Above
        }
    }
}
