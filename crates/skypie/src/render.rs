//! Plain-text rendering of tables and ledgers

use std::io::{self, Write};

use crossterm::style::Stylize;
use skypie_core::ledger::LedgerEntry;
use skypie_core::model::{Acquisition, AircraftProfile};
use skypie_core::report::{Band, Breakeven, Grid, OutputMetric};

const LABEL_WIDTH: usize = 5;
const CELL_WIDTH: usize = 10;

pub fn metric_name(metric: OutputMetric) -> &'static str {
    match metric {
        OutputMetric::Outlay => "outlay",
        OutputMetric::Hourly => "hourly",
        OutputMetric::Yearly => "yearly",
    }
}

/// Scenario description printed above a table
pub fn write_header(
    out: &mut dyn Write,
    plane: &AircraftProfile,
    acquisition: &Acquisition,
    metric: OutputMetric,
    sell: bool,
) -> io::Result<()> {
    writeln!(out, "Plane:        {}", plane.name())?;
    writeln!(out, "Acquisition:  {acquisition}")?;
    writeln!(out, "Depreciation: {}", plane.depreciation())?;
    writeln!(out, "Output:       {}", metric_name(metric))?;
    if !plane.upgrades().is_empty() {
        writeln!(out, "Upgrades:")?;
        for upgrade in plane.upgrades() {
            writeln!(
                out,
                "  {}: {}, {}",
                upgrade.name, upgrade.price, upgrade.depreciation
            )?;
        }
    }
    writeln!(
        out,
        "Liquidation model: {}",
        if sell { "sell" } else { "keep" }
    )
}

fn styled_cell(value: f64, breakeven: Option<&Breakeven>) -> String {
    let cell = format!("{:>CELL_WIDTH$} ", format!("{value:.2}"));
    match breakeven.map(|b| b.classify(value)) {
        Some(Band::Below) => cell.red().to_string(),
        Some(Band::Between) => cell.blue().to_string(),
        Some(Band::Above) => cell.green().to_string(),
        None => cell,
    }
}

/// Years across, leaseback hours down
pub fn write_grid(
    out: &mut dyn Write,
    grid: &Grid,
    breakeven: Option<&Breakeven>,
) -> io::Result<()> {
    write!(out, "{:>LABEL_WIDTH$} ", "")?;
    for years in &grid.years {
        write!(out, "{years:>CELL_WIDTH$} ")?;
    }
    writeln!(out)?;

    for (hours, row) in grid.hours.iter().zip(&grid.values) {
        write!(out, "{hours:>LABEL_WIDTH$} ")?;
        for value in row {
            write!(out, "{}", styled_cell(*value, breakeven))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// `year N: entries...` followed by its income and profit
pub fn write_year(
    out: &mut dyn Write,
    label: &str,
    entries: &[LedgerEntry],
    income: f64,
    profit: f64,
) -> io::Result<()> {
    let entries: Vec<String> = entries.iter().map(ToString::to_string).collect();
    writeln!(out, "{label}: {}", entries.join(" "))?;
    writeln!(out, "  -> income: {income:.2}, profit: {profit:.2}")?;
    writeln!(out)
}
