//! Subcommand handlers
//!
//! Every input is parsed and validated before the first simulation runs, so
//! a malformed range, breakeven, constant or plane fails fast.

use std::io::Write;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use serde::Serialize;
use skypie_core::config::OwnershipConfig;
use skypie_core::ledger::{BalanceSheet, EntryKind, Filter, LedgerEntry};
use skypie_core::model::Constants;
use skypie_core::report::{Breakeven, OutputMetric, evaluate_grid, parse_range};
use skypie_core::simulation::simulate;
use skypie_core::summary::{TaxParams, part91_fraction, tax_adjusted_profit};
use tracing::info;

use crate::cli::{Cli, Command, SampleArgs, TableArgs, apply_constant_overrides};
use crate::presets::presets;
use crate::render::{metric_name, write_grid, write_header, write_year};
use crate::storage::{load_constants, load_plane};

/// Dispatch the parsed command line, writing results to `out`
pub fn run(cli: &Cli, data_dir: &Path, out: &mut dyn Write) -> color_eyre::Result<()> {
    let mut constants = load_constants(data_dir)?;
    apply_constant_overrides(&mut constants, &cli.constants)?;

    match &cli.command {
        Command::Table(args) => table(cli, args, constants, out),
        Command::Sample(args) => sample(cli, args, constants, out),
        Command::Constants => show_constants(&constants, out),
        Command::Planes => show_planes(out),
    }
}

/// Base configuration shared by every cell of a command
fn base_config(
    cli: &Cli,
    plane: &str,
    part91_hours: f64,
    constants: Constants,
) -> color_eyre::Result<OwnershipConfig> {
    let plane = load_plane(plane).wrap_err("could not load the plane")?;
    Ok(OwnershipConfig::new(cli.plane.apply(&plane), cli.acquisition.model())
        .part91_hours(part91_hours)
        .usage(cli.usage.model())
        .constants(constants)
        .sell(cli.plane.sell()))
}

fn table(
    cli: &Cli,
    args: &TableArgs,
    constants: Constants,
    out: &mut dyn Write,
) -> color_eyre::Result<()> {
    let hours = parse_range(&args.h_range)?;
    let years = parse_range(&args.y_range)?;
    let breakeven = args.breakeven.as_deref().map(Breakeven::parse).transpose()?;
    let metric = OutputMetric::from(args.output);
    let base = base_config(cli, &args.plane, args.part91_hours, constants)?;

    info!(
        plane = base.profile.name(),
        rows = hours.len(),
        columns = years.len(),
        metric = metric_name(metric),
        "Tabulating"
    );

    write_header(out, &base.profile, &base.acquisition, metric, base.sell)?;
    let grid = evaluate_grid(&base, &hours, &years, metric)?;
    write_grid(out, &grid, breakeven.as_ref())?;
    writeln!(out)?;
    Ok(())
}

/// One year of a sample run
#[derive(Debug, Serialize)]
struct YearSummary {
    year: u32,
    entries: Vec<LedgerEntry>,
    income: f64,
    profit: f64,
}

#[derive(Debug, Serialize)]
struct SampleReport {
    plane: String,
    acquisition: String,
    part91_percentage: f64,
    years: Vec<YearSummary>,
    aggregate: YearSummary,
}

fn summarize(sheet: &BalanceSheet, year: Option<u32>, params: &TaxParams) -> YearSummary {
    let filter = match year {
        Some(year) => Filter::all().year(year),
        None => Filter::all(),
    };
    YearSummary {
        year: year.unwrap_or_default(),
        entries: sheet.select(&filter),
        income: sheet.sum(&filter.clone().kind(EntryKind::Income)),
        profit: tax_adjusted_profit(sheet, &filter, params),
    }
}

fn sample(
    cli: &Cli,
    args: &SampleArgs,
    constants: Constants,
    out: &mut dyn Write,
) -> color_eyre::Result<()> {
    let config = base_config(cli, &args.plane, args.part91_hours, constants)?
        .part135_hours(args.part135_hours)
        .years(args.years);

    info!(
        plane = config.profile.name(),
        part91_hours = config.part91_hours,
        part135_hours = config.part135_hours,
        years = config.years,
        "Sampling"
    );

    let sheet = simulate(&config)?;
    let params = TaxParams {
        part91_percentage: part91_fraction(config.part91_hours, config.part135_hours),
        ..Default::default()
    };

    // One extra year: a sale lands on the month after the horizon
    let report = SampleReport {
        plane: config.profile.name().to_string(),
        acquisition: config.acquisition.to_string(),
        part91_percentage: params.part91_percentage,
        years: (0..=config.years)
            .map(|year| summarize(&sheet, Some(year), &params))
            .collect(),
        aggregate: summarize(&sheet, None, &params),
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    for year in &report.years {
        let label = format!("year {}", year.year);
        write_year(out, &label, &year.entries, year.income, year.profit)?;
    }
    writeln!(out, "aggregate:")?;
    writeln!(
        out,
        "  -> income: {:.2}, profit: {:.2}",
        report.aggregate.income, report.aggregate.profit
    )?;
    Ok(())
}

fn show_constants(constants: &Constants, out: &mut dyn Write) -> color_eyre::Result<()> {
    for (key, value) in constants.sorted() {
        writeln!(out, "{key} = {value}")?;
    }
    Ok(())
}

fn show_planes(out: &mut dyn Write) -> color_eyre::Result<()> {
    for plane in presets()? {
        let performance = plane.performance();
        writeln!(
            out,
            "{:<6} ${:>9.0}  {:>3} ktas  {:>4} gph  {}",
            plane.name(),
            plane.price(),
            performance.ktas,
            performance.gph,
            plane.depreciation()
        )?;
    }
    Ok(())
}
