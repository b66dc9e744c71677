//! Command-line arguments
//!
//! Global flags describe the usage model, the acquisition, plane overrides and
//! constants; subcommands pick what to compute.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use skypie_core::error::ConstantError;
use skypie_core::model::{Acquisition, AircraftProfile, Constants, UsageModel};
use skypie_core::report::OutputMetric;

#[derive(Parser, Debug)]
#[command(name = "skypie")]
#[command(about = "Estimate what owning an airplane really costs")]
pub struct Cli {
    #[command(flatten)]
    pub usage: UsageArgs,

    #[command(flatten)]
    pub acquisition: AcquisitionArgs,

    #[command(flatten)]
    pub plane: PlaneArgs,

    /// Override a constant, e.g. --constant gas_100ll=6.50
    #[arg(long = "constant", value_name = "KEY=VALUE", global = true)]
    pub constants: Vec<String>,

    /// Path to the data directory (default: ~/.skypie/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tabulate a metric over leaseback hours (rows) and ownership years (columns)
    Table(TableArgs),
    /// Year-by-year ledger of one scenario
    Sample(SampleArgs),
    /// List the effective constants
    Constants,
    /// List the built-in airplanes
    Planes,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Preset name or path to a YAML profile
    pub plane: String,
    /// Part 91 (personal) hobbs hours per month
    pub part91_hours: f64,
    /// Part 135 (leaseback) hours per month: N or start,stop,step
    pub h_range: String,
    /// Years of ownership: N or start,stop,step
    pub y_range: String,
    #[arg(long, value_enum, default_value_t = OutputArg::Hourly)]
    pub output: OutputArg,
    /// Color cells against low,high watermarks
    #[arg(long, value_name = "LOW,HIGH", allow_hyphen_values = true)]
    pub breakeven: Option<String>,
}

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Preset name or path to a YAML profile
    pub plane: String,
    /// Part 91 (personal) hobbs hours per month
    pub part91_hours: f64,
    /// Part 135 (leaseback) hobbs hours per month
    pub part135_hours: f64,
    /// Years of ownership
    pub years: u32,
    /// Print the ledger as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputArg {
    Hourly,
    Yearly,
    Outlay,
}

impl From<OutputArg> for OutputMetric {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Hourly => OutputMetric::Hourly,
            OutputArg::Yearly => OutputMetric::Yearly,
            OutputArg::Outlay => OutputMetric::Outlay,
        }
    }
}

#[derive(Args, Debug, Clone)]
#[command(next_help_heading = "Usage model")]
pub struct UsageArgs {
    /// Hobbs hours billed per tach hour
    #[arg(long, default_value_t = 1.2, global = true)]
    pub usage_hobbs_ratio: f64,
    /// Revenue per leaseback hobbs hour
    #[arg(long, default_value_t = 0.0, global = true)]
    pub usage_revenue: f64,
    /// Salary paid per leaseback hobbs hour
    #[arg(long, default_value_t = 0.0, global = true)]
    pub usage_salary: f64,
}

impl UsageArgs {
    pub fn model(&self) -> UsageModel {
        UsageModel {
            hobbs_ratio: self.usage_hobbs_ratio,
            revenue: self.usage_revenue,
            salary: self.usage_salary,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionType {
    Cash,
    Finance,
}

#[derive(Args, Debug, Clone)]
#[command(next_help_heading = "Acquisition")]
pub struct AcquisitionArgs {
    #[arg(long, value_enum, default_value_t = AcquisitionType::Finance, global = true)]
    pub acquisition_type: AcquisitionType,
    /// Loan term in months
    #[arg(long, default_value_t = 120, global = true)]
    pub financing_term: u32,
    /// Yearly rate in percent, e.g. 6.25
    #[arg(long, default_value_t = 6.25, global = true)]
    pub financing_rate: f64,
    /// Down payment in percent, e.g. 15
    #[arg(long, default_value_t = 15.0, global = true)]
    pub financing_down: f64,
}

impl AcquisitionArgs {
    pub fn model(&self) -> Acquisition {
        match self.acquisition_type {
            AcquisitionType::Cash => Acquisition::Cash,
            AcquisitionType::Finance => Acquisition::mortgage(
                self.financing_down / 100.0,
                self.financing_term,
                self.financing_rate / 100.0,
            ),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "Plane overrides")]
pub struct PlaneArgs {
    /// Sell the plane at the end of the horizon
    #[arg(long, overrides_with = "keep", global = true)]
    pub sell: bool,
    /// Keep the plane at the end of the horizon (default)
    #[arg(long, overrides_with = "sell", global = true)]
    pub keep: bool,
    /// Purchase price; also resets the market value
    #[arg(long, global = true)]
    pub price: Option<f64>,
    /// Market value, if different from price
    #[arg(long, global = true)]
    pub value: Option<f64>,
    /// Annual inspection cost
    #[arg(long, global = true)]
    pub annual: Option<f64>,
    /// Yearly insurance premium
    #[arg(long, global = true)]
    pub insurance: Option<f64>,
    /// Engine hours since major overhaul
    #[arg(long, global = true)]
    pub engine_smoh: Option<f64>,
    /// Propeller hours since overhaul
    #[arg(long, global = true)]
    pub prop_spoh: Option<f64>,
    /// Monthly housing cost (tie-down, hangar)
    #[arg(long, global = true)]
    pub housing: Option<f64>,
}

impl PlaneArgs {
    pub fn sell(&self) -> bool {
        self.sell && !self.keep
    }

    /// Apply the overrides to `plane`, leaving it untouched
    pub fn apply(&self, plane: &AircraftProfile) -> AircraftProfile {
        let mut plane = plane.clone();
        if let Some(price) = self.price {
            plane = plane.with_price(price);
        }
        if let Some(value) = self.value {
            plane = plane.with_value(value);
        }
        if let Some(annual) = self.annual {
            plane = plane.with_annual(annual);
        }
        if let Some(insurance) = self.insurance {
            plane = plane.with_insurance(insurance);
        }
        if let Some(housing) = self.housing {
            plane = plane.with_yearly_costs(plane.yearly_costs() + housing * 12.0);
        }
        if let Some(smoh) = self.engine_smoh {
            plane = plane.with_engine(plane.engine().clone().with_smoh(smoh));
        }
        if let Some(spoh) = self.prop_spoh {
            plane = plane.with_propeller(plane.propeller().with_spoh(spoh));
        }
        plane
    }
}

/// Apply `key=value` overrides in order
pub fn apply_constant_overrides(
    constants: &mut Constants,
    overrides: &[String],
) -> Result<(), ConstantError> {
    overrides
        .iter()
        .try_for_each(|raw| constants.apply_override(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::preset;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("skypie").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_table_defaults() {
        let cli = parse(&["table", "DA40", "10", "0,40,10", "1,10,1"]);
        let Command::Table(table) = &cli.command else {
            panic!("expected table, got {:?}", cli.command);
        };
        assert_eq!(table.plane, "DA40");
        assert_eq!(table.part91_hours, 10.0);
        assert_eq!(table.output, OutputArg::Hourly);
        assert!(table.breakeven.is_none());

        assert_eq!(cli.acquisition.model(), Acquisition::mortgage(0.15, 120, 0.0625));
        assert_eq!(cli.usage.model(), UsageModel::default());
        assert!(!cli.plane.sell());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&[
            "sample",
            "T210",
            "8",
            "20",
            "5",
            "--acquisition-type",
            "cash",
            "--usage-revenue",
            "175",
            "--constant",
            "gas_100ll=7",
            "--sell",
            "--json",
        ]);
        assert_eq!(cli.acquisition.model(), Acquisition::Cash);
        assert_eq!(cli.usage.model().revenue, 175.0);
        assert_eq!(cli.constants, ["gas_100ll=7"]);
        assert!(cli.plane.sell());
        assert!(matches!(cli.command, Command::Sample(SampleArgs { json: true, .. })));
    }

    #[test]
    fn test_last_of_sell_and_keep_wins() {
        assert!(!parse(&["--sell", "--keep", "planes"]).plane.sell());
        assert!(parse(&["--keep", "--sell", "planes"]).plane.sell());
    }

    #[test]
    fn test_negative_breakeven() {
        let cli = parse(&["table", "DA40", "10", "0", "1", "--breakeven", "-50,0"]);
        let Command::Table(table) = cli.command else {
            panic!("expected table");
        };
        assert_eq!(table.breakeven.as_deref(), Some("-50,0"));
    }

    #[test]
    fn test_plane_overrides() {
        let da40 = preset("DA40").unwrap().unwrap();
        let overrides = PlaneArgs {
            price: Some(200_000.0),
            value: Some(180_000.0),
            housing: Some(150.0),
            engine_smoh: Some(1_200.0),
            prop_spoh: Some(400.0),
            ..Default::default()
        };
        let plane = overrides.apply(&da40);

        assert_eq!(plane.price(), 200_000.0);
        assert_eq!(plane.value(), 180_000.0);
        assert_eq!(plane.yearly_costs(), 1_122.0 + 1_800.0);
        assert_eq!(plane.engine().smoh, 1_200.0);
        assert_eq!(plane.propeller().spoh, 400.0);
        assert_eq!(plane.annual(), da40.annual());

        assert_eq!(da40.price(), 239_000.0);
        assert_eq!(da40.engine().smoh, 0.0);
    }

    #[test]
    fn test_constant_overrides() {
        let mut constants = Constants::default();
        apply_constant_overrides(&mut constants, &["use_tax=0".into(), "gas_mogas=5".into()])
            .unwrap();
        assert_eq!(constants.get("use_tax").unwrap(), 0.0);
        assert_eq!(constants.get("gas_mogas").unwrap(), 5.0);

        let err = apply_constant_overrides(&mut constants, &["gas_mogas".into()]).unwrap_err();
        assert_eq!(err, ConstantError::Malformed("gas_mogas".into()));
    }
}
