use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use skypie::{Cli, init_logging, run};

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".skypie")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &cli.log_level)?;

    let mut out = BufWriter::new(io::stdout().lock());
    let result = run(&cli, &data_dir, &mut out);
    out.flush()?;

    if let Err(err) = &result {
        tracing::error!("{err:#}");
    }
    result
}
