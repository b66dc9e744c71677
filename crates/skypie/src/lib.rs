//! Command-line front end for the skypie ownership cost simulator
//!
//! Resolves airplanes (presets or YAML profiles), layers constants from the
//! data directory and the command line, runs the core simulation and prints
//! tables or year-by-year ledgers.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod presets;
pub mod render;
pub mod storage;

pub use cli::Cli;
pub use commands::run;
pub use logging::init_logging;
