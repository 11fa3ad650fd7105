use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory whose files are to be packed
    #[arg(value_name = "DIR")]
    pub path: PathBuf,
    /// Bin (disk) capacity in bytes, with an optional K, M or G suffix
    #[arg(value_name = "SIZE")]
    pub capacity: String,
    #[arg(short, long, value_enum, default_value = "split")]
    pub mode: Mode,
    /// Also write the solution as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    pub json_output: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn"
    )]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Spread all files over as few bins as possible (best-fit decreasing)
    Split,
    /// Search for a subset of files filling a single bin exactly
    Exact,
}
