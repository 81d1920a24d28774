//! Command-line parsing for the ARIMA compatibility toolkit.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the library code.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::{Dataset, DatasetFormat};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "arima-compat",
    version,
    about = "Release, compatibility and dataset helpers for ARIMA forecasting"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write `pmdarima/VERSION` from the CI tag, if this is a tagged build.
    GetTag(GetTagArgs),
    /// Normalize (and optionally validate) a seasonal order `(P, D, Q, m)`.
    SeasonalOrder(SeasonalOrderArgs),
    /// Backfill `df_model` in a fit summary JSON and print information criteria.
    DfModel(DfModelArgs),
    /// Print a bundled sample dataset.
    Dataset(DatasetArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct GetTagArgs {
    /// Project root; the file is written to `<root>/pmdarima/VERSION`.
    #[arg(long, env = "ARIMA_COMPAT_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Only report the detected version; do not write the file.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct SeasonalOrderArgs {
    /// Seasonal AR order (P).
    #[arg(allow_negative_numbers = true)]
    pub p: i64,

    /// Seasonal differencing order (D).
    #[arg(allow_negative_numbers = true)]
    pub d: i64,

    /// Seasonal MA order (Q).
    #[arg(allow_negative_numbers = true)]
    pub q: i64,

    /// Seasonal periodicity (m).
    #[arg(allow_negative_numbers = true)]
    pub m: i64,

    /// Explicit seasonal AR lag mask (e.g. `1,0,1`); replaces P.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub ar_lags: Option<Vec<i64>>,

    /// Explicit seasonal MA lag mask; replaces Q.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub ma_lags: Option<Vec<i64>>,

    /// Also run backend-style validation on the normalized order.
    #[arg(long)]
    pub validate: bool,

    /// Backend version to validate against.
    #[arg(long, default_value = "0.11.0")]
    pub backend_version: String,
}

#[derive(Debug, Parser, Clone)]
pub struct DfModelArgs {
    /// Fit summary JSON to read.
    #[arg(long, value_name = "JSON")]
    pub input: PathBuf,

    /// Where to write the patched summary (defaults to stdout).
    #[arg(long, value_name = "JSON", conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the input file with the patched summary.
    #[arg(long)]
    pub in_place: bool,

    /// Print df_model and information criteria instead of JSON.
    #[arg(long)]
    pub report: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct DatasetArgs {
    /// Dataset to print.
    #[arg(value_enum, default_value_t = Dataset::Wineind)]
    pub name: Dataset,

    /// Output format.
    #[arg(long, value_enum, default_value_t = DatasetFormat::Table)]
    pub format: DatasetFormat,

    /// List available datasets and exit.
    #[arg(long)]
    pub list: bool,
}
