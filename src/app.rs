//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - dispatches to the release / compat / dataset helpers
//! - prints reports and writes optional output files

use std::io::Write;

use clap::Parser;

use crate::cli::{Command, DatasetArgs, DfModelArgs, GetTagArgs, SeasonalOrderArgs};
use crate::compat::{BackendVersion, bind_df_model, check_seasonal_order, validate_seasonal_order};
use crate::domain::{DatasetFormat, LagSpec, SeasonalOrder};
use crate::error::AppError;
use crate::release::{EnvSource, ProcessEnv, resolve_tag, write_version_from_env};

/// Entry point for the `arima-compat` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    crate::logging::init(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::GetTag(args) => handle_get_tag(&args, &ProcessEnv::load(), &mut out),
        Command::SeasonalOrder(args) => handle_seasonal_order(&args, &mut out),
        Command::DfModel(args) => handle_df_model(&args, &mut out),
        Command::Dataset(args) => handle_dataset(&args, &mut out),
    }
}

/// `get-tag`: resolve the CI tag from `env` and write VERSION unless `--dry-run`.
pub fn handle_get_tag<W: Write>(args: &GetTagArgs, env: &impl EnvSource, out: &mut W) -> Result<(), AppError> {
    let resolution = if args.dry_run {
        resolve_tag(env)
    } else {
        write_version_from_env(env, &args.root)?
    };

    writeln!(out, "{}", crate::report::format_tag_resolution(&resolution)).map_err(write_err)
}

/// `seasonal-order`: print the normalized order; exit code 2 if `--validate` rejects it.
pub fn handle_seasonal_order<W: Write>(args: &SeasonalOrderArgs, out: &mut W) -> Result<(), AppError> {
    let input = seasonal_order_from_args(args);
    let normalized = check_seasonal_order(input.clone());

    let validation = if args.validate {
        let backend: BackendVersion = args.backend_version.parse()?;
        Some(validate_seasonal_order(&normalized, backend).map_err(|e| e.to_string()))
    } else {
        None
    };

    write!(
        out,
        "{}",
        crate::report::format_seasonal_order(&input, &normalized, validation.as_ref())
    )
    .map_err(write_err)?;

    match validation {
        Some(Err(_)) => Err(AppError::new(2, "Seasonal order rejected by validation.")),
        _ => Ok(()),
    }
}

pub fn seasonal_order_from_args(args: &SeasonalOrderArgs) -> SeasonalOrder {
    let ar = match &args.ar_lags {
        Some(lags) => LagSpec::Lags(lags.clone()),
        None => LagSpec::Order(args.p),
    };
    let ma = match &args.ma_lags {
        Some(lags) => LagSpec::Lags(lags.clone()),
        None => LagSpec::Order(args.q),
    };
    SeasonalOrder {
        ar,
        diff: args.d,
        ma,
        period: args.m,
    }
}

/// `df-model`: bind `df_model` in a fit summary, then report and/or write it.
///
/// The patched JSON goes to `--output`, back to `--input` with `--in-place`,
/// or to `out` when neither is given and `--report` is off.
pub fn handle_df_model<W: Write>(args: &DfModelArgs, out: &mut W) -> Result<(), AppError> {
    let mut summary = crate::io::read_summary_json(&args.input)?;
    bind_df_model(&summary.model, &mut summary.results)
        .map_err(|e| e.context(format!("{}", args.input.display())))?;

    if args.report {
        write!(out, "{}", crate::report::format_fit_summary(&summary)).map_err(write_err)?;
    }

    let target = if args.in_place {
        Some(args.input.as_path())
    } else {
        args.output.as_deref()
    };

    match target {
        Some(path) => {
            crate::io::write_summary_json(path, &summary)?;
            tracing::info!(path = %path.display(), "wrote patched fit summary");
        }
        None if !args.report => crate::io::write_summary(out, &summary)?,
        None => {}
    }

    Ok(())
}

/// `dataset`: print a bundled dataset, or the list of datasets.
pub fn handle_dataset<W: Write>(args: &DatasetArgs, out: &mut W) -> Result<(), AppError> {
    if args.list {
        return write!(out, "{}", crate::report::format_dataset_list()).map_err(write_err);
    }

    let values = args.name.load();
    match args.format {
        DatasetFormat::Table => {
            write!(out, "{}", crate::report::format_dataset_table(args.name, &values)).map_err(write_err)
        }
        DatasetFormat::Csv => crate::io::write_dataset_csv(out, &values),
        DatasetFormat::Json => crate::io::write_dataset_json(out, &values),
    }
}

fn write_err(e: std::io::Error) -> AppError {
    AppError::new(2, format!("Failed to write output: {e}"))
}
