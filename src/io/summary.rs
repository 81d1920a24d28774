//! Read/write fit summary JSON files.
//!
//! A fit summary is the portable representation of one fitted model:
//! - the model's parameter counts (`model`)
//! - the results fields this crate inspects or patches (`results`)
//!
//! The schema is defined by `domain::FitSummary`.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::domain::FitSummary;
use crate::error::AppError;

/// Read a fit summary JSON file.
pub fn read_summary_json(path: &Path) -> Result<FitSummary, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open fit summary '{}': {e}", path.display())))?;
    read_summary(file)
}

pub fn read_summary<R: Read>(reader: R) -> Result<FitSummary, AppError> {
    serde_json::from_reader(reader).map_err(|e| AppError::new(2, format!("Invalid fit summary JSON: {e}")))
}

/// Write a fit summary JSON file.
pub fn write_summary_json(path: &Path, summary: &FitSummary) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create fit summary '{}': {e}", path.display())))?;
    write_summary(file, summary)
}

pub fn write_summary<W: Write>(mut writer: W, summary: &FitSummary) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut writer, summary)
        .map_err(|e| AppError::new(2, format!("Failed to write fit summary JSON: {e}")))?;
    writeln!(writer).map_err(|e| AppError::new(2, format!("Failed to write fit summary JSON: {e}")))?;
    Ok(())
}
