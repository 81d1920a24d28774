//! Dataset exports (CSV / JSON).
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::io::Write;

use crate::error::AppError;

/// Write `index,value` CSV rows with a header.
pub fn write_dataset_csv<W: Write>(mut out: W, values: &[i64]) -> Result<(), AppError> {
    writeln!(out, "index,value").map_err(|e| AppError::new(2, format!("Failed to write CSV header: {e}")))?;
    for (i, v) in values.iter().enumerate() {
        writeln!(out, "{i},{v}").map_err(|e| AppError::new(2, format!("Failed to write CSV row: {e}")))?;
    }
    Ok(())
}

/// Write the values as a single JSON array.
pub fn write_dataset_json<W: Write>(mut out: W, values: &[i64]) -> Result<(), AppError> {
    serde_json::to_writer(&mut out, values)
        .map_err(|e| AppError::new(2, format!("Failed to write dataset JSON: {e}")))?;
    writeln!(out).map_err(|e| AppError::new(2, format!("Failed to write dataset JSON: {e}")))?;
    Ok(())
}
