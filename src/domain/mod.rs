//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - CI release detection outputs (`CiPlatform`, `TagResolution`)
//! - fitted-model descriptions (`ParamCounts`, `ModelDescription`, `ArimaResults`, `FitSummary`)
//! - seasonal orders (`SeasonalOrder`, `LagSpec`)
//! - bundled datasets (`Dataset`, `DatasetFormat`)

pub mod types;

pub use types::*;
