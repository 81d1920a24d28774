//! Compatibility shims for the wrapped ARIMA/SARIMAX estimation backend.
//!
//! - `df_model` backfill on results (`df_model`)
//! - seasonal order normalization + validation (`seasonal`)
//! - backend version gating (`version`)
//! - information criteria that depend on the backfill (`criteria`)

pub mod criteria;
pub mod df_model;
pub mod seasonal;
pub mod version;

pub use df_model::*;
pub use seasonal::*;
pub use version::*;
