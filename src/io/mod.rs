//! Input/output helpers.
//!
//! - fit summary JSON read/write (`summary`)
//! - dataset exports (CSV/JSON) (`export`)

pub mod export;
pub mod summary;

pub use export::*;
pub use summary::*;
