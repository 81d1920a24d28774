//! CI release helpers.
//!
//! - environment sources (`env`)
//! - tag detection + VERSION file writing (`tag`)

pub mod env;
pub mod tag;

pub use env::*;
pub use tag::*;
