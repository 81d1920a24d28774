//! `arima-compat` library crate.
//!
//! The binary (`arima-compat`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the CI tag resolver, compatibility shims and datasets stay independent
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod compat;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod release;
pub mod report;
