//! fibmat library: application logic for the `fibmat` binary.

pub mod app;
pub mod config;
pub mod errors;
