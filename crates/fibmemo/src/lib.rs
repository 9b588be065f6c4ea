//! fibmemo library: application logic for the `fibmemo` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod output;
