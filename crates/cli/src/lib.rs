//! Command-line entry point for the stock tracker.

pub mod config;
pub mod demo;

pub use config::CliConfig;
pub use demo::run_demo;
