//! Batch front end: reads cases from the command line, solves their queries
//! in parallel and writes plain-text reports.

pub mod cli;
pub mod config;
mod error;
pub mod report;
pub mod runner;

pub use cli::{Args, Case};
pub use config::{FileConfig, Settings};
pub use error::AppError;
pub use runner::{run, run_case};
