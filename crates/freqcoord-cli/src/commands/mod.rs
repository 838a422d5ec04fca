//! Command implementations.

pub mod config;
pub mod paired;
pub mod run;
pub mod same_document;

pub use self::config::execute_config;
pub use self::run::{execute_run, run_pipeline, RunOptions};
