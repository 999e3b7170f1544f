//! # Runtime Module
//!
//! Command-line arguments and the top-level publishing run.

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{publish, run};
