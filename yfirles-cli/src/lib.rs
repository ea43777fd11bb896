//! yfirles CLI library
//!
//! Command-line interface for the yfirles spelling and grammar checker.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
