//! CLI error types
//!
//! Structured errors for the boundaries the CLI owns: input resolution,
//! text decoding and configuration loading. Everything else flows through
//! `anyhow` with context attached at the call site.

use thiserror::Error;

/// Errors raised at the CLI boundaries
#[derive(Debug, Error)]
pub enum CliError {
    /// An input pattern matched nothing on disk
    #[error("no input file matches '{pattern}'")]
    FileNotFound {
        /// The pattern as given on the command line
        pattern: String,
    },

    /// An input pattern could not be parsed as a glob
    #[error("invalid input pattern '{pattern}'")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
    },

    /// The config file or the word lists it references are unusable
    #[error("configuration error: {message}")]
    Config {
        /// What went wrong, as reported by the loader
        message: String,
    },

    /// An input source is not valid UTF-8
    #[error("input from {origin} is not valid UTF-8")]
    Encoding {
        /// File path, or `<stdin>`
        origin: String,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
