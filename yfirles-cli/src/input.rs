//! Input resolution and reading
//!
//! Inputs are glob patterns resolved to files, or the literal `-` for
//! standard input. All text must be valid UTF-8; decoding problems are
//! reported at this boundary, before any correction runs.

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::io::Read;
use std::path::PathBuf;

/// One resolved input source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Name for log and error messages
    pub fn display(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole source as UTF-8 text
    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .context("Failed to read standard input")?;
                String::from_utf8(buf).map_err(|_| {
                    CliError::Encoding {
                        origin: "<stdin>".to_string(),
                    }
                    .into()
                })
            }
            InputSource::File(path) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("Failed to read file: {}", path.display()))?;
                String::from_utf8(bytes).map_err(|_| {
                    CliError::Encoding {
                        origin: path.display().to_string(),
                    }
                    .into()
                })
            }
        }
    }
}

/// Resolve input patterns to concrete sources
///
/// `-` selects standard input; everything else goes through glob expansion.
/// Duplicates are removed and files are processed in sorted order.
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();
    let mut files = Vec::new();

    for pattern in patterns {
        if pattern == "-" {
            sources.push(InputSource::Stdin);
            continue;
        }
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern {
            pattern: pattern.clone(),
        })?;
        let mut matched = false;
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
                matched = true;
            }
        }
        if !matched {
            return Err(CliError::FileNotFound {
                pattern: pattern.clone(),
            }
            .into());
        }
    }

    files.sort();
    files.dedup();
    sources.extend(files.into_iter().map(InputSource::File));

    if sources.is_empty() {
        anyhow::bail!("No input sources given");
    }
    Ok(sources)
}
