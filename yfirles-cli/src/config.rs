//! TOML configuration
//!
//! The config file points at supplementary word-list files that extend the
//! embedded reference data. Paths are resolved relative to the config file
//! itself, so a config directory can be moved as a unit.
//!
//! ```toml
//! [data]
//! words = "extra_words.txt"
//! error-forms = "error_forms.tsv"
//! ```

use crate::error::{CliError, CliResult};
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use yfirles_core::{ContextBuilder, CorrectionContext};

/// Top-level CLI configuration
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CliConfig {
    /// Supplementary word-list files
    #[serde(default)]
    pub data: DataConfig,
}

/// Word-list file references, all optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DataConfig {
    /// Extra valid word forms, one per line
    pub words: Option<PathBuf>,
    /// Extra error-form replacements, tab-separated pairs
    pub error_forms: Option<PathBuf>,
}

impl CliConfig {
    /// Load and parse a config file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::Config { message: e.to_string() })
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Build a correction context: embedded data plus the configured files
    ///
    /// `base_dir` is the directory the config file lives in; relative paths
    /// are resolved against it.
    pub fn build_context(&self, base_dir: &Path) -> CliResult<Arc<CorrectionContext>> {
        let mut builder = ContextBuilder::with_embedded_data()
            .map_err(|e| CliError::Config { message: e.to_string() })?;
        if let Some(words) = &self.data.words {
            let path = base_dir.join(words);
            builder = builder
                .words_from_file(&path)
                .with_context(|| format!("Failed to load word list: {}", path.display()))?;
        }
        if let Some(forms) = &self.data.error_forms {
            let path = base_dir.join(forms);
            builder = builder
                .error_forms_from_file(&path)
                .with_context(|| format!("Failed to load error forms: {}", path.display()))?;
        }
        let ctx = builder
            .build()
            .map_err(|e| CliError::Config { message: e.to_string() })?;
        Ok(Arc::new(ctx))
    }
}
