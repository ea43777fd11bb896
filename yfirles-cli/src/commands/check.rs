//! Check command implementation

use crate::config::CliConfig;
use crate::input::{resolve_inputs, InputSource};
use crate::output::{CsvFormatter, GrammarFormatter, JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};
use yfirles_core::Corrector;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input files or glob patterns; '-' reads standard input
    #[arg(value_name = "FILE/PATTERN", default_value = "-")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file with supplementary word lists
    #[arg(short, long, value_name = "FILE", env = "YFIRLES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One corrected sentence per line
    Text,
    /// One token per line with numeric kind codes
    Csv,
    /// One JSON object per token per line
    Json,
    /// One JSON object per sentence with all annotations
    Grammar,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting correction run");
        log::debug!("Arguments: {:?}", self);

        let corrector = match &self.config {
            Some(path) => {
                let config = CliConfig::load(path)?;
                let base_dir = path.parent().unwrap_or(Path::new("."));
                let ctx = config.build_context(base_dir)?;
                Corrector::with_context(ctx)?
            }
            None => Corrector::new()?,
        };

        let sources = resolve_inputs(&self.input)?;
        log::info!("Processing {} input source(s)", sources.len());

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(std::fs::File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(std::io::stdout()),
        };
        let mut formatter = self.formatter(writer);

        for source in &sources {
            self.process_source(source, &corrector, formatter.as_mut())?;
        }
        formatter.finish()?;
        Ok(())
    }

    fn process_source(
        &self,
        source: &InputSource,
        corrector: &Corrector,
        formatter: &mut dyn OutputFormatter,
    ) -> Result<()> {
        log::debug!("Reading {}", source.display());
        let text = source.read_text()?;
        let mut sentences = 0usize;
        for sentence in corrector
            .correct(&text)
            .with_context(|| format!("Failed to process {}", source.display()))?
        {
            formatter.sentence(&sentence)?;
            sentences += 1;
        }
        log::info!("{}: {} sentence(s)", source.display(), sentences);
        Ok(())
    }

    fn formatter(&self, writer: Box<dyn Write + Send>) -> Box<dyn OutputFormatter> {
        match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Csv => Box::new(CsvFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Grammar => Box::new(GrammarFormatter::new(writer)),
        }
    }

    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .format_timestamp(None)
            .try_init();
        }
    }
}
