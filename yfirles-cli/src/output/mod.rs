//! Output formatting module
//!
//! One formatter per wire format. Formatters receive sentences one at a
//! time as the pipeline emits them, so output streams with the input.

use anyhow::Result;
use yfirles_core::Sentence;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output a single sentence
    fn sentence(&mut self, sentence: &Sentence) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

pub mod csv;
pub mod grammar;
pub mod json;
pub mod text;

pub use csv::CsvFormatter;
pub use grammar::GrammarFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
