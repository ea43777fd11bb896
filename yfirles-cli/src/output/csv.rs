//! CSV output: one line per token
//!
//! Format: `kind,"corrected_text","original_text_if_different"`. The third
//! column is empty when no correction touched the token. Each sentence is
//! closed by the separator line `0,"",""`. Quotes inside token text are
//! doubled per CSV convention.

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use yfirles_core::Sentence;

/// Token-per-line CSV with numeric kind codes
pub struct CsvFormatter<W: Write> {
    writer: W,
}

impl<W: Write> CsvFormatter<W> {
    /// Create a formatter writing to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn escape(text: &str) -> String {
    text.replace('"', "\"\"")
}

impl<W: Write + Send> OutputFormatter for CsvFormatter<W> {
    fn sentence(&mut self, sentence: &Sentence) -> Result<()> {
        for token in sentence.tokens() {
            if token.kind.is_marker() {
                continue;
            }
            let original = if token.is_rewritten() {
                escape(token.original())
            } else {
                String::new()
            };
            writeln!(
                self.writer,
                "{},\"{}\",\"{}\"",
                token.kind.code(),
                escape(token.corrected()),
                original
            )?;
        }
        writeln!(self.writer, "0,\"\",\"\"")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
