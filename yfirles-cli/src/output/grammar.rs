//! Grammar mode: one JSON object per sentence
//!
//! Each line carries the whole sentence: `original`, `corrected`, the token
//! list (each `{"k":kind_code,"x":corrected,"o":original}`) and the
//! annotation list. Annotation token indices refer to positions in the
//! `tokens` array, boundary markers included.

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use yfirles_core::{Annotation, Sentence};

#[derive(Serialize)]
struct TokenRecord<'a> {
    k: u32,
    x: &'a str,
    o: &'a str,
}

#[derive(Serialize)]
struct SentenceRecord<'a> {
    original: &'a str,
    corrected: &'a str,
    tokens: Vec<TokenRecord<'a>>,
    annotations: &'a [Annotation],
}

/// One JSON object per sentence per line
pub struct GrammarFormatter<W: Write> {
    writer: W,
}

impl<W: Write> GrammarFormatter<W> {
    /// Create a formatter writing to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> OutputFormatter for GrammarFormatter<W> {
    fn sentence(&mut self, sentence: &Sentence) -> Result<()> {
        let record = SentenceRecord {
            original: sentence.original(),
            corrected: sentence.corrected(),
            tokens: sentence
                .tokens()
                .iter()
                .map(|t| TokenRecord {
                    k: t.kind.code(),
                    x: t.corrected(),
                    o: t.original(),
                })
                .collect(),
            annotations: sentence.annotations(),
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
