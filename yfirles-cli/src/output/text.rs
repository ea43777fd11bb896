//! Plain text output: one corrected sentence per line

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use yfirles_core::Sentence;

/// One corrected sentence per line, tokens space-joined
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a formatter writing to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn sentence(&mut self, sentence: &Sentence) -> Result<()> {
        writeln!(self.writer, "{}", sentence.corrected())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yfirles_core::Corrector;

    #[test]
    fn test_one_line_per_sentence() {
        let corrector = Corrector::new().unwrap();
        let mut out = Vec::new();
        {
            let mut fmt = TextFormatter::new(&mut out);
            for s in corrector
                .correct("Barnið vil grænann lit. Slysið átti sér stað.")
                .unwrap()
            {
                fmt.sentence(&s).unwrap();
            }
            fmt.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Barnið vil grænan lit .\nSlysið átti sér stað .\n"
        );
    }
}
