//! Token-per-line JSON output
//!
//! Each token is one JSON object per line with the keys `k` (kind name) and
//! `t` (corrected text). Sentence boundaries appear as `{"k":"BEGIN SENT"}`
//! and `{"k":"END SENT"}` with no `t` key.

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use yfirles_core::Sentence;

#[derive(Serialize)]
struct TokenLine<'a> {
    k: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    t: Option<&'a str>,
}

/// One JSON object per token per line
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a formatter writing to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn sentence(&mut self, sentence: &Sentence) -> Result<()> {
        for token in sentence.tokens() {
            let line = TokenLine {
                k: token.kind.descr(),
                t: (!token.kind.is_marker()).then(|| token.corrected()),
            };
            serde_json::to_writer(&mut self.writer, &line)?;
            writeln!(self.writer)?;
        }
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

    fn render(text: &str) -> String {
        let corrector = Corrector::new().unwrap();
        let mut out = Vec::new();
        {
            let mut fmt = JsonFormatter::new(&mut out);
            for s in corrector.correct(text).unwrap() {
                fmt.sentence(&s).unwrap();
            }
            fmt.finish().unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_token_objects_and_boundaries() {
        let got = render("Barnið vil grænann lit.");
        let lines: Vec<&str> = got.lines().collect();
        assert_eq!(lines.first(), Some(&r#"{"k":"BEGIN SENT"}"#));
        assert_eq!(lines.last(), Some(&r#"{"k":"END SENT"}"#));
        assert!(lines.contains(&r#"{"k":"WORD","t":"grænan"}"#));
        assert!(lines.contains(&r#"{"k":"PUNCTUATION","t":"."}"#));
    }

    #[test]
    fn test_every_line_is_valid_json() {
        let got = render("jókst um 3,5 stig í gærkvöldi");
        for line in got.lines() {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(v.get("k").is_some());
        }
    }
}
