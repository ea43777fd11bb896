//! Sentence assembly
//!
//! Consumes the final token stream, buffers tokens up to each sentence-end
//! marker, converts token-level errors into annotations, runs the sentence
//! phases, and yields one [`Sentence`] at a time. Assembly is as lazy as the
//! phases feeding it: nothing is buffered beyond the sentence currently
//! being built.

use crate::annotation::Annotation;
use crate::pipeline::{SentencePhase, TokenStream};
use crate::token::{Token, TokenKind};

/// One fully processed sentence
#[derive(Debug, Clone)]
pub struct Sentence {
    tokens: Vec<Token>,
    annotations: Vec<Annotation>,
    original: String,
    corrected: String,
}

impl Sentence {
    /// All tokens, boundary markers included
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Annotations sorted by `(start, end)`; overlaps are preserved
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// The verbatim source slice this sentence covers
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The corrected text, content tokens joined by single spaces
    pub fn corrected(&self) -> &str {
        &self.corrected
    }

    /// True when no phase found anything to report
    pub fn is_clean(&self) -> bool {
        self.annotations.is_empty()
    }
}

/// Lazy sentence iterator returned by [`Pipeline::run`](crate::Pipeline::run)
pub struct Sentences<'a> {
    source: &'a str,
    stream: TokenStream<'a>,
    phases: Vec<&'a dyn SentencePhase>,
    exhausted: bool,
}

impl<'a> Sentences<'a> {
    pub(crate) fn new(
        source: &'a str,
        stream: TokenStream<'a>,
        phases: Vec<&'a dyn SentencePhase>,
    ) -> Self {
        Self {
            source,
            stream,
            phases,
            exhausted: false,
        }
    }

    fn assemble(&mut self, mut tokens: Vec<Token>) -> Sentence {
        // A custom source phase may omit the boundary markers; synthesize
        // them so downstream consumers always see a framed sentence
        if tokens.first().map(|t| t.kind) != Some(TokenKind::SentenceBegin) {
            let (cp, bp) = tokens
                .first()
                .map(|t| (t.start(), t.byte_start()))
                .unwrap_or((0, 0));
            tokens.insert(0, Token::marker(TokenKind::SentenceBegin, cp, bp));
        }
        if tokens.last().map(|t| t.kind) != Some(TokenKind::SentenceEnd) {
            let (cp, bp) = tokens
                .last()
                .map(|t| (t.end(), t.byte_end()))
                .unwrap_or((0, 0));
            tokens.push(Token::marker(TokenKind::SentenceEnd, cp, bp));
        }

        let mut annotations: Vec<Annotation> = Vec::new();
        for (ix, t) in tokens.iter().enumerate() {
            if let Some(err) = t.error() {
                let end = (ix + err.span() - 1).min(tokens.len() - 1);
                annotations.push(Annotation {
                    start: ix,
                    end,
                    start_char: t.start(),
                    end_char: tokens[end].end(),
                    code: err.code().to_string(),
                    text: err.description().to_string(),
                    detail: err.detail().unwrap_or("").to_string(),
                    suggest: err.suggestion().map(str::to_string),
                });
            }
        }
        for phase in &self.phases {
            phase.inspect(&tokens, &mut annotations);
        }

        // Character offsets arrive absolute; rebase them to the sentence
        let base = tokens[0].start();
        for a in &mut annotations {
            a.start_char = a.start_char.saturating_sub(base);
            a.end_char = a.end_char.saturating_sub(base);
        }
        annotations.sort_by_key(|a| a.sort_key());

        let content: Vec<&Token> = tokens.iter().filter(|t| !t.kind.is_marker()).collect();
        let corrected = content
            .iter()
            .map(|t| t.corrected())
            .collect::<Vec<_>>()
            .join(" ");
        let original = match (content.first(), content.last()) {
            (Some(first), Some(last)) => self
                .source
                .get(first.byte_start()..last.byte_end())
                .unwrap_or("")
                .to_string(),
            _ => String::new(),
        };

        Sentence {
            tokens,
            annotations,
            original,
            corrected,
        }
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Sentence;

    fn next(&mut self) -> Option<Sentence> {
        if self.exhausted {
            return None;
        }
        let mut buffer: Vec<Token> = Vec::new();
        loop {
            match self.stream.next() {
                Some(t) if t.kind == TokenKind::SentenceEnd => {
                    let has_content = buffer.iter().any(|b| !b.kind.is_marker());
                    buffer.push(t);
                    if has_content {
                        return Some(self.assemble(buffer));
                    }
                    // Degenerate frame without content; drop and carry on
                    buffer.clear();
                }
                Some(t) => buffer.push(t),
                None => {
                    self.exhausted = true;
                    if buffer.iter().any(|b| !b.kind.is_marker()) {
                        // Input ended mid-sentence; emit what we have
                        return Some(self.assemble(buffer));
                    }
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::AnnotationSink;
    use crate::pipeline::SourcePhase;
    use crate::token::TokenError;
    use crate::tokenizer::Tokenizer;

    fn sentences(text: &str) -> Vec<Sentence> {
        let tokenizer = Tokenizer::new();
        Sentences::new(text, tokenizer.tokenize(text), Vec::new()).collect()
    }

    #[test]
    fn test_two_sentences_split() {
        let sents = sentences("Barnið vill lit. Slysið átti sér stað.");
        assert_eq!(sents.len(), 2);
        assert_eq!(sents[0].corrected(), "Barnið vill lit .");
        assert_eq!(sents[1].original(), "Slysið átti sér stað.");
    }

    #[test]
    fn test_unterminated_tail_emitted() {
        let sents = sentences("Fyrsta setning. önnur án punkts");
        assert_eq!(sents.len(), 2);
        assert_eq!(sents[1].corrected(), "önnur án punkts");
        assert_eq!(
            sents[1].tokens().last().unwrap().kind,
            TokenKind::SentenceEnd
        );
    }

    #[test]
    fn test_markers_frame_every_sentence() {
        for s in sentences("Ein. Tvær! Þrjár?") {
            assert_eq!(s.tokens().first().unwrap().kind, TokenKind::SentenceBegin);
            assert_eq!(s.tokens().last().unwrap().kind, TokenKind::SentenceEnd);
        }
    }

    #[test]
    fn test_token_error_becomes_annotation() {
        let text = "Barnið vil grænann lit.";
        let tokenizer = Tokenizer::new();
        let stream: TokenStream = Box::new(tokenizer.tokenize(text).map(|mut t| {
            if t.original() == "grænann" {
                t.rewrite("grænan");
                t.set_error(TokenError::spelling(
                    "003",
                    "leiðrétt".into(),
                    "grænan".into(),
                ));
            }
            t
        }));
        let sents: Vec<Sentence> = Sentences::new(text, stream, Vec::new()).collect();
        assert_eq!(sents.len(), 1);
        let anns = sents[0].annotations();
        assert_eq!(anns.len(), 1);
        // "grænann" is the third content token; marker at index 0
        assert_eq!(anns[0].start, 3);
        assert_eq!(anns[0].end, 3);
        assert_eq!(anns[0].code, "S003");
        assert_eq!(anns[0].suggest.as_deref(), Some("grænan"));
    }

    #[test]
    fn test_char_offsets_are_sentence_relative() {
        let text = "Fyrsta setning er löng. Vitlaust orð hér.";
        let tokenizer = Tokenizer::new();
        let stream: TokenStream = Box::new(tokenizer.tokenize(text).map(|mut t| {
            if t.original() == "Vitlaust" {
                t.set_error(TokenError::unknown("óþekkt".into()));
            }
            t
        }));
        let sents: Vec<Sentence> = Sentences::new(text, stream, Vec::new()).collect();
        let a = &sents[1].annotations()[0];
        assert_eq!(a.start_char, 0);
        assert_eq!(a.end_char, "Vitlaust".chars().count());
    }

    struct FixedFinding;
    impl SentencePhase for FixedFinding {
        fn inspect(&self, tokens: &[Token], sink: &mut dyn AnnotationSink) {
            sink.push_annotation(Annotation {
                start: 1,
                end: 1,
                start_char: tokens[1].start(),
                end_char: tokens[1].end(),
                code: "P_TEST".into(),
                text: "prófun".into(),
                detail: "prófun".into(),
                suggest: None,
            });
        }
    }

    #[test]
    fn test_annotations_sorted_by_span() {
        let text = "orð orð orð.";
        let tokenizer = Tokenizer::new();
        let stream: TokenStream = Box::new(tokenizer.tokenize(text).enumerate().map(|(i, mut t)| {
            if i == 3 {
                t.set_error(TokenError::unknown("óþekkt".into()));
            }
            t
        }));
        let phases: Vec<&dyn SentencePhase> = vec![&FixedFinding];
        let sents: Vec<Sentence> = Sentences::new(text, stream, phases).collect();
        let codes: Vec<&str> = sents[0].annotations().iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes, vec!["P_TEST", "U001"]);
    }
}
