//! Punctuation normalization, the `final-correct` phase
//!
//! Token rewrites without annotations: ASCII ellipsis becomes `…`, and
//! straight or comma-style quotes become the Icelandic `„`/`“` pair.
//! After this phase tokens are immutable.

use crate::pipeline::{StreamPhase, TokenStream};
use crate::token::{Token, TokenKind};

/// Stream phase registered as `final-correct`
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizePhase;

impl NormalizePhase {
    /// Create the phase
    pub fn new() -> Self {
        Self
    }
}

impl StreamPhase for NormalizePhase {
    fn apply<'a>(&'a self, input: TokenStream<'a>) -> TokenStream<'a> {
        Box::new(NormalizeIter {
            input,
            quote_open: false,
        })
    }
}

struct NormalizeIter<'a> {
    input: TokenStream<'a>,
    quote_open: bool,
}

impl<'a> Iterator for NormalizeIter<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut t = self.input.next()?;
        if t.kind == TokenKind::Punctuation {
            let replacement = match t.corrected() {
                s if s.len() >= 3 && s.bytes().all(|b| b == b'.') => Some("…"),
                ",," => {
                    self.quote_open = true;
                    Some("„")
                }
                "\"" => {
                    if self.quote_open {
                        self.quote_open = false;
                        Some("“")
                    } else {
                        self.quote_open = true;
                        Some("„")
                    }
                }
                _ => None,
            };
            if let Some(text) = replacement {
                t.rewrite(text);
            }
        }
        if t.kind == TokenKind::SentenceEnd {
            // Quotes do not pair across sentence boundaries
            self.quote_open = false;
        }
        Some(t)
    }
}
