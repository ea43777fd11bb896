//! Default source phase: raw text to tokens
//!
//! The real tokenizer of a full deployment is an external collaborator;
//! this one covers words, numbers and punctuation well enough to drive the
//! pipeline, and exists mainly so the crate works out of the box. It is
//! registered under the name `tokenize` and is the canonical override
//! point: replace it to change how raw text is split.
//!
//! Boundary rules: `.` `!` `?` terminate a sentence, a blank line is an
//! explicit sentence boundary, and the zero-width begin/end markers are
//! emitted around every sentence. Character and byte offsets both refer to
//! the original source and never change downstream.

use crate::pipeline::{SourcePhase, TokenStream};
use crate::token::{Token, TokenKind};
use std::collections::VecDeque;
use std::iter::Peekable;
use std::str::CharIndices;

/// Whitespace/punctuation tokenizer with sentence boundary detection
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Keep bracket-delimited markers such as `<tag>` as single tokens
    /// instead of splitting them into `<`, `tag`, `>`
    pub keep_angle_tags: bool,
}

impl Tokenizer {
    /// Tokenizer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizer that preserves `<tag>` markers as single tokens
    pub fn preserving_angle_tags() -> Self {
        Self {
            keep_angle_tags: true,
        }
    }
}

impl SourcePhase for Tokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        Box::new(TokenIter {
            text,
            chars: text.char_indices().peekable(),
            char_pos: 0,
            in_sentence: false,
            keep_angle_tags: self.keep_angle_tags,
            pending: VecDeque::new(),
            last_char_end: 0,
            last_byte_end: 0,
            done: false,
        })
    }
}

struct TokenIter<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
    char_pos: usize,
    in_sentence: bool,
    keep_angle_tags: bool,
    pending: VecDeque<Token>,
    last_char_end: usize,
    last_byte_end: usize,
    done: bool,
}

impl<'a> TokenIter<'a> {
    fn bump(&mut self) -> Option<(usize, char)> {
        let next = self.chars.next();
        if next.is_some() {
            self.char_pos += 1;
        }
        next
    }

    fn current_byte(&mut self) -> usize {
        self.chars
            .peek()
            .map(|&(b, _)| b)
            .unwrap_or(self.text.len())
    }

    fn close_sentence(&mut self) {
        self.pending.push_back(Token::marker(
            TokenKind::SentenceEnd,
            self.last_char_end,
            self.last_byte_end,
        ));
        self.in_sentence = false;
    }

    /// Length in chars of a `<tag>` marker starting here, if one starts here
    fn angle_tag_len(&self, byte_start: usize) -> Option<usize> {
        let mut chars = self.text[byte_start..].chars();
        if chars.next() != Some('<') {
            return None;
        }
        let mut len = 1;
        for c in chars {
            if c == '>' {
                return (len > 1).then_some(len + 1);
            }
            if !c.is_alphanumeric() {
                return None;
            }
            len += 1;
        }
        None
    }

    fn scan_token(&mut self, byte_start: usize, first: char) -> Token {
        let char_start = self.char_pos;
        let kind;
        if first.is_alphabetic() {
            kind = TokenKind::Word;
            while matches!(self.chars.peek(), Some(&(_, c)) if c.is_alphabetic()) {
                self.bump();
            }
        } else if first.is_ascii_digit() {
            kind = TokenKind::Number;
            while matches!(self.chars.peek(), Some(&(_, c)) if c.is_ascii_digit()) {
                self.bump();
            }
            // One decimal separator, only when digits follow it
            let rest = &self.text[self.current_byte()..];
            let mut lookahead = rest.chars();
            if matches!(lookahead.next(), Some('.' | ','))
                && matches!(lookahead.next(), Some(c) if c.is_ascii_digit())
            {
                self.bump();
                while matches!(self.chars.peek(), Some(&(_, c)) if c.is_ascii_digit()) {
                    self.bump();
                }
            }
        } else if first == '<' && self.keep_angle_tags && self.angle_tag_len(byte_start).is_some() {
            kind = TokenKind::Other;
            let len = self.angle_tag_len(byte_start).unwrap_or(1);
            for _ in 0..len {
                self.bump();
            }
        } else {
            kind = TokenKind::Punctuation;
            self.bump();
            if matches!(first, '.' | ',') {
                // Group runs: "..." and ",," arrive as single tokens
                while matches!(self.chars.peek(), Some(&(_, c)) if c == first) {
                    self.bump();
                }
            }
        }
        let byte_end = self.current_byte();
        Token::new(
            kind,
            &self.text[byte_start..byte_end],
            char_start,
            self.char_pos,
            byte_start,
            byte_end,
        )
    }
}

impl<'a> Iterator for TokenIter<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(t) = self.pending.pop_front() {
                return Some(t);
            }
            if self.done {
                return None;
            }

            let mut newlines = 0;
            while let Some(&(_, c)) = self.chars.peek() {
                if !c.is_whitespace() {
                    break;
                }
                if c == '\n' {
                    newlines += 1;
                }
                self.bump();
            }
            // A blank line is an explicit sentence boundary
            if newlines >= 2 && self.in_sentence {
                self.close_sentence();
                continue;
            }

            let Some(&(byte_start, first)) = self.chars.peek() else {
                self.done = true;
                if self.in_sentence {
                    self.close_sentence();
                }
                continue;
            };

            if first == '\u{feff}' {
                // Stray BOM; skip it
                self.bump();
                continue;
            }

            let tok = self.scan_token(byte_start, first);
            if !self.in_sentence {
                self.pending.push_back(Token::marker(
                    TokenKind::SentenceBegin,
                    tok.start(),
                    tok.byte_start(),
                ));
                self.in_sentence = true;
            }
            let terminal = tok.kind == TokenKind::Punctuation
                && matches!(tok.original().chars().next(), Some('.' | '!' | '?'));
            self.last_char_end = tok.end();
            self.last_byte_end = tok.byte_end();
            self.pending.push_back(tok);
            if terminal {
                self.close_sentence();
            }
        }
    }
}
