//! Token data model
//!
//! A [`Token`] is the smallest unit produced by tokenization. It carries the
//! original source text together with its character offsets, a possibly
//! rewritten corrected text, the morphological tags attached by the tagging
//! phase, and at most one [`TokenError`] describing a detected issue. The
//! first error set on a token wins; later checkers see the token as already
//! handled.

use smallvec::SmallVec;

/// Token category with stable numeric codes for the CSV and grammar formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Punctuation run
    Punctuation,
    /// Number (digits, optional decimal part)
    Number,
    /// Word
    Word,
    /// Anything else (e.g. a preserved `<tag>` marker)
    Other,
    /// Sentence-begin marker, zero width
    SentenceBegin,
    /// Sentence-end marker, zero width
    SentenceEnd,
}

impl TokenKind {
    /// Numeric code used on the wire
    pub fn code(self) -> u32 {
        match self {
            TokenKind::Punctuation => 1,
            TokenKind::Number => 5,
            TokenKind::Word => 6,
            TokenKind::Other => 13,
            TokenKind::SentenceBegin => 11001,
            TokenKind::SentenceEnd => 11002,
        }
    }

    /// Human-readable kind name used in the token-per-line JSON format
    pub fn descr(self) -> &'static str {
        match self {
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Number => "NUMBER",
            TokenKind::Word => "WORD",
            TokenKind::Other => "OTHER",
            TokenKind::SentenceBegin => "BEGIN SENT",
            TokenKind::SentenceEnd => "END SENT",
        }
    }

    /// True for the zero-width sentence boundary markers
    pub fn is_marker(self) -> bool {
        matches!(self, TokenKind::SentenceBegin | TokenKind::SentenceEnd)
    }
}

/// An issue attached to a single token by a correction phase
///
/// Mirrors the error taxonomy of the correction engine: `C` codes for
/// compound/duplication errors, `S` for spelling, `U` for unknown words.
/// Grammar (`P`) annotations are produced at sentence level instead and
/// never ride on tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenError {
    code: String,
    description: String,
    detail: Option<String>,
    span: usize,
    suggestion: Option<String>,
}

impl TokenError {
    /// Compound or duplication error (`C` prefix)
    pub fn compound(num: &str, description: String) -> Self {
        Self {
            code: format!("C{num}"),
            description,
            detail: None,
            span: 1,
            suggestion: None,
        }
    }

    /// Spelling error (`S` prefix) with the accepted replacement
    pub fn spelling(num: &str, description: String, suggestion: String) -> Self {
        Self {
            code: format!("S{num}"),
            description,
            detail: None,
            span: 1,
            suggestion: Some(suggestion),
        }
    }

    /// Unknown word (`U` prefix); flagged, never rewritten
    pub fn unknown(description: String) -> Self {
        Self {
            code: "U001".to_string(),
            description,
            detail: None,
            span: 1,
            suggestion: None,
        }
    }

    /// Widen the error to cover `span` consecutive tokens starting at its own
    pub fn spanning(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Attach an extended explanation
    pub fn with_detail(mut self, detail: String) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Error code, e.g. `C001` or `S002`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Optional extended explanation
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Number of consecutive tokens covered, at least 1
    pub fn span(&self) -> usize {
        self.span
    }

    /// Replacement text, when a confident fix exists
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }
}

/// One lexical token with original and corrected surface forms
///
/// Character offsets always refer to the original source; rewriting the
/// corrected text never moves them.
#[derive(Debug, Clone)]
pub struct Token {
    /// Token category
    pub kind: TokenKind,
    /// Morphological tags attached by the tagging phase
    pub tags: SmallVec<[String; 2]>,
    original: String,
    corrected: String,
    start: usize,
    end: usize,
    byte_start: usize,
    byte_end: usize,
    error: Option<TokenError>,
}

impl Token {
    /// Create a token from a source slice
    ///
    /// `start`/`end` are character offsets, `byte_start`/`byte_end` the
    /// matching byte offsets into the same source.
    pub fn new(
        kind: TokenKind,
        text: &str,
        start: usize,
        end: usize,
        byte_start: usize,
        byte_end: usize,
    ) -> Self {
        Self {
            kind,
            tags: SmallVec::new(),
            original: text.to_string(),
            corrected: text.to_string(),
            start,
            end,
            byte_start,
            byte_end,
            error: None,
        }
    }

    /// Create a zero-width sentence boundary marker at the given position
    pub fn marker(kind: TokenKind, char_pos: usize, byte_pos: usize) -> Self {
        debug_assert!(kind.is_marker());
        Self::new(kind, "", char_pos, char_pos, byte_pos, byte_pos)
    }

    /// Merge two adjacent tokens into one word token spanning both
    ///
    /// Used when uniting wrongly split compounds. The original text keeps
    /// the source gap as a single space.
    pub fn merged(first: &Token, second: &Token) -> Self {
        Self {
            kind: TokenKind::Word,
            tags: SmallVec::new(),
            original: format!("{} {}", first.original, second.original),
            corrected: format!("{}{}", first.corrected, second.corrected),
            start: first.start,
            end: second.end,
            byte_start: first.byte_start,
            byte_end: second.byte_end,
            error: None,
        }
    }

    /// The verbatim source text of this token
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The current corrected text; equals `original` until a phase rewrites it
    pub fn corrected(&self) -> &str {
        &self.corrected
    }

    /// True when a correction phase has rewritten this token
    pub fn is_rewritten(&self) -> bool {
        self.original != self.corrected
    }

    /// Character offset of the first character (inclusive)
    pub fn start(&self) -> usize {
        self.start
    }

    /// Character offset past the last character (exclusive)
    pub fn end(&self) -> usize {
        self.end
    }

    /// Byte offset of the first byte (inclusive)
    pub fn byte_start(&self) -> usize {
        self.byte_start
    }

    /// Byte offset past the last byte (exclusive)
    pub fn byte_end(&self) -> usize {
        self.byte_end
    }

    /// Rewrite the corrected text; offsets are untouched
    pub fn rewrite(&mut self, text: impl Into<String>) {
        self.corrected = text.into();
    }

    /// Attach an error unless one is already present (first error wins)
    ///
    /// Returns true when the error was attached.
    pub fn set_error(&mut self, err: TokenError) -> bool {
        if self.error.is_some() {
            return false;
        }
        self.error = Some(err);
        true
    }

    /// Carry over the error from another token, if any and if still unset
    pub fn copy_error(&mut self, other: &Token) -> bool {
        match &other.error {
            Some(err) if self.error.is_none() => {
                self.error = Some(err.clone());
                true
            }
            _ => false,
        }
    }

    /// The error attached to this token, if any
    pub fn error(&self) -> Option<&TokenError> {
        self.error.as_ref()
    }

    /// True for word tokens
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}
