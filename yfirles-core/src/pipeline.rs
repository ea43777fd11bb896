//! Named-phase pipeline with an override/insertion protocol
//!
//! A pipeline is an ordered sequence of named phases. The first phase is the
//! source phase (raw text to tokens); it is followed by stream phases
//! (tokens to tokens) and sentence phases (run over each assembled sentence
//! with an annotation sink). A derived pipeline replaces or splices phases
//! by name without touching the rest, so a consumer can change one step of
//! the chain without re-specifying it. Referencing a name that does not
//! exist is a configuration error, caught at derivation time.

use crate::annotation::AnnotationSink;
use crate::assembler::Sentences;
use crate::error::{CoreError, Result};
use crate::token::Token;
use std::sync::Arc;

/// A lazy, forward-only token sequence flowing between phases
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + 'a>;

/// First phase of a pipeline: splits raw text into a token stream
pub trait SourcePhase: Send + Sync {
    /// Produce the token stream for `text`
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a>;
}

/// A tokens-to-tokens transformation
///
/// A phase may merge or split tokens, but relative source-character order
/// is preserved; each phase sees only the output of its predecessor.
pub trait StreamPhase: Send + Sync {
    /// Wrap the input stream; implementations stay lazy
    fn apply<'a>(&'a self, input: TokenStream<'a>) -> TokenStream<'a>;
}

/// A per-sentence inspection run after assembly
///
/// `tokens` is the full assembled buffer, boundary markers included.
/// Character offsets in emitted annotations are absolute into the source;
/// the assembler rebases them to sentence-relative offsets on emission.
pub trait SentencePhase: Send + Sync {
    /// Inspect one sentence and push findings to the sink
    fn inspect(&self, tokens: &[Token], sink: &mut dyn AnnotationSink);
}

/// A phase of any kind, ready for registration
#[derive(Clone)]
pub enum PhaseImpl {
    /// Text-to-tokens phase
    Source(Arc<dyn SourcePhase>),
    /// Tokens-to-tokens phase
    Stream(Arc<dyn StreamPhase>),
    /// Per-sentence phase
    Sentence(Arc<dyn SentencePhase>),
}

impl PhaseImpl {
    /// Wrap a source phase
    pub fn source(phase: impl SourcePhase + 'static) -> Self {
        PhaseImpl::Source(Arc::new(phase))
    }

    /// Wrap a stream phase
    pub fn stream(phase: impl StreamPhase + 'static) -> Self {
        PhaseImpl::Stream(Arc::new(phase))
    }

    /// Wrap a sentence phase
    pub fn sentence(phase: impl SentencePhase + 'static) -> Self {
        PhaseImpl::Sentence(Arc::new(phase))
    }

    fn same_kind(&self, other: &PhaseImpl) -> bool {
        matches!(
            (self, other),
            (PhaseImpl::Source(_), PhaseImpl::Source(_))
                | (PhaseImpl::Stream(_), PhaseImpl::Stream(_))
                | (PhaseImpl::Sentence(_), PhaseImpl::Sentence(_))
        )
    }
}

#[derive(Clone)]
struct PhaseEntry {
    name: String,
    imp: PhaseImpl,
}

/// Ordered, named sequence of phases
///
/// Cheap to clone and derive: phases are shared behind `Arc`. `run` holds no
/// state between calls; a new call reprocesses from scratch.
#[derive(Clone, Default)]
pub struct Pipeline {
    entries: Vec<PhaseEntry>,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a phase under a unique name
    ///
    /// A source phase must come first; only one source is allowed.
    pub fn push(mut self, name: &str, imp: PhaseImpl) -> Result<Self> {
        if self.entries.iter().any(|e| e.name == name) {
            return Err(CoreError::DuplicatePhase {
                name: name.to_string(),
            });
        }
        match &imp {
            PhaseImpl::Source(_) if !self.entries.is_empty() => {
                return Err(CoreError::SourceNotFirst)
            }
            _ => {}
        }
        self.entries.push(PhaseEntry {
            name: name.to_string(),
            imp,
        });
        Ok(self)
    }

    /// Names of the registered phases, in order
    pub fn phase_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| CoreError::UnknownPhase {
                name: name.to_string(),
            })
    }

    /// Derive a pipeline with the phase registered under `name` replaced
    ///
    /// Fails when `name` is unknown or the replacement is of a different
    /// phase kind; this catches drift when the base pipeline's names change.
    pub fn override_with(&self, name: &str, imp: PhaseImpl) -> Result<Pipeline> {
        let ix = self.position(name)?;
        if !self.entries[ix].imp.same_kind(&imp) {
            return Err(CoreError::PhaseKindMismatch {
                name: name.to_string(),
            });
        }
        let mut derived = self.clone();
        derived.entries[ix].imp = imp;
        Ok(derived)
    }

    /// Derive a pipeline with a new phase spliced in before `name`
    pub fn insert_before(&self, name: &str, new_name: &str, imp: PhaseImpl) -> Result<Pipeline> {
        let ix = self.position(name)?;
        self.insert_at(ix, new_name, imp)
    }

    /// Derive a pipeline with a new phase spliced in after `name`
    pub fn insert_after(&self, name: &str, new_name: &str, imp: PhaseImpl) -> Result<Pipeline> {
        let ix = self.position(name)?;
        self.insert_at(ix + 1, new_name, imp)
    }

    fn insert_at(&self, ix: usize, new_name: &str, imp: PhaseImpl) -> Result<Pipeline> {
        if self.entries.iter().any(|e| e.name == new_name) {
            return Err(CoreError::DuplicatePhase {
                name: new_name.to_string(),
            });
        }
        if matches!(imp, PhaseImpl::Source(_)) {
            // The source slot is fixed; replacing it goes through override_with.
            return Err(CoreError::SourceNotFirst);
        }
        if ix == 0 {
            return Err(CoreError::SourceNotFirst);
        }
        let mut derived = self.clone();
        derived.entries.insert(
            ix,
            PhaseEntry {
                name: new_name.to_string(),
                imp,
            },
        );
        Ok(derived)
    }

    /// Drive all phases over `text`, producing sentences lazily
    ///
    /// No sentence is computed until the consumer pulls it; dropping the
    /// iterator cancels processing with nothing to tear down.
    pub fn run<'a>(&'a self, text: &'a str) -> Result<Sentences<'a>> {
        let mut entries = self.entries.iter();
        let mut stream: TokenStream<'a> = match entries.next() {
            Some(PhaseEntry {
                imp: PhaseImpl::Source(src),
                ..
            }) => src.tokenize(text),
            _ => return Err(CoreError::MissingSource),
        };
        let mut sentence_phases: Vec<&'a dyn SentencePhase> = Vec::new();
        for entry in entries {
            match &entry.imp {
                PhaseImpl::Source(_) => unreachable!("push enforces a single leading source"),
                PhaseImpl::Stream(p) => stream = p.apply(stream),
                PhaseImpl::Sentence(p) => sentence_phases.push(p.as_ref()),
            }
        }
        Ok(Sentences::new(text, stream, sentence_phases))
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| &e.name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    struct NullSource;
    impl SourcePhase for NullSource {
        fn tokenize<'a>(&'a self, _text: &'a str) -> TokenStream<'a> {
            Box::new(std::iter::empty())
        }
    }

    struct Upper;
    impl StreamPhase for Upper {
        fn apply<'a>(&'a self, input: TokenStream<'a>) -> TokenStream<'a> {
            Box::new(input.map(|mut t| {
                if t.kind == TokenKind::Word {
                    let up = t.corrected().to_uppercase();
                    t.rewrite(up);
                }
                t
            }))
        }
    }

    fn base() -> Pipeline {
        Pipeline::new()
            .push("tokenize", PhaseImpl::source(NullSource))
            .unwrap()
            .push("upper", PhaseImpl::stream(Upper))
            .unwrap()
    }

    #[test]
    fn test_phase_names_in_order() {
        let pipeline = base();
        let names: Vec<_> = pipeline.phase_names().collect();
        assert_eq!(names, vec!["tokenize", "upper"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = base().push("upper", PhaseImpl::stream(Upper)).unwrap_err();
        assert!(matches!(err, CoreError::DuplicatePhase { .. }));
    }

    #[test]
    fn test_override_unknown_name_fails() {
        let err = base()
            .override_with("no-such-phase", PhaseImpl::stream(Upper))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownPhase { name } if name == "no-such-phase"
        ));
    }

    #[test]
    fn test_override_kind_mismatch_fails() {
        let err = base()
            .override_with("tokenize", PhaseImpl::stream(Upper))
            .unwrap_err();
        assert!(matches!(err, CoreError::PhaseKindMismatch { .. }));
    }

    #[test]
    fn test_override_preserves_order() {
        let derived = base()
            .override_with("upper", PhaseImpl::stream(Upper))
            .unwrap();
        let names: Vec<_> = derived.phase_names().collect();
        assert_eq!(names, vec!["tokenize", "upper"]);
    }

    #[test]
    fn test_insert_before_source_rejected() {
        let err = base()
            .insert_before("tokenize", "pre", PhaseImpl::stream(Upper))
            .unwrap_err();
        assert!(matches!(err, CoreError::SourceNotFirst));
    }

    #[test]
    fn test_insert_after() {
        let derived = base()
            .insert_after("tokenize", "extra", PhaseImpl::stream(Upper))
            .unwrap();
        let names: Vec<_> = derived.phase_names().collect();
        assert_eq!(names, vec!["tokenize", "extra", "upper"]);
    }

    #[test]
    fn test_source_must_come_first() {
        let err = base()
            .push("late-source", PhaseImpl::source(NullSource))
            .unwrap_err();
        assert!(matches!(err, CoreError::SourceNotFirst));
    }

    #[test]
    fn test_run_without_source_fails() {
        let p = Pipeline::new();
        assert!(matches!(p.run("texti"), Err(CoreError::MissingSource)));
    }
}
