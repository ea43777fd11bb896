//! Spelling correction and grammar annotation for Icelandic text
//!
//! Text flows through a pipeline of named phases: a tokenizer splits the
//! input into a lazy token stream, correction phases rewrite or flag tokens,
//! and an assembler groups the stream into sentences, runs whole-sentence
//! grammar checks and reports every finding as an [`Annotation`].
//!
//! ```
//! use yfirles_core::Corrector;
//!
//! # fn main() -> yfirles_core::Result<()> {
//! let corrector = Corrector::new()?;
//! for sentence in corrector.correct("Barnið vil grænann lit.")? {
//!     println!("{}", sentence.corrected());
//!     for ann in sentence.annotations() {
//!         println!("  {}: {}", ann.code, ann.text);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The pipeline is open: [`Pipeline::override_with`], `insert_before` and
//! `insert_after` derive a new pipeline with one phase swapped or spliced in
//! while the original keeps working unchanged.

pub mod annotation;
pub mod assembler;
pub mod context;
pub mod corrector;
pub mod error;
pub mod grammar;
pub mod lexicon;
pub mod phases;
pub mod pipeline;
pub mod token;
pub mod tokenizer;

pub use annotation::{Annotation, AnnotationSink};
pub use assembler::{Sentence, Sentences};
pub use context::{ContextBuilder, CorrectionContext};
pub use corrector::{standard_pipeline, Corrector};
pub use error::{CoreError, Result};
pub use grammar::{GrammarChecker, GrammarPhase, MoodChecker};
pub use lexicon::{Lexicon, WordListLexicon};
pub use phases::{Checker, NormalizePhase, Outcome, ParseErrorsPhase, SpellingPhase, TagPhase};
pub use pipeline::{
    PhaseImpl, Pipeline, SentencePhase, SourcePhase, StreamPhase, TokenStream,
};
pub use token::{Token, TokenError, TokenKind};
pub use tokenizer::Tokenizer;
