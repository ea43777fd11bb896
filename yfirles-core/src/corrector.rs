//! High-level entry point
//!
//! A [`Corrector`] bundles a correction context with a pipeline and runs
//! text through it. The standard pipeline registers, in order:
//!
//! | name             | kind     | does                                   |
//! |------------------|----------|----------------------------------------|
//! | `tokenize`       | source   | text to tokens with sentence markers   |
//! | `parse-errors`   | stream   | duplicates and compound errors         |
//! | `lookup-unknown` | stream   | spelling checker chain                 |
//! | `tag`            | stream   | morphological tag attachment           |
//! | `final-correct`  | stream   | punctuation normalization              |
//! | `grammar`        | sentence | whole-sentence grammar checks          |
//!
//! Derive from [`Corrector::pipeline`] with `override_with`, `insert_before`
//! or `insert_after` to customize a single step.

use crate::assembler::Sentences;
use crate::context::CorrectionContext;
use crate::error::Result;
use crate::grammar::GrammarPhase;
use crate::phases::{NormalizePhase, ParseErrorsPhase, SpellingPhase, TagPhase};
use crate::pipeline::{PhaseImpl, Pipeline};
use crate::tokenizer::Tokenizer;
use std::sync::Arc;

/// Build the standard pipeline over the given context
pub fn standard_pipeline(ctx: Arc<CorrectionContext>) -> Result<Pipeline> {
    Pipeline::new()
        .push("tokenize", PhaseImpl::source(Tokenizer::new()))?
        .push(
            "parse-errors",
            PhaseImpl::stream(ParseErrorsPhase::new(ctx.clone())),
        )?
        .push(
            "lookup-unknown",
            PhaseImpl::stream(SpellingPhase::new(ctx.clone())),
        )?
        .push("tag", PhaseImpl::stream(TagPhase::new(ctx.clone())))?
        .push("final-correct", PhaseImpl::stream(NormalizePhase::new()))?
        .push("grammar", PhaseImpl::sentence(GrammarPhase::new(ctx)))
}

/// Spelling and grammar corrector over a fixed context and pipeline
pub struct Corrector {
    ctx: Arc<CorrectionContext>,
    pipeline: Pipeline,
}

impl Corrector {
    /// Corrector with the embedded word lists and the standard pipeline
    pub fn new() -> Result<Self> {
        Self::with_context(Arc::new(CorrectionContext::from_embedded()?))
    }

    /// Standard pipeline over a custom context
    pub fn with_context(ctx: Arc<CorrectionContext>) -> Result<Self> {
        let pipeline = standard_pipeline(ctx.clone())?;
        Ok(Self { ctx, pipeline })
    }

    /// Replace the pipeline, typically with one derived from [`pipeline`](Self::pipeline)
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// The pipeline in use; derive from this to customize
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// The context in use
    pub fn context(&self) -> &Arc<CorrectionContext> {
        &self.ctx
    }

    /// Run `text` through the pipeline, yielding sentences lazily
    pub fn correct<'a>(&'a self, text: &'a str) -> Result<Sentences<'a>> {
        self.pipeline.run(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_phase_order() {
        let corrector = Corrector::new().unwrap();
        let names: Vec<_> = corrector.pipeline().phase_names().collect();
        assert_eq!(
            names,
            vec![
                "tokenize",
                "parse-errors",
                "lookup-unknown",
                "tag",
                "final-correct",
                "grammar"
            ]
        );
    }

    #[test]
    fn test_clean_sentence_passes_through() {
        let corrector = Corrector::new().unwrap();
        let sents: Vec<_> = corrector.correct("Barnið vill grænan lit.").unwrap().collect();
        assert_eq!(sents.len(), 1);
        assert!(sents[0].is_clean());
        assert_eq!(sents[0].corrected(), "Barnið vill grænan lit .");
    }

    #[test]
    fn test_derived_pipeline_leaves_base_untouched() {
        let corrector = Corrector::new().unwrap();
        let derived = corrector
            .pipeline()
            .override_with(
                "tokenize",
                PhaseImpl::source(Tokenizer::preserving_angle_tags()),
            )
            .unwrap();
        assert_eq!(
            corrector.pipeline().phase_names().count(),
            derived.phase_names().count()
        );
    }
}
