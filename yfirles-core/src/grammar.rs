//! Whole-sentence grammar annotation
//!
//! Grammar checkers run after assembly, over the full token buffer of one
//! sentence, and write their findings to the sentence's annotation sink.
//! Checks are independent; several may fire on overlapping spans and all
//! fired annotations are kept. Grammar findings never rewrite tokens; the
//! `suggest` field carries the corrected surface form when one is
//! derivable.

use crate::annotation::{Annotation, AnnotationSink};
use crate::context::CorrectionContext;
use crate::phases::match_case;
use crate::pipeline::SentencePhase;
use crate::token::{Token, TokenKind};
use std::sync::Arc;

/// One independent grammar check over an assembled sentence
pub trait GrammarChecker: Send + Sync {
    /// Short identifier, used in logs and tests
    fn name(&self) -> &'static str;

    /// Inspect the sentence and push findings to the sink
    fn inspect(&self, tokens: &[Token], ctx: &CorrectionContext, sink: &mut dyn AnnotationSink);
}

/// Sentence phase registered as `grammar`
pub struct GrammarPhase {
    ctx: Arc<CorrectionContext>,
    checkers: Vec<Box<dyn GrammarChecker>>,
}

impl GrammarPhase {
    /// Create the phase with the standard checkers
    pub fn new(ctx: Arc<CorrectionContext>) -> Self {
        Self::with_checkers(ctx, vec![Box::new(MoodChecker)])
    }

    /// Create the phase with a custom checker list
    pub fn with_checkers(
        ctx: Arc<CorrectionContext>,
        checkers: Vec<Box<dyn GrammarChecker>>,
    ) -> Self {
        Self { ctx, checkers }
    }
}

impl SentencePhase for GrammarPhase {
    fn inspect(&self, tokens: &[Token], sink: &mut dyn AnnotationSink) {
        for checker in &self.checkers {
            checker.inspect(tokens, &self.ctx, sink);
        }
    }
}

/// Indicative mood after a concessive trigger construction
///
/// After a trigger phrase such as "þrátt fyrir að", the next finite verb up
/// to a comma or the sentence end must be in the subjunctive. An indicative
/// verb there is annotated with code `P_MOOD_ACK`; when the context knows
/// the subjunctive counterpart it is offered as the suggestion.
pub struct MoodChecker;

impl MoodChecker {
    fn trigger_matches(trigger: &[String], tokens: &[Token], at: usize) -> bool {
        if at + trigger.len() > tokens.len() {
            return false;
        }
        trigger.iter().enumerate().all(|(k, word)| {
            let t = &tokens[at + k];
            t.is_word() && t.corrected().to_lowercase() == *word
        })
    }
}

impl GrammarChecker for MoodChecker {
    fn name(&self) -> &'static str {
        "mood-after-trigger"
    }

    fn inspect(&self, tokens: &[Token], ctx: &CorrectionContext, sink: &mut dyn AnnotationSink) {
        for trigger in ctx.mood_triggers() {
            for i in 0..tokens.len() {
                if !Self::trigger_matches(trigger, tokens, i) {
                    continue;
                }
                // Trigger found; look for the next finite verb in the clause
                for t in &tokens[i + trigger.len()..] {
                    if t.kind == TokenKind::SentenceEnd
                        || (t.kind == TokenKind::Punctuation && t.corrected().starts_with(','))
                    {
                        break;
                    }
                    if t.tags.iter().any(|tag| tag.starts_with("so:vh")) {
                        // Subjunctive already; nothing to report
                        break;
                    }
                    if t.tags.iter().any(|tag| tag.starts_with("so:fh")) {
                        let j = tokens
                            .iter()
                            .position(|x| std::ptr::eq(x, t))
                            .unwrap_or(i);
                        let suggest = ctx
                            .subjunctive_of(t.corrected())
                            .map(|s| match_case(t.corrected(), s));
                        let text = match &suggest {
                            Some(s) => format!(
                                "Sögnin '{}' á sennilega að vera í viðtengingarhætti, þ.e. '{}'",
                                t.corrected(),
                                s
                            ),
                            None => format!(
                                "Sögnin '{}' á sennilega að vera í viðtengingarhætti",
                                t.corrected()
                            ),
                        };
                        sink.push_annotation(Annotation {
                            start: j,
                            end: j,
                            start_char: t.start(),
                            end_char: t.end(),
                            code: "P_MOOD_ACK".to_string(),
                            text,
                            detail: format!(
                                "Á eftir '{}' á sögn að vera í viðtengingarhætti en ekki framsöguhætti.",
                                trigger.join(" ")
                            ),
                            suggest,
                        });
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{SourcePhase, StreamPhase};
    use crate::phases::TagPhase;
    use crate::tokenizer::Tokenizer;

    fn annotations(text: &str) -> Vec<Annotation> {
        let ctx = Arc::new(CorrectionContext::from_embedded().unwrap());
        let tagger = TagPhase::new(ctx.clone());
        let tokens: Vec<Token> = tagger.apply(Tokenizer::new().tokenize(text)).collect();
        let phase = GrammarPhase::new(ctx);
        let mut sink: Vec<Annotation> = Vec::new();
        phase.inspect(&tokens, &mut sink);
        sink
    }

    #[test]
    fn test_indicative_after_trigger_flagged() {
        let anns = annotations("þrátt fyrir að ég var þreyttur");
        assert_eq!(anns.len(), 1);
        let a = &anns[0];
        assert_eq!(a.code, "P_MOOD_ACK");
        assert_eq!(a.suggest.as_deref(), Some("væri"));
        assert_eq!(a.start, a.end);
    }

    #[test]
    fn test_subjunctive_after_trigger_accepted() {
        let anns = annotations("þrátt fyrir að ég væri þreyttur");
        assert!(anns.is_empty());
    }

    #[test]
    fn test_no_trigger_no_annotation() {
        let anns = annotations("ég var þreyttur");
        assert!(anns.is_empty());
    }

    #[test]
    fn test_comma_closes_the_clause() {
        let anns = annotations("jafnvel þótt hún, var ekki");
        assert!(anns.is_empty());
    }

    #[test]
    fn test_two_triggers_fire_independently() {
        let anns = annotations("þrátt fyrir að ég var heima og jafnvel þótt hún var ekki");
        assert_eq!(anns.len(), 2);
    }
}
