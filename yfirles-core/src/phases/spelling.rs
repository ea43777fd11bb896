//! The spelling correction engine
//!
//! For each word token an ordered list of independent checkers runs; the
//! first checker proposing a confident fix wins and nothing runs after it,
//! so a token is rewritten at most once per pass. The engine only sequences
//! and arbitrates; word validity and candidate generation come from the
//! lexicon collaborator.
//!
//! Codes: `S001` unique-error replacement, `S002` edit-distance correction,
//! `S003` erroneously formed word form, `S004` tentative suggestion without
//! rewrite, `U001` unknown word.

use crate::context::CorrectionContext;
use crate::phases::match_case;
use crate::pipeline::{StreamPhase, TokenStream};
use crate::token::{Token, TokenError};
use std::sync::Arc;

/// What one checker concluded about a token
pub enum Outcome {
    /// No opinion; the next checker runs
    Pass,
    /// The token is valid as written; the chain stops
    Valid,
    /// Confident fix: rewrite the token and attach the error
    Rewrite {
        /// The replacement text
        text: String,
        /// The error to attach, carrying the replacement as suggestion
        error: TokenError,
    },
    /// Flagged but not fixed; suggestion absent or tentative
    Flag {
        /// The error to attach
        error: TokenError,
    },
}

/// One independent spelling checker
pub trait Checker: Send + Sync {
    /// Short identifier, used in logs and tests
    fn name(&self) -> &'static str;

    /// Inspect a word token
    fn check(&self, token: &Token, ctx: &CorrectionContext) -> Outcome;
}

/// Declares a token valid when the lexicon knows it
struct KnownWord;

impl Checker for KnownWord {
    fn name(&self) -> &'static str {
        "known-word"
    }

    fn check(&self, token: &Token, ctx: &CorrectionContext) -> Outcome {
        if ctx.lexicon().contains(token.corrected()) {
            Outcome::Valid
        } else {
            Outcome::Pass
        }
    }
}

/// Unique, unambiguous misspellings from the word lists
struct UniqueErrors;

impl Checker for UniqueErrors {
    fn name(&self) -> &'static str {
        "unique-errors"
    }

    fn check(&self, token: &Token, ctx: &CorrectionContext) -> Outcome {
        match ctx.unique_error(token.corrected()) {
            Some(correct) => {
                let text = match_case(token.corrected(), correct);
                let error = TokenError::spelling(
                    "001",
                    format!(
                        "Orðið '{}' var leiðrétt í '{}'",
                        token.corrected(),
                        text
                    ),
                    text.clone(),
                );
                Outcome::Rewrite { text, error }
            }
            None => Outcome::Pass,
        }
    }
}

/// Erroneously formed word forms from the word lists
struct ErrorForms;

impl Checker for ErrorForms {
    fn name(&self) -> &'static str {
        "error-forms"
    }

    fn check(&self, token: &Token, ctx: &CorrectionContext) -> Outcome {
        match ctx.error_form(token.corrected()) {
            Some(correct) => {
                let text = match_case(token.corrected(), correct);
                let error = TokenError::spelling(
                    "003",
                    format!(
                        "Orðið '{}' var leiðrétt í '{}'",
                        token.corrected(),
                        text
                    ),
                    text.clone(),
                );
                Outcome::Rewrite { text, error }
            }
            None => Outcome::Pass,
        }
    }
}

/// Edit-distance candidates from the lexicon
///
/// Rewrites only when exactly one candidate exists; with several, the first
/// is offered as a tentative suggestion without touching the token.
struct EditDistance;

impl Checker for EditDistance {
    fn name(&self) -> &'static str {
        "edit-distance"
    }

    fn check(&self, token: &Token, ctx: &CorrectionContext) -> Outcome {
        let candidates = ctx.lexicon().suggest(token.corrected());
        match candidates.as_slice() {
            [] => Outcome::Pass,
            [only] => {
                let text = match_case(token.corrected(), only);
                let error = TokenError::spelling(
                    "002",
                    format!(
                        "Orðið '{}' var leiðrétt í '{}'",
                        token.corrected(),
                        text
                    ),
                    text.clone(),
                );
                Outcome::Rewrite { text, error }
            }
            [first, ..] => {
                let tentative = match_case(token.corrected(), first);
                let error = TokenError::spelling(
                    "004",
                    format!(
                        "Orðið '{}' gæti átt að vera '{}'",
                        token.corrected(),
                        tentative
                    ),
                    tentative,
                );
                Outcome::Flag { error }
            }
        }
    }
}

/// Fallback: nothing matched, the word is unknown
struct UnknownWord;

impl Checker for UnknownWord {
    fn name(&self) -> &'static str {
        "unknown-word"
    }

    fn check(&self, token: &Token, _ctx: &CorrectionContext) -> Outcome {
        Outcome::Flag {
            error: TokenError::unknown(format!("Óþekkt orð: '{}'", token.corrected())),
        }
    }
}

/// Stream phase registered as `lookup-unknown`
pub struct SpellingPhase {
    ctx: Arc<CorrectionContext>,
    checkers: Vec<Box<dyn Checker>>,
}

impl SpellingPhase {
    /// Create the phase with the standard checker chain
    pub fn new(ctx: Arc<CorrectionContext>) -> Self {
        Self::with_checkers(ctx, Self::standard_checkers())
    }

    /// Create the phase with a custom checker chain
    pub fn with_checkers(ctx: Arc<CorrectionContext>, checkers: Vec<Box<dyn Checker>>) -> Self {
        Self { ctx, checkers }
    }

    /// The standard chain, in arbitration order
    pub fn standard_checkers() -> Vec<Box<dyn Checker>> {
        vec![
            Box::new(KnownWord),
            Box::new(UniqueErrors),
            Box::new(ErrorForms),
            Box::new(EditDistance),
            Box::new(UnknownWord),
        ]
    }

    fn check_token(&self, token: &mut Token) {
        // Tokens already handled by an earlier phase are left alone;
        // at most one rewrite per token per pass
        if !token.is_word() || token.error().is_some() || token.corrected().contains(' ') {
            return;
        }
        for checker in &self.checkers {
            match checker.check(token, &self.ctx) {
                Outcome::Pass => continue,
                Outcome::Valid => return,
                Outcome::Rewrite { text, error } => {
                    token.rewrite(text);
                    token.set_error(error);
                    return;
                }
                Outcome::Flag { error } => {
                    token.set_error(error);
                    return;
                }
            }
        }
    }
}

impl StreamPhase for SpellingPhase {
    fn apply<'a>(&'a self, input: TokenStream<'a>) -> TokenStream<'a> {
        Box::new(input.map(move |mut t| {
            self.check_token(&mut t);
            t
        }))
    }
}
