//! Duplicated-word and compound-error phase
//!
//! Runs with a one-token lookahead over the raw token stream, before any
//! dictionary lookups:
//!
//! - `C001` a word written twice in a row is reduced to one occurrence;
//!   words on the allowed-multiples list are exempt and pass untouched
//! - `C004` a repeated word whose casing differs is flagged but left alone
//! - `C002` a wrongly compounded word is split into its phrase
//! - `C003` a wrongly split compound pair is united into one token

use crate::context::CorrectionContext;
use crate::phases::match_case;
use crate::pipeline::{StreamPhase, TokenStream};
use crate::token::{Token, TokenError};
use std::sync::Arc;

/// Stream phase registered as `parse-errors`
pub struct ParseErrorsPhase {
    ctx: Arc<CorrectionContext>,
}

impl ParseErrorsPhase {
    /// Create the phase over shared reference data
    pub fn new(ctx: Arc<CorrectionContext>) -> Self {
        Self { ctx }
    }
}

impl StreamPhase for ParseErrorsPhase {
    fn apply<'a>(&'a self, input: TokenStream<'a>) -> TokenStream<'a> {
        Box::new(ParseErrorsIter {
            ctx: &self.ctx,
            input,
            lookahead: None,
            exhausted: false,
        })
    }
}

struct ParseErrorsIter<'a> {
    ctx: &'a CorrectionContext,
    input: TokenStream<'a>,
    lookahead: Option<Token>,
    exhausted: bool,
}

impl<'a> Iterator for ParseErrorsIter<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }
        let mut token = match self.lookahead.take().or_else(|| self.input.next()) {
            Some(t) => t,
            None => {
                self.exhausted = true;
                return None;
            }
        };

        loop {
            let mut next_token = match self.input.next() {
                Some(t) => t,
                None => {
                    // Final token; the lookahead window closes here
                    self.exhausted = true;
                    return Some(token);
                }
            };

            // Word duplication; words on the allowed-multiples list may
            // legitimately repeat and skip the check entirely
            if token.is_word()
                && next_token.is_word()
                && token.corrected().to_lowercase() == next_token.corrected().to_lowercase()
                && !self.ctx.is_allowed_multiple(token.corrected())
            {
                if token.corrected() == next_token.corrected() {
                    let desc = format!(
                        "Endurtekið orð ('{}') var fellt burt",
                        token.corrected()
                    );
                    token.set_error(TokenError::compound("001", desc));
                    // Drop the repeat and keep comparing; handles longer runs
                    continue;
                }
                // Casing differs: flag the second occurrence, change nothing
                let desc = format!(
                    "Orðið '{}' er mögulega endurtekið",
                    next_token.corrected()
                );
                next_token.set_error(TokenError::compound("004", desc));
                self.lookahead = Some(next_token);
                return Some(token);
            }

            // Wrongly compounded word: rewrite to its phrase
            if token.is_word() && token.error().is_none() {
                if let Some(phrase) = self.ctx.wrong_compound(token.corrected()) {
                    let desc = format!("Orðinu '{}' var skipt upp", token.corrected());
                    let replacement = match_case(token.corrected(), phrase);
                    token.rewrite(replacement);
                    token.set_error(TokenError::compound("002", desc));
                }
            }

            // Wrongly split compound: unite the pair
            if token.is_word()
                && next_token.is_word()
                && self
                    .ctx
                    .is_split_compound(token.corrected(), next_token.corrected())
            {
                let desc = format!(
                    "Orðin '{} {}' voru sameinuð í eitt",
                    token.corrected(),
                    next_token.corrected()
                );
                let mut merged = Token::merged(&token, &next_token);
                merged.set_error(TokenError::compound("003", desc));
                // The united token may itself pair with what follows
                token = merged;
                continue;
            }

            self.lookahead = Some(next_token);
            return Some(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SourcePhase;
    use crate::tokenizer::Tokenizer;

    fn ctx() -> Arc<CorrectionContext> {
        Arc::new(CorrectionContext::from_embedded().unwrap())
    }

    fn run(text: &str) -> Vec<Token> {
        let tokenizer = Tokenizer::new();
        let phase = ParseErrorsPhase::new(ctx());
        phase.apply(tokenizer.tokenize(text)).collect()
    }

    fn rendered(toks: &[Token]) -> String {
        toks.iter()
            .filter(|t| !t.kind.is_marker())
            .map(|t| t.corrected())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_duplicate_removed() {
        let toks = run("Ég hélt mér mér fast í sætið.");
        let s = rendered(&toks);
        assert!(s.contains("hélt mér fast"));
        assert!(!s.contains("mér mér"));
        let flagged: Vec<_> = toks.iter().filter_map(|t| t.error()).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].code(), "C001");
    }

    #[test]
    fn test_long_run_collapses_to_one() {
        let toks = run("stanslaust fjör fjör fjör fjör í sveitinni");
        let s = rendered(&toks);
        assert_eq!(s, "stanslaust fjör í sveitinni");
    }

    #[test]
    fn test_allowed_multiple_kept_without_error() {
        let toks = run("Ég á á sem heitir Lína");
        let s = rendered(&toks);
        assert!(s.contains("á á"));
        assert!(toks.iter().all(|t| t.error().is_none()));
    }

    #[test]
    fn test_allowed_multiple_casing_variant_also_exempt() {
        let toks = run("Á á beit gras");
        let s = rendered(&toks);
        assert!(s.contains("Á á"));
        assert!(toks.iter().all(|t| t.error().is_none()));
    }

    #[test]
    fn test_case_differing_duplicate_flagged() {
        let toks = run("Slysið slysið átti sér stað");
        let s = rendered(&toks);
        assert!(s.contains("Slysið slysið"));
        assert_eq!(toks[2].error().unwrap().code(), "C004");
    }

    #[test]
    fn test_duplicate_with_comma_between_accepted() {
        let toks = run("sem er flokkar, flokkar potta");
        assert!(toks.iter().all(|t| t.error().is_none()));
    }

    #[test]
    fn test_wrong_compound_split() {
        let toks = run("þetta er alltsaman gaman");
        let s = rendered(&toks);
        assert!(s.contains("allt saman"));
        let t = toks.iter().find(|t| t.original() == "alltsaman").unwrap();
        assert_eq!(t.error().unwrap().code(), "C002");
        assert_eq!(t.corrected(), "allt saman");
    }

    #[test]
    fn test_split_compound_united() {
        let toks = run("íslenska lands lið vann");
        let s = rendered(&toks);
        assert!(s.contains("landslið"));
        let t = toks.iter().find(|t| t.corrected() == "landslið").unwrap();
        assert_eq!(t.error().unwrap().code(), "C003");
        assert_eq!(t.original(), "lands lið");
    }

    #[test]
    fn test_clean_stream_untouched() {
        let toks = run("Barnið vill grænan lit.");
        assert!(toks.iter().all(|t| t.error().is_none()));
        assert!(toks.iter().all(|t| !t.is_rewritten()));
    }
}
