//! Morphological tag attachment
//!
//! The seam for the external parsing collaborator. The built-in
//! implementation looks tags up in the context's verb table, which is all
//! the bundled grammar checkers need; a deployment with a full parser
//! overrides the `tag` phase with its own.

use crate::context::CorrectionContext;
use crate::pipeline::{StreamPhase, TokenStream};
use std::sync::Arc;

/// Stream phase registered as `tag`
pub struct TagPhase {
    ctx: Arc<CorrectionContext>,
}

impl TagPhase {
    /// Create the phase over shared reference data
    pub fn new(ctx: Arc<CorrectionContext>) -> Self {
        Self { ctx }
    }
}

impl StreamPhase for TagPhase {
    fn apply<'a>(&'a self, input: TokenStream<'a>) -> TokenStream<'a> {
        Box::new(input.map(move |mut t| {
            if t.is_word() {
                if let Some(tags) = self.ctx.tags_for(t.corrected()) {
                    t.tags = tags.iter().cloned().collect();
                }
            }
            t
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SourcePhase;
    use crate::token::Token;
    use crate::tokenizer::Tokenizer;

    #[test]
    fn test_verb_forms_tagged() {
        let ctx = Arc::new(CorrectionContext::from_embedded().unwrap());
        let phase = TagPhase::new(ctx);
        let toks: Vec<Token> = phase
            .apply(Tokenizer::new().tokenize("ég var þreyttur"))
            .collect();
        let var = toks.iter().find(|t| t.original() == "var").unwrap();
        assert!(var.tags.iter().any(|t| t.starts_with("so:fh")));
        let adj = toks.iter().find(|t| t.original() == "þreyttur").unwrap();
        assert!(adj.tags.is_empty());
    }
}
