//! Immutable correction context
//!
//! All reference data the checkers share (lexicon, replacement tables,
//! mood tables) is loaded once into a [`CorrectionContext`] and passed
//! explicitly into every phase constructor. Nothing is looked up through
//! process-global state, so tests can supply fixtures freely.

pub mod loader;

use crate::error::Result;
use crate::lexicon::{Lexicon, WordListLexicon};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

const WORDS: &str = include_str!("data/words.txt");
const UNIQUE_ERRORS: &str = include_str!("data/unique_errors.tsv");
const ERROR_FORMS: &str = include_str!("data/error_forms.tsv");
const WRONG_COMPOUNDS: &str = include_str!("data/wrong_compounds.tsv");
const SPLIT_COMPOUNDS: &str = include_str!("data/split_compounds.tsv");
const ALLOWED_MULTIPLES: &str = include_str!("data/allowed_multiples.txt");
const VERB_TAGS: &str = include_str!("data/verb_tags.tsv");
const MOOD_PAIRS: &str = include_str!("data/mood_pairs.tsv");
const MOOD_TRIGGERS: &str = include_str!("data/mood_triggers.txt");

/// Process-scoped, read-only reference data for all checkers
pub struct CorrectionContext {
    lexicon: Arc<dyn Lexicon>,
    unique_errors: HashMap<String, String>,
    error_forms: HashMap<String, String>,
    wrong_compounds: HashMap<String, String>,
    split_compounds: HashSet<(String, String)>,
    allowed_multiples: HashSet<String>,
    tag_map: HashMap<String, Vec<String>>,
    subjunctive_of: HashMap<String, String>,
    mood_triggers: Vec<Vec<String>>,
}

impl CorrectionContext {
    /// Build a context from the embedded word lists
    pub fn from_embedded() -> Result<Self> {
        ContextBuilder::with_embedded_data()?.build()
    }

    /// Start building a context
    pub fn builder() -> ContextBuilder {
        ContextBuilder::empty()
    }

    /// The lexicon collaborator
    pub fn lexicon(&self) -> &dyn Lexicon {
        self.lexicon.as_ref()
    }

    /// Replacement for a unique, unambiguous misspelling
    pub fn unique_error(&self, word: &str) -> Option<&str> {
        self.unique_errors.get(&word.to_lowercase()).map(|s| &**s)
    }

    /// Replacement for an erroneously formed word form
    pub fn error_form(&self, word: &str) -> Option<&str> {
        self.error_forms.get(&word.to_lowercase()).map(|s| &**s)
    }

    /// Phrase replacement for a wrongly compounded word
    pub fn wrong_compound(&self, word: &str) -> Option<&str> {
        self.wrong_compounds.get(&word.to_lowercase()).map(|s| &**s)
    }

    /// True when the adjacent pair should be united into one compound
    pub fn is_split_compound(&self, first: &str, second: &str) -> bool {
        self.split_compounds
            .contains(&(first.to_lowercase(), second.to_lowercase()))
    }

    /// True when the word may legitimately appear twice in a row
    pub fn is_allowed_multiple(&self, word: &str) -> bool {
        self.allowed_multiples.contains(&word.to_lowercase())
    }

    /// Morphological tags for a word form, if known
    pub fn tags_for(&self, word: &str) -> Option<&[String]> {
        self.tag_map.get(&word.to_lowercase()).map(|v| &**v)
    }

    /// Subjunctive counterpart of an indicative verb form, if known
    pub fn subjunctive_of(&self, word: &str) -> Option<&str> {
        self.subjunctive_of.get(&word.to_lowercase()).map(|s| &**s)
    }

    /// Trigger phrases after which a subjunctive is required
    pub fn mood_triggers(&self) -> &[Vec<String>] {
        &self.mood_triggers
    }
}

impl std::fmt::Debug for CorrectionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorrectionContext")
            .field("unique_errors", &self.unique_errors.len())
            .field("error_forms", &self.error_forms.len())
            .field("wrong_compounds", &self.wrong_compounds.len())
            .field("split_compounds", &self.split_compounds.len())
            .field("allowed_multiples", &self.allowed_multiples.len())
            .field("tag_map", &self.tag_map.len())
            .field("mood_triggers", &self.mood_triggers.len())
            .finish()
    }
}

/// Builder for [`CorrectionContext`]
pub struct ContextBuilder {
    lexicon: Option<Arc<dyn Lexicon>>,
    words: HashSet<String>,
    unique_errors: HashMap<String, String>,
    error_forms: HashMap<String, String>,
    wrong_compounds: HashMap<String, String>,
    split_compounds: HashSet<(String, String)>,
    allowed_multiples: HashSet<String>,
    tag_map: HashMap<String, Vec<String>>,
    subjunctive_of: HashMap<String, String>,
    mood_triggers: Vec<Vec<String>>,
}

impl ContextBuilder {
    /// Start from nothing; tests use this to supply small fixtures
    pub fn empty() -> Self {
        Self {
            lexicon: None,
            words: HashSet::new(),
            unique_errors: HashMap::new(),
            error_forms: HashMap::new(),
            wrong_compounds: HashMap::new(),
            split_compounds: HashSet::new(),
            allowed_multiples: HashSet::new(),
            tag_map: HashMap::new(),
            subjunctive_of: HashMap::new(),
            mood_triggers: Vec::new(),
        }
    }

    /// Start from the embedded word lists
    pub fn with_embedded_data() -> Result<Self> {
        let mut b = Self::empty();
        b.words = loader::parse_words("words", WORDS)?;
        b.unique_errors = loader::parse_pairs("unique_errors", UNIQUE_ERRORS)?;
        b.error_forms = loader::parse_pairs("error_forms", ERROR_FORMS)?;
        b.wrong_compounds = loader::parse_pairs("wrong_compounds", WRONG_COMPOUNDS)?;
        b.split_compounds = loader::parse_pair_set("split_compounds", SPLIT_COMPOUNDS)?;
        b.allowed_multiples = loader::parse_words("allowed_multiples", ALLOWED_MULTIPLES)?;
        b.tag_map = loader::parse_tags("verb_tags", VERB_TAGS)?;
        b.subjunctive_of = loader::parse_pairs("mood_pairs", MOOD_PAIRS)?;
        b.mood_triggers = loader::parse_phrases("mood_triggers", MOOD_TRIGGERS)?;
        Ok(b)
    }

    /// Use a custom lexicon instead of one built from the word list
    pub fn lexicon(mut self, lexicon: Arc<dyn Lexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Add word forms to the built-in word list
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Add word forms from a file, one per line
    pub fn words_from_file(mut self, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let name = path.display().to_string();
        self.words.extend(loader::parse_words(&name, &content)?);
        Ok(self)
    }

    /// Add a unique-error replacement
    pub fn unique_error(mut self, wrong: &str, correct: &str) -> Self {
        self.unique_errors
            .insert(wrong.to_lowercase(), correct.to_string());
        self
    }

    /// Add an error-form replacement
    pub fn error_form(mut self, wrong: &str, correct: &str) -> Self {
        self.error_forms
            .insert(wrong.to_lowercase(), correct.to_string());
        self
    }

    /// Add error-form replacements from a tab-separated file
    pub fn error_forms_from_file(mut self, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let name = path.display().to_string();
        self.error_forms
            .extend(loader::parse_pairs(&name, &content)?);
        Ok(self)
    }

    /// Add a wrongly-compounded word replacement
    pub fn wrong_compound(mut self, compound: &str, phrase: &str) -> Self {
        self.wrong_compounds
            .insert(compound.to_lowercase(), phrase.to_string());
        self
    }

    /// Add an adjacent pair that should be united
    pub fn split_compound(mut self, first: &str, second: &str) -> Self {
        self.split_compounds
            .insert((first.to_lowercase(), second.to_lowercase()));
        self
    }

    /// Allow a word to appear twice in a row
    pub fn allowed_multiple(mut self, word: &str) -> Self {
        self.allowed_multiples.insert(word.to_lowercase());
        self
    }

    /// Tag a word form
    pub fn tag(mut self, word: &str, tags: &[&str]) -> Self {
        self.tag_map.insert(
            word.to_lowercase(),
            tags.iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    /// Add an indicative/subjunctive pair
    pub fn mood_pair(mut self, indicative: &str, subjunctive: &str) -> Self {
        self.subjunctive_of
            .insert(indicative.to_lowercase(), subjunctive.to_string());
        self
    }

    /// Add a trigger phrase that demands a following subjunctive
    pub fn mood_trigger(mut self, phrase: &str) -> Self {
        self.mood_triggers
            .push(phrase.split_whitespace().map(|w| w.to_lowercase()).collect());
        self
    }

    /// Finish; a lexicon is built from the word list unless one was supplied
    pub fn build(self) -> Result<CorrectionContext> {
        let lexicon = match self.lexicon {
            Some(lex) => lex,
            None => Arc::new(WordListLexicon::from_words(self.words.iter())),
        };
        Ok(CorrectionContext {
            lexicon,
            unique_errors: self.unique_errors,
            error_forms: self.error_forms,
            wrong_compounds: self.wrong_compounds,
            split_compounds: self.split_compounds,
            allowed_multiples: self.allowed_multiples,
            tag_map: self.tag_map,
            subjunctive_of: self.subjunctive_of,
            mood_triggers: self.mood_triggers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_data_loads() {
        let ctx = CorrectionContext::from_embedded().unwrap();
        assert!(ctx.lexicon().contains("atvinnuleysi"));
        assert_eq!(ctx.error_form("grænann"), Some("grænan"));
        assert_eq!(ctx.unique_error("afhverju"), Some("af hverju"));
        assert_eq!(ctx.wrong_compound("alltsaman"), Some("allt saman"));
        assert!(ctx.is_split_compound("lands", "lið"));
        assert!(ctx.is_allowed_multiple("á"));
        assert_eq!(ctx.subjunctive_of("var"), Some("væri"));
        assert!(!ctx.mood_triggers().is_empty());
    }

    #[test]
    fn test_lookups_are_case_insensitive() {
        let ctx = CorrectionContext::from_embedded().unwrap();
        assert_eq!(ctx.error_form("Grænann"), Some("grænan"));
        assert!(ctx.is_allowed_multiple("Á"));
        assert!(ctx.tags_for("Var").is_some());
    }

    #[test]
    fn test_builder_fixture() {
        let ctx = CorrectionContext::builder()
            .words(["hestur", "fer"])
            .error_form("hesstur", "hestur")
            .mood_trigger("þó að")
            .build()
            .unwrap();
        assert!(ctx.lexicon().contains("hestur"));
        assert_eq!(ctx.error_form("hesstur"), Some("hestur"));
        assert_eq!(ctx.mood_triggers().len(), 1);
    }
}
