//! Lexicon collaborator: word validity and candidate corrections
//!
//! The correction engine never generates candidates itself; it asks the
//! lexicon. [`WordListLexicon`] is the bundled implementation, backed by a
//! flat word list. Deployments with a full morphological database implement
//! [`Lexicon`] over it and inject it through the context builder.

use std::collections::{BTreeSet, HashSet};

/// Answers "is this surface form valid" and "what could it be instead"
pub trait Lexicon: Send + Sync {
    /// True when the surface form is a known word
    ///
    /// Lookup is case-insensitive; sentence-initial capitalization must not
    /// make a word unknown.
    fn contains(&self, word: &str) -> bool;

    /// Candidate corrections for an unknown surface form, in a deterministic
    /// order. Empty when nothing plausible exists.
    fn suggest(&self, word: &str) -> Vec<String>;
}

/// Alphabet used for candidate generation
const ALPHABET: &str = "aábdðeéfghiíjklmnoóprstuúvxyýþæö";

/// Flat word-list lexicon with edit-distance-1 candidate generation
pub struct WordListLexicon {
    words: HashSet<String>,
}

impl WordListLexicon {
    /// Build from an iterator of words; stored lowercased
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Number of known word forms
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the word list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Add more word forms
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// All strings at edit distance 1 from `word` over the Icelandic alphabet
    fn edits(word: &str) -> BTreeSet<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut out = BTreeSet::new();

        // Deletions
        for i in 0..chars.len() {
            let mut v = chars.clone();
            v.remove(i);
            out.insert(v.iter().collect());
        }
        // Transpositions
        for i in 0..chars.len().saturating_sub(1) {
            let mut v = chars.clone();
            v.swap(i, i + 1);
            out.insert(v.iter().collect());
        }
        // Substitutions
        for i in 0..chars.len() {
            for c in ALPHABET.chars() {
                if c != chars[i] {
                    let mut v = chars.clone();
                    v[i] = c;
                    out.insert(v.iter().collect());
                }
            }
        }
        // Insertions
        for i in 0..=chars.len() {
            for c in ALPHABET.chars() {
                let mut v = chars.clone();
                v.insert(i, c);
                out.insert(v.iter().collect());
            }
        }

        out
    }
}

impl Lexicon for WordListLexicon {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        let lower = word.to_lowercase();
        // BTreeSet iteration keeps the outcome deterministic regardless of
        // the order in which variants were generated.
        Self::edits(&lower)
            .into_iter()
            .filter(|c| self.words.contains(c))
            .collect()
    }
}
