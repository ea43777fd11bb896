//! Word-list parsing
//!
//! All reference data is line-oriented text: one entry per line, `#` for
//! comments, tab-separated columns where a list maps one form to another.
//! A malformed line is a configuration error and aborts context
//! construction; it is never skipped silently.

use crate::error::{CoreError, Result};
use std::collections::{HashMap, HashSet};

fn entries(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(ix, line)| (ix + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Parse a plain word list: one word per line
pub fn parse_words(list: &str, content: &str) -> Result<HashSet<String>> {
    let mut out = HashSet::new();
    for (line, entry) in entries(content) {
        if entry.split_whitespace().count() != 1 {
            return Err(CoreError::WordList {
                list: list.to_string(),
                line,
                entry: entry.to_string(),
            });
        }
        out.insert(entry.to_lowercase());
    }
    Ok(out)
}

/// Parse a two-column replacement list: `wrong<TAB>correct`
///
/// The replacement column may contain spaces ("afhverju" becomes
/// "af hverju").
pub fn parse_pairs(list: &str, content: &str) -> Result<HashMap<String, String>> {
    let mut out = HashMap::new();
    for (line, entry) in entries(content) {
        let (wrong, correct) = entry.split_once('\t').ok_or_else(|| CoreError::WordList {
            list: list.to_string(),
            line,
            entry: entry.to_string(),
        })?;
        let (wrong, correct) = (wrong.trim(), correct.trim());
        if wrong.is_empty() || correct.is_empty() {
            return Err(CoreError::WordList {
                list: list.to_string(),
                line,
                entry: entry.to_string(),
            });
        }
        out.insert(wrong.to_lowercase(), correct.to_string());
    }
    Ok(out)
}

/// Parse a two-column pair set: `first<TAB>second`
pub fn parse_pair_set(list: &str, content: &str) -> Result<HashSet<(String, String)>> {
    let pairs = parse_pairs(list, content)?;
    Ok(pairs
        .into_iter()
        .map(|(a, b)| (a, b.to_lowercase()))
        .collect())
}

/// Parse a tag table: `form<TAB>tag[ tag...]`
pub fn parse_tags(list: &str, content: &str) -> Result<HashMap<String, Vec<String>>> {
    let mut out = HashMap::new();
    for (line, entry) in entries(content) {
        let (form, tags) = entry.split_once('\t').ok_or_else(|| CoreError::WordList {
            list: list.to_string(),
            line,
            entry: entry.to_string(),
        })?;
        let tags: Vec<String> = tags.split_whitespace().map(str::to_string).collect();
        if form.trim().is_empty() || tags.is_empty() {
            return Err(CoreError::WordList {
                list: list.to_string(),
                line,
                entry: entry.to_string(),
            });
        }
        out.insert(form.trim().to_lowercase(), tags);
    }
    Ok(out)
}

/// Parse a phrase list: one multi-word phrase per line
pub fn parse_phrases(list: &str, content: &str) -> Result<Vec<Vec<String>>> {
    let mut out = Vec::new();
    for (line, entry) in entries(content) {
        let words: Vec<String> = entry
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();
        if words.is_empty() {
            return Err(CoreError::WordList {
                list: list.to_string(),
                line,
                entry: entry.to_string(),
            });
        }
        out.push(words);
    }
    Ok(out)
}
