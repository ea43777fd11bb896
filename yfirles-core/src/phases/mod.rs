//! The built-in correction phases
//!
//! These are the stream phases registered by the standard pipeline, in
//! order: `parse-errors` (duplicated words, compound errors),
//! `lookup-unknown` (the spelling checker chain), `tag` (morphological
//! tags), `final-correct` (punctuation normalization).

pub mod normalize;
pub mod parse_errors;
pub mod spelling;
pub mod tagging;

pub use normalize::NormalizePhase;
pub use parse_errors::ParseErrorsPhase;
pub use spelling::{Checker, Outcome, SpellingPhase};
pub use tagging::TagPhase;

/// Carry the capitalization of `pattern` over to `replacement`
///
/// Replacements are stored lowercase; a sentence-initial "Atvinuleysi" must
/// come back as "Atvinnuleysi".
pub(crate) fn match_case(pattern: &str, replacement: &str) -> String {
    let starts_upper = pattern.chars().next().is_some_and(|c| c.is_uppercase());
    if !starts_upper {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::match_case;

    #[test]
    fn test_match_case() {
        assert_eq!(match_case("Atvinuleysi", "atvinnuleysi"), "Atvinnuleysi");
        assert_eq!(match_case("jógst", "jókst"), "jókst");
        assert_eq!(match_case("Þreittur", "þreyttur"), "Þreyttur");
    }
}
