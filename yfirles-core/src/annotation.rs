//! Annotations: structured records of detected issues
//!
//! An [`Annotation`] describes one finding over a token range of a sentence.
//! Annotations are created by exactly one checker, never mutated afterwards,
//! and accumulated per sentence. Overlapping annotations are all kept; the
//! pipeline never merges or ranks them.

use serde::Serialize;

/// One detected spelling or grammar issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Index of the first token the annotation applies to (inclusive)
    pub start: usize,
    /// Index of the last token the annotation applies to (inclusive)
    pub end: usize,
    /// Character offset of the start of the annotated span
    pub start_char: usize,
    /// Character offset past the end of the annotated span (exclusive)
    pub end_char: usize,
    /// Error class identifier, e.g. `S002` or `P_MOOD_ACK`
    pub code: String,
    /// Human-readable description
    pub text: String,
    /// Extended explanation; may be empty
    pub detail: String,
    /// Replacement text for the span, when a confident fix exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggest: Option<String>,
}

impl Annotation {
    /// Sort key: by start token index, then by end token index
    pub fn sort_key(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

/// Receiver for annotations emitted by sentence-level checkers
///
/// Checkers write their findings to an explicit sink instead of returning
/// them, so several independent checkers can accumulate onto one sentence.
pub trait AnnotationSink {
    /// Record one annotation
    fn push_annotation(&mut self, ann: Annotation);
}

impl AnnotationSink for Vec<Annotation> {
    fn push_annotation(&mut self, ann: Annotation) {
        self.push(ann);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann(start: usize, end: usize, code: &str) -> Annotation {
        Annotation {
            start,
            end,
            start_char: start,
            end_char: end + 1,
            code: code.to_string(),
            text: String::new(),
            detail: String::new(),
            suggest: None,
        }
    }

    #[test]
    fn test_sink_preserves_overlaps() {
        let mut sink: Vec<Annotation> = Vec::new();
        sink.push_annotation(ann(2, 4, "P_MOOD_ACK"));
        sink.push_annotation(ann(3, 3, "S002"));
        sink.push_annotation(ann(2, 4, "P_MOOD_ACK"));
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn test_suggest_omitted_when_absent() {
        let a = ann(0, 0, "U001");
        let json = serde_json::to_string(&a).unwrap();
        assert!(!json.contains("suggest"));
    }

    #[test]
    fn test_suggest_serialized_when_present() {
        let mut a = ann(0, 0, "S002");
        a.suggest = Some("jókst".to_string());
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains("\"suggest\":\"jókst\""));
    }
}
