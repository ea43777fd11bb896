//! Error types for pipeline construction and word-list loading
//!
//! Per-token findings are never errors; they travel as [`crate::Annotation`]
//! data. Only structural misconfiguration is fatal, and it is fatal at
//! construction time.

use thiserror::Error;

/// Errors raised while building a pipeline or loading reference data
#[derive(Error, Debug)]
pub enum CoreError {
    /// An override or insertion referenced a phase name that is not registered
    #[error("unknown phase '{name}'")]
    UnknownPhase {
        /// The phase name that was not found
        name: String,
    },

    /// A phase with this name is already registered
    #[error("duplicate phase name '{name}'")]
    DuplicatePhase {
        /// The conflicting phase name
        name: String,
    },

    /// An override supplied a phase of a different kind than the one it replaces
    #[error("phase '{name}' cannot be replaced by a phase of a different kind")]
    PhaseKindMismatch {
        /// The name of the phase being replaced
        name: String,
    },

    /// The pipeline was run without a source phase
    #[error("pipeline has no source phase")]
    MissingSource,

    /// A source phase was registered anywhere but first
    #[error("the source phase must be the first phase in the pipeline")]
    SourceNotFirst,

    /// A word-list file contained an entry that could not be parsed
    #[error("malformed word-list entry in {list} at line {line}: {entry}")]
    WordList {
        /// Name of the word list being loaded
        list: String,
        /// 1-based line number of the bad entry
        line: usize,
        /// The offending line
        entry: String,
    },

    /// I/O error while reading reference data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_phase_display() {
        let err = CoreError::UnknownPhase {
            name: "tokenize".to_string(),
        };
        assert_eq!(err.to_string(), "unknown phase 'tokenize'");
    }

    #[test]
    fn test_word_list_display() {
        let err = CoreError::WordList {
            list: "error_forms".to_string(),
            line: 7,
            entry: "grænann".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed word-list entry in error_forms at line 7: grænann"
        );
    }
}
