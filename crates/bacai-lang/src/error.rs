//! Error types for parsing wire strings into the closed vocabularies.

/// A specialized `Result` type for language tooling operations.
pub type Result<T> = std::result::Result<T, LangError>;

/// Errors raised when a string does not name a known vocabulary entry.
///
/// Detection and classification themselves never fail; only the
/// string-to-enum conversions used at the API boundary do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LangError {
    /// The value is not part of the named vocabulary.
    #[error("unknown {kind} '{value}': expected one of {expected}")]
    Unknown {
        /// Which vocabulary was being parsed (e.g. "language").
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Comma-separated list of accepted values.
        expected: &'static str,
    },
}

impl LangError {
    /// Creates a new `Unknown` error.
    #[must_use]
    pub fn unknown(kind: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        Self::Unknown {
            kind,
            value: value.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_display() {
        let err = LangError::unknown("language", "de", "ar, fr, en");
        let msg = err.to_string();
        assert!(msg.contains("unknown language 'de'"));
        assert!(msg.contains("ar, fr, en"));
    }
}
