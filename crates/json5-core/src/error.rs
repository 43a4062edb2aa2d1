//! Error types for parsing, casting, and conversion.

use thiserror::Error;

/// Errors that can occur while parsing text or extracting native values
/// from a [`Value`](crate::Value).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Json5Error {
    /// The input violated the active grammar. Carries the offending byte
    /// (`None` at end of input) and the name of the syntactic context
    /// being parsed (`value`, `object`, `array`, `string`, `number`,
    /// `null`, `boolean`, `object-key`, `comment`).
    #[error("syntax error: {} in {context}", found_text(.found))]
    Syntax {
        found: Option<u8>,
        context: &'static str,
    },

    /// A strict cast (`as_*`) was applied to a value holding a different tag.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// No conversion path exists between the stored tag and the requested
    /// native type (in the mode that was used).
    #[error("no conversion from {from} to {to}")]
    Conversion {
        from: &'static str,
        to: &'static str,
    },
}

impl Json5Error {
    pub(crate) fn syntax(found: Option<u8>, context: &'static str) -> Self {
        Json5Error::Syntax { found, context }
    }
}

fn found_text(found: &Option<u8>) -> String {
    match found {
        Some(byte) => format!("illegal character `{}'", byte.escape_ascii()),
        None => "unexpected end of input".to_string(),
    }
}

/// Convenience alias used throughout json5-core.
pub type Result<T> = std::result::Result<T, Json5Error>;
