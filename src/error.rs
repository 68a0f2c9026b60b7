//! Error types for adapter operations.

use thiserror::Error;

/// Errors raised while wrapping host elements and types.
///
/// Both variants mean the caller handed the adapter something it cannot
/// represent. They are never turned into an absent result.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// A wrapper was requested for an element or type of the wrong category.
    #[error("Invalid argument: expected {expected}, found {found}")]
    InvalidArgument {
        expected: &'static str,
        found: String,
    },

    /// The host produced a kind the legacy API has no counterpart for.
    #[error("Unsupported {what} kind: {kind}")]
    UnsupportedKind { what: &'static str, kind: String },

    /// IO error while reading a source file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdapterError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(expected: &'static str, found: impl ToString) -> Self {
        Self::InvalidArgument {
            expected,
            found: found.to_string(),
        }
    }

    /// Create an unsupported element kind error.
    pub fn unsupported_element(kind: impl ToString) -> Self {
        Self::UnsupportedKind {
            what: "element",
            kind: kind.to_string(),
        }
    }

    /// Create an unsupported type kind error.
    pub fn unsupported_type(kind: impl ToString) -> Self {
        Self::UnsupportedKind {
            what: "type",
            kind: kind.to_string(),
        }
    }
}

/// Result type for adapter operations.
pub type Result<T, E = AdapterError> = std::result::Result<T, E>;
