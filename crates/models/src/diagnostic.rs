use crate::JsonKind;
use std::fmt;

/// A single failure found while validating a document.
///
/// The `Display` output is the exact line written to the error log, so the
/// wording here is a compatibility contract with tools that read the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The file is missing, unreadable or not JSON at all.
    InvalidJson,
    /// The document parsed but its top-level value is not a list.
    RootNotList,
    NotAnObject {
        index: usize,
        got: JsonKind,
    },
    MissingField {
        index: usize,
        field: String,
    },
    WrongType {
        index: usize,
        field: String,
        got: JsonKind,
        expected: JsonKind,
    },
}

impl Diagnostic {
    /// Whole-document failures stop validation with an empty result.
    pub fn is_structural(&self) -> bool {
        matches!(self, Diagnostic::InvalidJson | Diagnostic::RootNotList)
    }

    /// Position of the offending element, if the failure is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Diagnostic::InvalidJson | Diagnostic::RootNotList => None,
            Diagnostic::NotAnObject { index, .. }
            | Diagnostic::MissingField { index, .. }
            | Diagnostic::WrongType { index, .. } => Some(*index),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidJson => write!(f, "invalid json"),
            Diagnostic::RootNotList => write!(f, "root json must be a list"),
            Diagnostic::NotAnObject { index, got } => {
                write!(f, "[{}] item must be an object, got {}", index, got)
            }
            Diagnostic::MissingField { index, field } => {
                write!(f, "[{}] missing field '{}'", index, field)
            }
            Diagnostic::WrongType {
                index,
                field,
                got,
                expected,
            } => write!(
                f,
                "[{}] field '{}' has wrong type: {}, expected {}",
                index, field, got, expected
            ),
        }
    }
}
