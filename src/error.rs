//! Error types for card construction and label parsing.
//!
//! Only two things can go wrong in the core: an attribute code outside
//! `{0, 1, 2}`, or a label token of the wrong length. Matching itself is
//! total and never fails.

use crate::cards::AttributeKind;

/// Errors raised while building a [`Card`](crate::cards::Card).
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum SetError {
    /// An attribute code is not one of 0, 1 or 2.
    #[error("invalid {attribute} code `{code}` (expected 0, 1 or 2)")]
    InvalidAttributeCode {
        attribute: AttributeKind,
        code: String,
    },

    /// A label token is not exactly four characters long.
    #[error("malformed label `{label}`: expected 4 characters, found {length}")]
    MalformedLabel { label: String, length: usize },
}

impl SetError {
    pub(crate) fn invalid_code(attribute: AttributeKind, code: impl ToString) -> Self {
        SetError::InvalidAttributeCode {
            attribute,
            code: code.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_code_message() {
        let err = SetError::invalid_code(AttributeKind::Fill, 7u8);
        assert_eq!(err.to_string(), "invalid fill code `7` (expected 0, 1 or 2)");
    }

    #[test]
    fn test_malformed_label_message() {
        let err = SetError::MalformedLabel {
            label: "012".to_string(),
            length: 3,
        };
        assert_eq!(
            err.to_string(),
            "malformed label `012`: expected 4 characters, found 3"
        );
    }
}
