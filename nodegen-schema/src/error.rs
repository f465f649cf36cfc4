//! Error types for schema parsing and validation.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A record line without both a type tag and a class name.
    #[error("line {line}: expected '<tag> <ClassName> [fields...]', found '{found}'")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// Offending line, trimmed.
        found: String,
    },

    /// A field token that cannot be split into a name and a default.
    #[error("line {line}, column {column}: invalid field '{token}': {reason}")]
    InvalidField {
        /// 1-based line number.
        line: usize,
        /// 1-based column of the token.
        column: usize,
        /// Offending token.
        token: String,
        /// Why the token was rejected.
        reason: &'static str,
    },
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The same type tag declared twice.
    #[error("duplicate type tag '{tag}' on line {line} (first declared on line {first_line})")]
    DuplicateTag {
        /// Repeated tag.
        tag: String,
        /// Line of the first declaration.
        first_line: usize,
        /// Line of the repeat.
        line: usize,
    },

    /// The same class name declared twice.
    #[error(
        "duplicate class name '{class_name}' on line {line} (first declared on line {first_line})"
    )]
    DuplicateClassName {
        /// Repeated class name.
        class_name: String,
        /// Line of the first declaration.
        first_line: usize,
        /// Line of the repeat.
        line: usize,
    },
}

impl ParseError {
    /// Creates a malformed line error.
    pub fn malformed(line: usize, found: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            found: found.into(),
        }
    }

    /// Creates an invalid field error.
    pub fn invalid_field(
        line: usize,
        column: usize,
        token: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidField {
            line,
            column,
            token: token.into(),
            reason,
        }
    }

    /// Returns the line the error was reported on.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedLine { line, .. } | Self::InvalidField { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_line_message() {
        let err = ParseError::malformed(3, "BOOL");
        assert_eq!(err.line(), 3);
        assert!(err.to_string().contains("line 3"));
        assert!(err.to_string().contains("BOOL"));
    }

    #[test]
    fn test_duplicate_tag_message() {
        let err = SchemaError::DuplicateTag {
            tag: "INTEGER".to_string(),
            first_line: 2,
            line: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("INTEGER"));
        assert!(msg.contains("line 5"));
        assert!(msg.contains("line 2"));
    }
}
