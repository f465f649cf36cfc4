//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] nodegen_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] nodegen_schema::SchemaError),

    /// An input file could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    ReadInput {
        /// Input path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write '{}': {source}", .path.display())]
    WriteOutput {
        /// Output path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Typed generation was requested without a base class source.
    #[error("typed generation requires the base node class source")]
    MissingBaseSource,

    /// The base class source does not contain the class-opening marker.
    #[error("base class marker '{marker}' not found in base source")]
    MissingBaseMarker {
        /// Marker line that was searched for.
        marker: String,
    },

    /// A schema field has no accessor on the base class.
    #[error(
        "field '{field}' of '{class_name}' (schema line {line}) is not declared on the base class"
    )]
    UnresolvedFieldType {
        /// Field name.
        field: String,
        /// Class the field belongs to.
        class_name: String,
        /// Schema line of the node kind.
        line: usize,
    },

    /// Unknown emission strategy name.
    #[error("unknown strategy '{name}' (expected 'typed' or 'untyped')")]
    UnknownStrategy {
        /// Name as given.
        name: String,
    },
}

impl CodegenError {
    /// Creates a read error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadInput {
            path: path.into(),
            source,
        }
    }

    /// Creates a write error for `path`.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteOutput {
            path: path.into(),
            source,
        }
    }
}
