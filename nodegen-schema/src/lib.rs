//! # Nodegen Schema
//!
//! Node-kind schema parser and base class scanner.
//!
//! This crate provides:
//! - Parsing of line-oriented node-kind schemas
//! - Field type recovery from the base node class accessors
//! - Schema validation
//! - The data model shared with code generation

pub mod error;
pub mod fields;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use fields::{BaseScan, DEFAULT_BASE_MARKER, FieldTypeTable, extract_field_types};
pub use parser::parse_schema;
pub use types::{DEFAULT_TAG_PREFIX, FieldSpec, NodeKind, NodeSchema};
pub use validation::validate_schema;
