//! Prelude module for convenient imports.
//!
//! ```ignore
//! use nodegen::prelude::*;
//! ```

// Schema types
pub use nodegen_schema::{
    BaseScan, FieldSpec, FieldTypeTable, NodeKind, NodeSchema, ParseError, SchemaError,
    extract_field_types, parse_schema, validate_schema,
};

// Codegen types
pub use nodegen_codegen::{
    CodegenError, DartTarget, FieldTyping, GenerationReport, Generator, GeneratorConfig,
    Strategy, TypedFields, UntypedFields,
};
