//! # Nodegen
//!
//! Declarative generator for Dart abstract-syntax-tree node classes.
//!
//! One schema line such as `INTEGER IntegerNode value` becomes a class
//! extending the base node class, with a type tag and typed fields, plus a
//! branch in the generated construction dispatcher.
//!
//! ## Quick Start
//!
//! ```ignore
//! use nodegen::prelude::*;
//!
//! let config = GeneratorConfig::new("misc/types")
//!     .base("lib/utils/ast/ast_node.dart")
//!     .output("lib/utils/ast/ast_types.dart")
//!     .strategy(Strategy::Typed);
//!
//! let report = nodegen::run(&config)?;
//! println!("{} classes", report.classes);
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema parsing, validation and base class field scanning
//! - [`codegen`] - Dart class and dispatcher generation

pub mod prelude;

/// Schema parsing, validation and base class field scanning.
pub mod schema {
    pub use nodegen_schema::*;
}

/// Dart code generation from node-kind schemas.
pub mod codegen {
    pub use nodegen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use nodegen_codegen::{
    CodegenError, DartTarget, GenerationReport, GeneratorConfig, Strategy, generate_from_str,
    run,
};
pub use nodegen_schema::{NodeKind, NodeSchema, parse_schema};
