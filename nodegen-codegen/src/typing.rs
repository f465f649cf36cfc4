//! Field typing policies.
//!
//! The class emitter is the same for every run; only the way a field's type is
//! chosen differs. [`TypedFields`] copies the type declared on the base class,
//! [`UntypedFields`] erases every field to `var`.

use crate::error::CodegenError;
use nodegen_schema::{FieldSpec, FieldTypeTable, NodeKind};
use std::fmt;
use std::str::FromStr;

/// Keyword used for fields without a static type.
pub const DYNAMIC_TYPE: &str = "var";

const TYPED_PREAMBLE: &[&str] = &[
    "import 'package:Birb/utils/ast/ast_node.dart';",
    "import 'package:Birb/lexer/token.dart';",
    "import 'package:Birb/utils/AST.dart';",
];

const UNTYPED_PREAMBLE: &[&str] = &["import 'ast_node.dart';", "import '../AST.dart';"];

/// Chooses the declared type of each generated field.
pub trait FieldTyping {
    /// Short policy name used in logs.
    fn name(&self) -> &'static str;

    /// Import lines written when the target does not override them.
    fn default_preamble(&self) -> &'static [&'static str];

    /// Returns the type to declare for `field` of `kind`.
    ///
    /// # Errors
    /// Returns `CodegenError` if the policy cannot type the field.
    fn resolve(&self, kind: &NodeKind, field: &FieldSpec) -> Result<&str, CodegenError>;
}

/// Emits the type each field is declared with on the base class.
#[derive(Debug, Clone, Copy)]
pub struct TypedFields<'a> {
    table: &'a FieldTypeTable,
}

impl<'a> TypedFields<'a> {
    /// Creates a typed policy backed by `table`.
    #[must_use]
    pub fn new(table: &'a FieldTypeTable) -> Self {
        Self { table }
    }
}

impl FieldTyping for TypedFields<'_> {
    fn name(&self) -> &'static str {
        "typed"
    }

    fn default_preamble(&self) -> &'static [&'static str] {
        TYPED_PREAMBLE
    }

    fn resolve(&self, kind: &NodeKind, field: &FieldSpec) -> Result<&str, CodegenError> {
        self.table
            .get(&field.name)
            .ok_or_else(|| CodegenError::UnresolvedFieldType {
                field: field.name.clone(),
                class_name: kind.class_name.clone(),
                line: kind.line,
            })
    }
}

/// Emits every field as `var`, never consulting the base class.
#[derive(Debug, Clone, Copy, Default)]
pub struct UntypedFields;

impl FieldTyping for UntypedFields {
    fn name(&self) -> &'static str {
        "untyped"
    }

    fn default_preamble(&self) -> &'static [&'static str] {
        UNTYPED_PREAMBLE
    }

    fn resolve(&self, _kind: &NodeKind, _field: &FieldSpec) -> Result<&str, CodegenError> {
        Ok(DYNAMIC_TYPE)
    }
}

/// Emission strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Field types recovered from the base class.
    #[default]
    Typed,
    /// Every field declared `var`.
    Untyped,
}

impl Strategy {
    /// Returns true if the strategy needs the base class source.
    #[must_use]
    pub const fn needs_base(self) -> bool {
        matches!(self, Self::Typed)
    }

    /// Returns the lowercase name of the strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Typed => "typed",
            Self::Untyped => "untyped",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "typed" => Ok(Self::Typed),
            "untyped" => Ok(Self::Untyped),
            _ => Err(CodegenError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}
