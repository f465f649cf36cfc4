//! Node class code generation.

use super::DartTarget;
use crate::error::CodegenError;
use crate::typing::FieldTyping;
use nodegen_schema::{FieldSpec, NodeKind, NodeSchema};

/// Generator for node class definitions.
pub struct ClassGenerator<'a> {
    target: &'a DartTarget,
    typing: &'a dyn FieldTyping,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(target: &'a DartTarget, typing: &'a dyn FieldTyping) -> Self {
        Self { target, typing }
    }

    /// Generates one class per node kind, in schema order.
    ///
    /// # Errors
    /// Returns `CodegenError` if the typing policy cannot type a field.
    pub fn generate(&self, schema: &NodeSchema) -> Result<String, CodegenError> {
        let mut output = String::new();

        for kind in &schema.kinds {
            output.push_str(&self.generate_class(kind)?);
        }

        Ok(output)
    }

    /// Generates a single class definition.
    fn generate_class(&self, kind: &NodeKind) -> Result<String, CodegenError> {
        let mut output = String::new();

        output.push_str(&format!(
            "class {} extends {} {{\n",
            kind.class_name, self.target.base_class
        ));
        output.push_str("  @override\n");
        output.push_str(&format!(
            "  {} {} = {};\n",
            self.target.enum_name,
            self.target.tag_field,
            self.target.enum_constant(&kind.tag)
        ));

        for field in &kind.fields {
            output.push_str(&self.generate_field(kind, field)?);
        }

        output.push_str("}\n\n");

        Ok(output)
    }

    /// Generates an overriding field declaration.
    fn generate_field(&self, kind: &NodeKind, field: &FieldSpec) -> Result<String, CodegenError> {
        let ty = self.typing.resolve(kind, field)?;
        tracing::debug!(
            class = %kind.class_name,
            field = %field.name,
            ty,
            policy = self.typing.name(),
            "emitting field"
        );

        let mut output = String::new();
        output.push_str("\n  @override\n");
        match &field.default {
            Some(default) => {
                output.push_str(&format!("  {} {} = {};\n", ty, field.name, default));
            }
            None => output.push_str(&format!("  {} {};\n", ty, field.name)),
        }

        Ok(output)
    }
}
