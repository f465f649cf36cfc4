//! Whole-file generation.

use crate::dart::{ClassGenerator, DartTarget, DispatcherGenerator};
use crate::error::CodegenError;
use crate::typing::FieldTyping;
use nodegen_schema::NodeSchema;
use std::path::PathBuf;

/// Renders a complete Dart source file from a validated schema.
///
/// Classes and the dispatcher are two independent passes over the same
/// immutable schema, so their order always agrees.
pub struct Generator<'a> {
    target: &'a DartTarget,
    typing: &'a dyn FieldTyping,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(target: &'a DartTarget, typing: &'a dyn FieldTyping) -> Self {
        Self { target, typing }
    }

    /// Generates the preamble, every class and the dispatcher.
    ///
    /// # Errors
    /// Returns `CodegenError` if the typing policy cannot type a field.
    pub fn generate(&self, schema: &NodeSchema) -> Result<String, CodegenError> {
        let mut output = self.target.generate_preamble(self.typing);
        output.push_str(&ClassGenerator::new(self.target, self.typing).generate(schema)?);
        output.push_str(&DispatcherGenerator::new(self.target).generate(schema));
        Ok(output)
    }
}

/// Summary of a finished generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Number of classes emitted.
    pub classes: usize,
    /// Number of fields emitted across all classes.
    pub fields: usize,
    /// Path written, if any.
    pub output: Option<PathBuf>,
    /// The generated source.
    pub code: String,
}

impl GenerationReport {
    /// Size of the generated source in bytes.
    #[must_use]
    pub fn bytes(&self) -> usize {
        self.code.len()
    }
}
