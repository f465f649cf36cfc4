//! Dart code generation modules.

pub mod classes;
pub mod dispatcher;

pub use classes::ClassGenerator;
pub use dispatcher::DispatcherGenerator;

use crate::typing::FieldTyping;
use nodegen_schema::DEFAULT_TAG_PREFIX;

/// Names used in the generated Dart file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DartTarget {
    /// Class every generated node extends.
    pub base_class: String,
    /// Interface returned by the dispatcher.
    pub interface: String,
    /// Enum holding the type tags.
    pub enum_name: String,
    /// Name of the overridden type-tag field.
    pub tag_field: String,
    /// Name of the dispatcher function.
    pub dispatcher: String,
    /// Prefix of every enum member.
    pub tag_prefix: String,
    /// Import lines replacing the strategy's default preamble.
    pub imports: Option<Vec<String>>,
}

impl Default for DartTarget {
    fn default() -> Self {
        Self {
            base_class: "ASTNode".to_string(),
            interface: "AST".to_string(),
            enum_name: "ASTType".to_string(),
            tag_field: "type".to_string(),
            dispatcher: "initAST".to_string(),
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
            imports: None,
        }
    }
}

impl DartTarget {
    /// Returns the qualified enum constant for `tag`, e.g. `ASTType.AST_INTEGER`.
    #[must_use]
    pub fn enum_constant(&self, tag: &str) -> String {
        format!("{}.{}{}", self.enum_name, self.tag_prefix, tag)
    }

    /// Generates the import preamble followed by a blank line.
    #[must_use]
    pub fn generate_preamble(&self, typing: &dyn FieldTyping) -> String {
        let mut output = String::new();

        match &self.imports {
            Some(imports) => {
                for line in imports {
                    output.push_str(line);
                    output.push('\n');
                }
            }
            None => {
                for line in typing.default_preamble() {
                    output.push_str(line);
                    output.push('\n');
                }
            }
        }

        output.push('\n');
        output
    }
}
