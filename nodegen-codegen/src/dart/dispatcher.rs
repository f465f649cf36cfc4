//! Construction dispatcher code generation.

use super::DartTarget;
use nodegen_schema::NodeSchema;

/// Generator for the function mapping a type tag to a fresh node instance.
pub struct DispatcherGenerator<'a> {
    target: &'a DartTarget,
}

impl<'a> DispatcherGenerator<'a> {
    /// Creates a new dispatcher generator.
    #[must_use]
    pub fn new(target: &'a DartTarget) -> Self {
        Self { target }
    }

    /// Generates the dispatcher: one branch per kind, then the base class fallback.
    #[must_use]
    pub fn generate(&self, schema: &NodeSchema) -> String {
        let mut output = String::new();
        let param = &self.target.tag_field;

        output.push_str(&format!(
            "{} {}({} {}) {{\n",
            self.target.interface, self.target.dispatcher, self.target.enum_name, param
        ));

        for kind in &schema.kinds {
            output.push_str(&format!(
                "  if ({} == {}) return {}();\n",
                param,
                self.target.enum_constant(&kind.tag),
                kind.class_name
            ));
        }

        output.push_str(&format!("  return {}();\n", self.target.base_class));
        output.push_str("}\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodegen_schema::parse_schema;

    #[test]
    fn test_generate_dispatcher() {
        let schema = parse_schema("h\nINTEGER IntegerNode value\nSTRING StringNode value\n")
            .expect("Failed to parse");
        let target = DartTarget::default();
        let output = DispatcherGenerator::new(&target).generate(&schema);

        assert_eq!(
            output,
            "AST initAST(ASTType type) {\n\
             \x20 if (type == ASTType.AST_INTEGER) return IntegerNode();\n\
             \x20 if (type == ASTType.AST_STRING) return StringNode();\n\
             \x20 return ASTNode();\n\
             }\n"
        );
    }

    #[test]
    fn test_generate_empty_dispatcher() {
        let schema = parse_schema("h\n").expect("Failed to parse");
        let target = DartTarget::default();
        let output = DispatcherGenerator::new(&target).generate(&schema);

        assert_eq!(output, "AST initAST(ASTType type) {\n  return ASTNode();\n}\n");
    }

    #[test]
    fn test_custom_names() {
        let schema = parse_schema("h\nLEAF Leaf\n").expect("Failed to parse");
        let target = DartTarget {
            base_class: "Node".to_string(),
            interface: "INode".to_string(),
            enum_name: "Kind".to_string(),
            dispatcher: "makeNode".to_string(),
            tag_prefix: "K_".to_string(),
            ..DartTarget::default()
        };
        let output = DispatcherGenerator::new(&target).generate(&schema);

        assert!(output.starts_with("INode makeNode(Kind type) {\n"));
        assert!(output.contains("  if (type == Kind.K_LEAF) return Leaf();\n"));
        assert!(output.contains("  return Node();\n"));
    }
}
