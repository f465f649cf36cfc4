//! Schema validation utilities.
//!
//! Tags and class names must be unique: the generated dispatcher is an ordered
//! chain and the generated file a flat list of classes, so a repeat would make
//! the two disagree about which record wins.

use crate::error::SchemaError;
use crate::types::NodeSchema;
use std::collections::HashMap;

/// Validates a parsed schema.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first duplicate.
///
/// # Errors
/// Returns `SchemaError` if a type tag or class name is declared twice.
pub fn validate_schema(schema: &NodeSchema) -> Result<(), SchemaError> {
    let mut seen_tags: HashMap<&str, usize> = HashMap::new();
    let mut seen_classes: HashMap<&str, usize> = HashMap::new();

    for kind in &schema.kinds {
        if let Some(&first_line) = seen_tags.get(kind.tag.as_str()) {
            return Err(SchemaError::DuplicateTag {
                tag: kind.tag.clone(),
                first_line,
                line: kind.line,
            });
        }
        seen_tags.insert(&kind.tag, kind.line);

        if let Some(&first_line) = seen_classes.get(kind.class_name.as_str()) {
            return Err(SchemaError::DuplicateClassName {
                class_name: kind.class_name.clone(),
                first_line,
                line: kind.line,
            });
        }
        seen_classes.insert(&kind.class_name, kind.line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;

    #[test]
    fn test_validate_valid_schema() {
        let schema = parse_schema("header\nINTEGER IntegerNode value\nSTRING StringNode value\n")
            .expect("Failed to parse");
        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn test_validate_empty_schema() {
        let schema = parse_schema("header\n").expect("Failed to parse");
        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn test_validate_duplicate_tag() {
        let schema = parse_schema("header\nINTEGER IntegerNode\n\nINTEGER OtherNode\n")
            .expect("Failed to parse");
        let result = validate_schema(&schema);
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateTag { ref tag, first_line: 2, line: 4 }) if tag == "INTEGER"
        ));
    }

    #[test]
    fn test_validate_duplicate_class_name() {
        let schema = parse_schema("header\nINTEGER IntegerNode\nINT IntegerNode\n")
            .expect("Failed to parse");
        let result = validate_schema(&schema);
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateClassName { first_line: 2, line: 3, .. })
        ));
    }
}
