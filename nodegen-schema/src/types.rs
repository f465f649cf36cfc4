//! Node-kind schema definitions.
//!
//! A schema is an ordered list of node kinds. Each kind names a type tag, the
//! class to generate for it and the fields that class overrides.

/// Prefix of every member of the generated type-tag enum.
pub const DEFAULT_TAG_PREFIX: &str = "AST_";

/// A single field of a node kind, optionally carrying a default expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name.
    pub name: String,
    /// Default value, copied verbatim from the schema.
    pub default: Option<String>,
}

impl FieldSpec {
    /// Creates a field without a default.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// Creates a field initialized to `default`.
    #[must_use]
    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }

    /// Returns true if the field carries a default expression.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// One node kind, i.e. one record line of the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeKind {
    /// Type tag, suffix of the enum member.
    pub tag: String,
    /// Name of the generated class.
    pub class_name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldSpec>,
    /// 1-based schema line this kind was read from.
    pub line: usize,
}

impl NodeKind {
    /// Creates a node kind without fields.
    #[must_use]
    pub fn new(tag: impl Into<String>, class_name: impl Into<String>, line: usize) -> Self {
        Self {
            tag: tag.into(),
            class_name: class_name.into(),
            fields: Vec::new(),
            line,
        }
    }

    /// Adds a field to the kind.
    pub fn add_field(&mut self, field: FieldSpec) {
        self.fields.push(field);
    }

    /// Returns the enum member for this kind using the default prefix.
    #[must_use]
    pub fn enum_member(&self) -> String {
        self.enum_member_with(DEFAULT_TAG_PREFIX)
    }

    /// Returns the enum member for this kind using `prefix`.
    #[must_use]
    pub fn enum_member_with(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.tag)
    }
}

/// A parsed schema file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSchema {
    /// The discarded first line.
    pub header: String,
    /// Node kinds in declaration order.
    pub kinds: Vec<NodeKind>,
}

impl NodeSchema {
    /// Creates an empty schema with the given header line.
    #[must_use]
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            kinds: Vec::new(),
        }
    }

    /// Adds a node kind.
    pub fn add_kind(&mut self, kind: NodeKind) {
        self.kinds.push(kind);
    }

    /// Finds a kind by its type tag.
    #[must_use]
    pub fn get_kind(&self, tag: &str) -> Option<&NodeKind> {
        self.kinds.iter().find(|k| k.tag == tag)
    }

    /// Returns the number of kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns true if the schema declares no kinds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Total number of fields across all kinds.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.kinds.iter().map(|k| k.fields.len()).sum()
    }
}
