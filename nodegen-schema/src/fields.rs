//! Field types recovered from the base node class.
//!
//! The base class is the source of truth for field types: every field a node
//! kind overrides is exposed there through an accessor such as
//! `String get value => _value;`.

use indexmap::IndexMap;

/// Line that opens the base node class in the default layout.
pub const DEFAULT_BASE_MARKER: &str = "class ASTNode implements AST {";

const ACCESSOR: &str = " get ";

/// Mapping from field name to its declared type, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTypeTable {
    types: IndexMap<String, String>,
}

impl FieldTypeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` as having type `ty`. A repeated name keeps the last type.
    pub fn insert(&mut self, name: impl Into<String>, ty: impl Into<String>) {
        self.types.insert(name.into(), ty.into());
    }

    /// Looks up the declared type of a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.types.get(name).map(String::as_str)
    }

    /// Returns true if the field is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no field is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over `(name, type)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Outcome of scanning a base class source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseScan {
    /// The marker line was found; the table may still be empty.
    Found(FieldTypeTable),
    /// The marker line never appeared in the source.
    MarkerNotFound,
}

impl BaseScan {
    /// Returns the table if the marker was found.
    #[must_use]
    pub fn into_table(self) -> Option<FieldTypeTable> {
        match self {
            Self::Found(table) => Some(table),
            Self::MarkerNotFound => None,
        }
    }

    /// Returns true if the marker was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Extracts accessor-declared field types from a base class source.
///
/// Scanning starts at the first line equal to `marker` (after trimming) and
/// runs to the end of the source. Lines before the marker are ignored.
#[must_use]
pub fn extract_field_types(source: &str, marker: &str) -> BaseScan {
    let marker = marker.trim();
    let mut lines = source.lines().map(str::trim);

    if !lines.any(|line| line == marker) {
        tracing::debug!(marker, "base class marker not found");
        return BaseScan::MarkerNotFound;
    }

    let mut table = FieldTypeTable::new();
    for line in lines {
        if let Some((name, ty)) = parse_accessor(line) {
            tracing::debug!(field = name, ty, "recovered field type");
            table.insert(name, ty);
        }
    }

    BaseScan::Found(table)
}

/// Splits `<type> get <name> ...` into `(name, type)`.
fn parse_accessor(line: &str) -> Option<(&str, &str)> {
    if line.starts_with("//") {
        return None;
    }

    let (ty, rest) = line.split_once(ACCESSOR)?;
    let ty = ty.trim();
    let rest = rest.trim_start();
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
        .unwrap_or(rest.len());
    let name = &rest[..end];

    if ty.is_empty() || name.is_empty() {
        None
    } else {
        Some((name, ty))
    }
}
