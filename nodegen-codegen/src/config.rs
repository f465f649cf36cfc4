//! Generation run configuration.

use crate::dart::DartTarget;
use crate::typing::Strategy;
use nodegen_schema::DEFAULT_BASE_MARKER;
use std::path::{Path, PathBuf};

/// Builder describing one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    schema_path: PathBuf,
    base_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    strategy: Strategy,
    marker: String,
    target: DartTarget,
}

impl GeneratorConfig {
    /// Creates a configuration reading the schema at `schema_path`.
    #[must_use]
    pub fn new(schema_path: impl Into<PathBuf>) -> Self {
        Self {
            schema_path: schema_path.into(),
            base_path: None,
            output_path: None,
            strategy: Strategy::default(),
            marker: DEFAULT_BASE_MARKER.to_string(),
            target: DartTarget::default(),
        }
    }

    /// Sets the base node class source.
    #[must_use]
    pub fn base(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Sets the destination file. Without one the code is only returned.
    #[must_use]
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Sets the emission strategy.
    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the line that opens the base class.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Sets the names used in the generated file.
    #[must_use]
    pub fn target(mut self, target: DartTarget) -> Self {
        self.target = target;
        self
    }

    /// Schema file path.
    #[must_use]
    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    /// Base class source path, if set.
    #[must_use]
    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }

    /// Destination path, if set.
    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// Selected strategy.
    #[must_use]
    pub fn get_strategy(&self) -> Strategy {
        self.strategy
    }

    /// Base class marker line.
    #[must_use]
    pub fn get_marker(&self) -> &str {
        &self.marker
    }

    /// Target names.
    #[must_use]
    pub fn get_target(&self) -> &DartTarget {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new("misc/types");
        assert_eq!(config.schema_path(), Path::new("misc/types"));
        assert!(config.base_path().is_none());
        assert!(config.output_path().is_none());
        assert_eq!(config.get_strategy(), Strategy::Typed);
        assert_eq!(config.get_marker(), DEFAULT_BASE_MARKER);
        assert_eq!(config.get_target(), &DartTarget::default());
    }

    #[test]
    fn test_builder_chain() {
        let config = GeneratorConfig::new("types")
            .base("ast_node.dart")
            .output("ast_types.dart")
            .strategy(Strategy::Untyped)
            .marker("class Node {");

        assert_eq!(config.base_path(), Some(Path::new("ast_node.dart")));
        assert_eq!(config.output_path(), Some(Path::new("ast_types.dart")));
        assert_eq!(config.get_strategy(), Strategy::Untyped);
        assert_eq!(config.get_marker(), "class Node {");
    }
}
