//! # Nodegen Codegen
//!
//! Dart code generation from node-kind schemas.
//!
//! This crate provides:
//! - One node class per schema record, extending the base node class
//! - A construction dispatcher mapping type tags to classes
//! - Typed and untyped field emission policies
//! - A file-to-file generation run

pub mod config;
pub mod dart;
pub mod error;
pub mod generator;
pub mod typing;

pub use config::GeneratorConfig;
pub use dart::DartTarget;
pub use error::CodegenError;
pub use generator::{GenerationReport, Generator};
pub use typing::{FieldTyping, Strategy, TypedFields, UntypedFields};

use nodegen_schema::{NodeSchema, extract_field_types, parse_schema, validate_schema};
use std::path::Path;

/// Generates Dart code from a schema string.
///
/// # Arguments
/// * `base` - Base node class source, required by the typed strategy
/// * `schema` - Node-kind schema content
/// * `strategy` - Field emission strategy
/// * `target` - Names used in the generated file
/// * `marker` - Line opening the base class
///
/// # Returns
/// Generated Dart code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or field typing fails.
pub fn generate_from_str(
    base: Option<&str>,
    schema: &str,
    strategy: Strategy,
    target: &DartTarget,
    marker: &str,
) -> Result<String, CodegenError> {
    let schema = load_schema(schema)?;
    render(&schema, base, strategy, target, marker)
}

/// Runs a configured generation: read, render in memory, then write once.
///
/// The destination is only touched after the whole file rendered, so a
/// failed run leaves any previous output in place.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, generation, or writing fails.
pub fn run(config: &GeneratorConfig) -> Result<GenerationReport, CodegenError> {
    let strategy = config.get_strategy();
    tracing::info!(
        schema = %config.schema_path().display(),
        %strategy,
        "generating node classes"
    );

    let schema = load_schema(&read_input(config.schema_path())?)?;

    let base = match (strategy.needs_base(), config.base_path()) {
        (true, Some(path)) => Some(read_input(path)?),
        (true, None) => return Err(CodegenError::MissingBaseSource),
        (false, _) => None,
    };

    let code = render(
        &schema,
        base.as_deref(),
        strategy,
        config.get_target(),
        config.get_marker(),
    )?;

    if let Some(path) = config.output_path() {
        std::fs::write(path, &code).map_err(|e| CodegenError::write(path, e))?;
    }

    let report = GenerationReport {
        classes: schema.len(),
        fields: schema.field_count(),
        output: config.output_path().map(Path::to_path_buf),
        code,
    };
    tracing::info!(
        classes = report.classes,
        fields = report.fields,
        bytes = report.bytes(),
        "generation finished"
    );

    Ok(report)
}

fn read_input(path: &Path) -> Result<String, CodegenError> {
    std::fs::read_to_string(path).map_err(|e| CodegenError::read(path, e))
}

fn load_schema(text: &str) -> Result<NodeSchema, CodegenError> {
    let schema = parse_schema(text)?;
    validate_schema(&schema)?;
    Ok(schema)
}

fn render(
    schema: &NodeSchema,
    base: Option<&str>,
    strategy: Strategy,
    target: &DartTarget,
    marker: &str,
) -> Result<String, CodegenError> {
    match strategy {
        Strategy::Untyped => Generator::new(target, &UntypedFields).generate(schema),
        Strategy::Typed => {
            let source = base.ok_or(CodegenError::MissingBaseSource)?;
            let table = extract_field_types(source, marker)
                .into_table()
                .ok_or_else(|| CodegenError::MissingBaseMarker {
                    marker: marker.to_string(),
                })?;
            if table.is_empty() && schema.field_count() > 0 {
                tracing::warn!(marker, "base class declares no accessors");
            }
            tracing::debug!(fields = table.len(), "recovered base class field types");

            Generator::new(target, &TypedFields::new(&table)).generate(schema)
        }
    }
}
