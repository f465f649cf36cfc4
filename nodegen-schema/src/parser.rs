//! Node-kind schema parser.
//!
//! The schema is line oriented. The first line is a free-form header and is
//! never parsed. Every following non-blank line has the shape
//!
//! ```text
//! <TAG> <ClassName> [field | field=default]*
//! ```

use crate::error::ParseError;
use crate::types::{FieldSpec, NodeKind, NodeSchema};

/// A whitespace-delimited token and its position on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text.
    pub text: &'a str,
    /// 1-based column of the first character.
    pub column: usize,
}

/// Splits a line into whitespace-delimited tokens.
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for (column, (idx, c)) in line.char_indices().enumerate() {
        match (c.is_whitespace(), start) {
            (true, Some((begin, col))) => {
                tokens.push(Token {
                    text: &line[begin..idx],
                    column: col,
                });
                start = None;
            }
            (false, None) => start = Some((idx, column + 1)),
            _ => {}
        }
    }

    if let Some((begin, col)) = start {
        tokens.push(Token {
            text: &line[begin..],
            column: col,
        });
    }

    tokens
}

/// Parses a node-kind schema from a string.
///
/// # Arguments
/// * `text` - Schema content, including the header line
///
/// # Returns
/// Parsed schema or the first parse error.
///
/// # Errors
/// Returns `ParseError` if a record line lacks a tag or class name, or if a
/// field token has an empty name or default.
pub fn parse_schema(text: &str) -> Result<NodeSchema, ParseError> {
    let mut lines = text.lines();
    let mut schema = NodeSchema::new(lines.next().unwrap_or_default().trim());

    for (idx, line) in lines.enumerate() {
        // Header is line 1.
        let line_no = idx + 2;
        let tokens = tokenize(line);
        if tokens.is_empty() {
            continue;
        }

        let kind = parse_record(line_no, line, &tokens)?;
        tracing::debug!(
            line = line_no,
            tag = %kind.tag,
            class = %kind.class_name,
            fields = kind.fields.len(),
            "parsed node kind"
        );
        schema.add_kind(kind);
    }

    Ok(schema)
}

/// Parses one non-blank record line.
fn parse_record(line_no: usize, line: &str, tokens: &[Token<'_>]) -> Result<NodeKind, ParseError> {
    let [tag, class_name, fields @ ..] = tokens else {
        return Err(ParseError::malformed(line_no, line.trim()));
    };

    let mut kind = NodeKind::new(tag.text, class_name.text, line_no);
    for token in fields {
        kind.add_field(parse_field(line_no, token)?);
    }

    Ok(kind)
}

/// Parses a `name` or `name=default` token.
fn parse_field(line_no: usize, token: &Token<'_>) -> Result<FieldSpec, ParseError> {
    let Some((name, default)) = token.text.split_once('=') else {
        return Ok(FieldSpec::bare(token.text));
    };

    if name.is_empty() {
        return Err(ParseError::invalid_field(
            line_no,
            token.column,
            token.text,
            "missing field name before '='",
        ));
    }
    if default.is_empty() {
        return Err(ParseError::invalid_field(
            line_no,
            token.column,
            token.text,
            "missing default value after '='",
        ));
    }

    Ok(FieldSpec::with_default(name, default))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_SCHEMA: &str = "\
TAG CLASS FIELDS...
INTEGER IntegerNode value
STRING StringNode value

NOOP NoopNode
COMPOUND CompoundNode children=[] scope
";

    #[test]
    fn test_tokenize_columns() {
        let tokens = tokenize("  INTEGER\tIntegerNode  value=0");
        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, ["INTEGER", "IntegerNode", "value=0"]);
        assert_eq!(tokens[0].column, 3);
        assert_eq!(tokens[1].column, 11);
        assert_eq!(tokens[2].column, 24);
    }

    #[test]
    fn test_tokenize_blank() {
        assert!(tokenize("   \t ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_parse_simple_schema() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        assert_eq!(schema.header, "TAG CLASS FIELDS...");
        assert_eq!(schema.len(), 4);

        let tags: Vec<_> = schema.kinds.iter().map(|k| k.tag.as_str()).collect();
        assert_eq!(tags, ["INTEGER", "STRING", "NOOP", "COMPOUND"]);
    }

    #[test]
    fn test_parse_line_numbers_skip_blanks() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");
        assert_eq!(schema.get_kind("INTEGER").map(|k| k.line), Some(2));
        assert_eq!(schema.get_kind("NOOP").map(|k| k.line), Some(5));
    }

    #[test]
    fn test_parse_fields_and_defaults() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");
        let compound = schema.get_kind("COMPOUND").unwrap();

        assert_eq!(compound.class_name, "CompoundNode");
        assert_eq!(
            compound.fields,
            vec![
                FieldSpec::with_default("children", "[]"),
                FieldSpec::bare("scope"),
            ]
        );
        assert!(schema.get_kind("NOOP").unwrap().fields.is_empty());
    }

    #[test]
    fn test_default_kept_verbatim() {
        let schema =
            parse_schema("header\nBINOP BinOpNode op=a==b name='x'\n").expect("Failed to parse");
        let kind = &schema.kinds[0];
        assert_eq!(kind.fields[0], FieldSpec::with_default("op", "a==b"));
        assert_eq!(kind.fields[1], FieldSpec::with_default("name", "'x'"));
    }

    #[test]
    fn test_header_never_parsed() {
        let schema = parse_schema("BOOL\nBOOL BoolNode\n").expect("Failed to parse");
        assert_eq!(schema.header, "BOOL");
        assert_eq!(schema.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let schema = parse_schema("").expect("Failed to parse");
        assert!(schema.is_empty());
        assert!(parse_schema("only a header").expect("Failed to parse").is_empty());
    }

    #[test]
    fn test_single_token_line_rejected() {
        let err = parse_schema("header\nINTEGER IntegerNode value\nBOOL\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedLine { line: 3, ref found } if found == "BOOL"
        ));
    }

    #[test]
    fn test_empty_field_name_rejected() {
        let err = parse_schema("header\nINTEGER IntegerNode =1\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidField { line: 2, column: 21, .. }
        ));
    }

    #[test]
    fn test_empty_default_rejected() {
        let err = parse_schema("header\nINTEGER IntegerNode value=\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidField { line: 2, .. }));
    }
}
