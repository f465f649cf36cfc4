use nodegen::prelude::*;
use nodegen::schema::DEFAULT_BASE_MARKER;

const BASE_SOURCE: &str = include_str!("../../demos/birb/ast_node.dart");
const SCHEMA: &str = include_str!("../../demos/birb/types");

fn generate(strategy: Strategy) -> String {
    nodegen::generate_from_str(
        Some(BASE_SOURCE),
        SCHEMA,
        strategy,
        &DartTarget::default(),
        DEFAULT_BASE_MARKER,
    )
    .expect("demo schema should generate")
}

#[test]
fn test_demo_every_field_resolves() {
    let table = extract_field_types(BASE_SOURCE, DEFAULT_BASE_MARKER)
        .into_table()
        .expect("marker present");
    let schema = parse_schema(SCHEMA).expect("Failed to parse");

    for kind in &schema.kinds {
        for field in &kind.fields {
            assert!(table.contains(&field.name), "{} not declared", field.name);
        }
    }
}

#[test]
fn test_demo_typed_output() {
    let code = generate(Strategy::Typed);

    assert_eq!(code.matches(" extends ASTNode {").count(), 9);
    assert_eq!(code.matches("  if (type == ASTType.AST_").count(), 9);
    assert!(code.contains("  List<AST> compoundValue = [];\n"));
    assert!(code.contains("  Token binaryOperator;\n"));
    assert!(code.contains("  bool isFinal = false;\n"));
    assert!(code.contains("  if (type == ASTType.AST_NULL) return NullNode();\n"));
    assert!(!code.contains("var "));
}

#[test]
fn test_demo_untyped_output() {
    let code = generate(Strategy::Untyped);

    assert_eq!(code.matches(" extends ASTNode {").count(), 9);
    assert!(code.contains("  var compoundValue = [];\n"));
    assert!(code.contains("  var binaryOperator;\n"));
    assert!(!code.contains("List<AST>"));
}

#[test]
fn test_demo_strategies_share_structure() {
    let typed = generate(Strategy::Typed);
    let untyped = generate(Strategy::Untyped);

    let dispatcher = |code: &str| code[code.find("AST initAST(").unwrap()..].to_string();
    assert_eq!(dispatcher(&typed), dispatcher(&untyped));
}
