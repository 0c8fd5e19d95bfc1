use pylit_core::error::PylitError;
use pylit_core::parse;
use pylit_core::parser::MAX_NESTING_DEPTH;
use pylit_core::value::{Scalar, Value};

fn int(n: i64) -> Value {
    Value::Scalar(Scalar::Int(n))
}

fn s(text: &str) -> Value {
    Value::Scalar(Scalar::Str(text.to_string()))
}

/// Helper: parse and unwrap the expected syntax error.
fn syntax_error(input: &str) -> (&'static str, &'static str, usize) {
    match parse(input).unwrap_err() {
        PylitError::Syntax {
            expected,
            found,
            offset,
        } => (expected, found, offset),
        other => panic!("expected syntax error for {input:?}, got {other:?}"),
    }
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn parse_integer() {
    assert_eq!(parse("42").unwrap(), int(42));
}

#[test]
fn parse_float() {
    assert_eq!(parse("3.14").unwrap(), Value::Scalar(Scalar::Float(3.14)));
}

#[test]
fn parse_string() {
    assert_eq!(parse("'hello'").unwrap(), s("hello"));
}

#[test]
fn parse_booleans_and_none() {
    assert_eq!(parse("True").unwrap(), Value::Scalar(Scalar::Bool(true)));
    assert_eq!(parse("False").unwrap(), Value::Scalar(Scalar::Bool(false)));
    assert_eq!(parse("None").unwrap(), Value::Scalar(Scalar::None));
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn parse_empty_list() {
    assert_eq!(parse("[]").unwrap(), Value::List(vec![]));
}

#[test]
fn parse_list() {
    assert_eq!(
        parse("[1, 2, 3]").unwrap(),
        Value::List(vec![int(1), int(2), int(3)])
    );
}

#[test]
fn parse_list_trailing_comma() {
    assert_eq!(
        parse("[1, 2, 3,]").unwrap(),
        Value::List(vec![int(1), int(2), int(3)])
    );
}

#[test]
fn parse_nested_lists() {
    assert_eq!(
        parse("[[1], [2, [3]]]").unwrap(),
        Value::List(vec![
            Value::List(vec![int(1)]),
            Value::List(vec![int(2), Value::List(vec![int(3)])]),
        ])
    );
}

// ============================================================================
// Tuples
// ============================================================================

#[test]
fn parse_empty_tuple() {
    assert_eq!(parse("()").unwrap(), Value::Tuple(vec![]));
}

#[test]
fn parse_tuple() {
    assert_eq!(
        parse("(1, 'a', None)").unwrap(),
        Value::Tuple(vec![int(1), s("a"), Value::Scalar(Scalar::None)])
    );
}

#[test]
fn parse_one_tuple_with_trailing_comma() {
    assert_eq!(parse("(1,)").unwrap(), Value::Tuple(vec![int(1)]));
}

#[test]
fn parse_parenthesized_value_is_a_tuple() {
    // No expression grouping in this grammar: "(1)" is a one-element tuple.
    assert_eq!(parse("(1)").unwrap(), Value::Tuple(vec![int(1)]));
}

// ============================================================================
// Dict / set disambiguation
// ============================================================================

#[test]
fn parse_empty_braces_commit_to_dict() {
    assert_eq!(parse("{}").unwrap(), Value::Dict(vec![]));
}

#[test]
fn parse_dict() {
    assert_eq!(
        parse("{'a': 1, 'b': 2}").unwrap(),
        Value::Dict(vec![(s("a"), int(1)), (s("b"), int(2))])
    );
}

#[test]
fn parse_dict_trailing_comma() {
    assert_eq!(
        parse("{'a': 1,}").unwrap(),
        Value::Dict(vec![(s("a"), int(1))])
    );
}

#[test]
fn parse_set() {
    assert_eq!(
        parse("{1, 2, 3}").unwrap(),
        Value::Set(vec![int(1), int(2), int(3)])
    );
}

#[test]
fn parse_set_trailing_comma() {
    assert_eq!(parse("{1,}").unwrap(), Value::Set(vec![int(1)]));
}

#[test]
fn parse_single_element_set() {
    // One value and no colon after it commits to a set.
    assert_eq!(parse("{1}").unwrap(), Value::Set(vec![int(1)]));
}

#[test]
fn parse_set_keeps_duplicates_and_order() {
    assert_eq!(
        parse("{3, 1, 3}").unwrap(),
        Value::Set(vec![int(3), int(1), int(3)])
    );
}

#[test]
fn parse_dict_keeps_duplicate_keys_in_tree() {
    // Duplicates survive at the tree level; only conversion collapses them.
    assert_eq!(
        parse("{'a': 1, 'a': 2}").unwrap(),
        Value::Dict(vec![(s("a"), int(1)), (s("a"), int(2))])
    );
}

#[test]
fn parse_dict_with_non_string_keys() {
    assert_eq!(
        parse("{1: 'one', None: 'nil'}").unwrap(),
        Value::Dict(vec![
            (int(1), s("one")),
            (Value::Scalar(Scalar::None), s("nil")),
        ])
    );
}

#[test]
fn parse_dict_with_container_key() {
    assert_eq!(
        parse("{(1, 2): 'point'}").unwrap(),
        Value::Dict(vec![(Value::Tuple(vec![int(1), int(2)]), s("point"))])
    );
}

#[test]
fn parse_nested_mixed_containers() {
    assert_eq!(
        parse("{'rows': [(1, {2}), {'k': None}]}").unwrap(),
        Value::Dict(vec![(
            s("rows"),
            Value::List(vec![
                Value::Tuple(vec![int(1), Value::Set(vec![int(2)])]),
                Value::Dict(vec![(s("k"), Value::Scalar(Scalar::None))]),
            ]),
        )])
    );
}

// ============================================================================
// Syntax errors
// ============================================================================

#[test]
fn unclosed_list_names_the_missing_bracket() {
    let (expected, found, offset) = syntax_error("[1, 2,");
    assert_eq!(expected, "']'");
    assert_eq!(found, "end of input");
    assert_eq!(offset, 6);
}

#[test]
fn unclosed_dict_names_the_missing_brace() {
    let (expected, found, offset) = syntax_error("{'a': 1,");
    assert_eq!(expected, "'}'");
    assert_eq!(found, "end of input");
    assert_eq!(offset, 8);
}

#[test]
fn dict_missing_colon() {
    // After the first pair commits to a dict, every key needs a colon.
    let (expected, found, _) = syntax_error("{'a': 1, 'b' 2}");
    assert_eq!(expected, "':'");
    assert_eq!(found, "number");
}

#[test]
fn dict_missing_value_after_colon() {
    let (expected, found, _) = syntax_error("{'a': }");
    assert_eq!(expected, "a value");
    assert_eq!(found, "'}'");
}

#[test]
fn set_then_colon_is_an_error() {
    // "{1, 2: 3}" committed to a set at the first comma; the colon cannot
    // re-open the mapping form.
    let (expected, found, offset) = syntax_error("{1, 2: 3}");
    assert_eq!(expected, "'}'");
    assert_eq!(found, "':'");
    assert_eq!(offset, 5);
}

#[test]
fn bare_identifier_is_rejected_by_the_grammar() {
    let (expected, found, offset) = syntax_error("foo");
    assert_eq!(expected, "a value");
    assert_eq!(found, "identifier");
    assert_eq!(offset, 0);
}

#[test]
fn empty_input_is_a_syntax_error() {
    let (expected, found, offset) = syntax_error("");
    assert_eq!(expected, "a value");
    assert_eq!(found, "end of input");
    assert_eq!(offset, 0);
}

#[test]
fn trailing_tokens_after_root_are_rejected() {
    let (expected, found, offset) = syntax_error("42 43");
    assert_eq!(expected, "end of input");
    assert_eq!(found, "number");
    assert_eq!(offset, 3);
}

#[test]
fn unterminated_string_surfaces_in_the_parser() {
    // The scanner is lenient about the missing quote; the parser then
    // reports the structurally missing bracket.
    let (expected, found, _) = syntax_error("[1, 'abc");
    assert_eq!(expected, "']'");
    assert_eq!(found, "end of input");
}

#[test]
fn double_comma_is_an_error() {
    let (expected, found, offset) = syntax_error("[1,, 2]");
    assert_eq!(expected, "a value");
    assert_eq!(found, "','");
    assert_eq!(offset, 3);
}

#[test]
fn error_display_names_expected_and_found() {
    let message = parse("[1, 2,").unwrap_err().to_string();
    assert!(message.contains("']'"), "message: {message}");
    assert!(message.contains("end of input"), "message: {message}");
    assert!(message.contains("offset 6"), "message: {message}");
}

// ============================================================================
// Depth guard
// ============================================================================

#[test]
fn deep_nesting_within_cap_parses() {
    let depth = MAX_NESTING_DEPTH;
    let input = format!("{}42{}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse(&input).is_ok());
}

#[test]
fn nesting_beyond_cap_is_too_deep() {
    let depth = MAX_NESTING_DEPTH + 1;
    let input = format!("{}42{}", "[".repeat(depth), "]".repeat(depth));
    match parse(&input).unwrap_err() {
        PylitError::TooDeep { limit, offset } => {
            assert_eq!(limit, MAX_NESTING_DEPTH);
            assert_eq!(offset, MAX_NESTING_DEPTH);
        }
        other => panic!("expected TooDeep, got {other:?}"),
    }
}
