//! Property-based tests for the scanner and the evaluator.
//!
//! These use proptest to generate literals and arithmetic expressions and
//! verify:
//! 1. Number and string literals scan to a single token carrying their value.
//! 2. Well-formed expression statements run without output or error.
//! 3. A number stored in a global prints the same as the literal's value.

use lox::{
    error::Diagnostics,
    get_output,
    interpreter::{
        lexer::{TokenKind, scan},
        value::core::Value,
    },
};
use proptest::prelude::*;

// -- Code Generation Strategies --

/// Generate a number literal, optionally with a fractional part.
fn number_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{1,8}(\\.[0-9]{1,6})?").expect("valid regex")
}

/// Generate the contents of a string literal: anything but a double quote.
fn string_body_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\"]{0,40}").expect("valid regex")
}

/// Generate a variable-free arithmetic expression over number literals.
fn expression_strategy() -> impl Strategy<Value = String> {
    number_strategy().prop_recursive(4, 32, 2, |inner| {
                         prop_oneof![(inner.clone(), prop::sample::select(vec!["+", "-", "*", "/"]), inner.clone())
                                         .prop_map(|(l, op, r)| format!("({l} {op} {r})")),
                                     inner.prop_map(|e| format!("-{e}"))]
                     })
}

/// Check if a string is a reserved keyword.
fn is_keyword(s: &str) -> bool {
    matches!(s,
             "and"
             | "class"
             | "else"
             | "false"
             | "for"
             | "fun"
             | "if"
             | "nil"
             | "or"
             | "print"
             | "return"
             | "super"
             | "this"
             | "true"
             | "var"
             | "while")
}

proptest! {
    #[test]
    fn number_literals_scan_to_their_value(src in number_strategy()) {
        let mut diagnostics = Diagnostics::default();
        let tokens = scan(&src, &mut diagnostics);

        prop_assert!(!diagnostics.had_syntax_error());
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].lexeme, &src);
        prop_assert_eq!(tokens[0].literal.clone(), Some(Value::Number(src.parse().unwrap())));
    }

    #[test]
    fn string_literals_scan_to_their_body(body in string_body_strategy()) {
        let src = format!("\"{body}\"");
        let mut diagnostics = Diagnostics::default();
        let tokens = scan(&src, &mut diagnostics);

        prop_assert!(!diagnostics.had_syntax_error());
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::String);
        prop_assert_eq!(tokens[0].literal.clone(), Some(Value::from(body.as_str())));
        prop_assert_eq!(tokens[0].line, 1 + body.matches('\n').count());
    }

    #[test]
    fn expression_statements_print_nothing(expr in expression_strategy()) {
        let result = get_output(&format!("{expr};"));

        prop_assert!(result.is_ok(), "{expr} failed: {:?}", result);
        prop_assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn printed_globals_round_trip(
        name in prop::string::string_regex("[a-z_][a-z0-9_]{0,12}")
                    .expect("valid regex")
                    .prop_filter("not a keyword", |s| !is_keyword(s)),
        value in number_strategy(),
    ) {
        let expected = format!("{}\n", Value::Number(value.parse().unwrap()));
        let output = get_output(&format!("var {name} = {value}; print {name};"));

        prop_assert_eq!(output.unwrap(), expected);
    }
}
