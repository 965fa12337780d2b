//! Property-based tests for the expression engine and the statement parser.
//!
//! These tests use proptest to generate inputs and verify that:
//! 1. Arbitrary text never makes the tokenizer, tree builder or statement
//!    parser panic.
//! 2. Parsing the same expression twice yields equal trees and equal values.
//! 3. Literal-only arithmetic matches native floating-point arithmetic.

use proptest::prelude::*;
use shunt::{
    evaluate, get_results,
    interpreter::{
        evaluator::core::{Context, Variables},
        parser::core::parse_expression,
    },
    parse_program,
};

/// Generate random strings over the characters the language uses.
fn source_like_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[0-9a-z+\-*/^=<>(){};. ]{0,80}").unwrap()
}

/// Generate expression tokens that are individually valid.
fn expression_token() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("^".to_string()),
        Just("==".to_string()),
        Just("<".to_string()),
        Just(">".to_string()),
        Just("++".to_string()),
        Just("sin".to_string()),
        Just("ctg".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
    ]
}

fn expression_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(expression_token(), 0..20).prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #[test]
    fn arbitrary_text_never_panics(source in source_like_string()) {
        let _ = parse_program(&source);
        let _ = evaluate(&source);
    }

    #[test]
    fn token_soup_never_panics(expression in expression_like_string()) {
        let _ = evaluate(&expression);
        let _ = get_results(&format!("return {expression};"));
    }

    #[test]
    fn reparsing_is_idempotent(expression in expression_like_string()) {
        let variables = Variables::new();
        let first = parse_expression(&expression, &variables);
        let second = parse_expression(&expression, &variables);
        prop_assert_eq!(&first, &second);

        if let (Ok(first), Ok(second)) = (first, second) {
            let left = Context::eval_expr(&first).map(f64::to_bits);
            let right = Context::eval_expr(&second).map(f64::to_bits);
            prop_assert_eq!(left, right);
        }
    }

    #[test]
    fn literal_arithmetic_matches_native(a in 0u32..10_000, b in 0u32..10_000, c in 1u32..100) {
        let (x, y, z) = (f64::from(a), f64::from(b), f64::from(c));

        prop_assert_eq!(evaluate(&format!("{a} + {b} * {c}")).unwrap(), x + y * z);
        prop_assert_eq!(evaluate(&format!("({a} - {b}) / {c}")).unwrap(), (x - y) / z);
        prop_assert_eq!(evaluate(&format!("{a} < {b}")).unwrap(), if x < y { 1.0 } else { 0.0 });
    }

    #[test]
    fn assignments_are_visible_in_program_order(values in prop::collection::vec(0u32..1000, 1..10)) {
        let program = values.iter()
                            .map(|v| format!("x = {v}; return x;"))
                            .collect::<String>();
        let expected = values.iter().map(|v| f64::from(*v)).collect::<Vec<_>>();

        prop_assert_eq!(get_results(&program).unwrap(), expected);
    }
}
