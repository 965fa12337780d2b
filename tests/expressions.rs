use shunt::{
    ast::Expr,
    error::{Error, ParseError, RuntimeError},
    evaluate, get_results,
    interpreter::{
        evaluator::core::{Context, Variables},
        lexer::{Token, TokenKind, tokenize},
        parser::core::parse_expression,
    },
};

fn assert_value(expression: &str, expected: f64) {
    match evaluate(expression) {
        Ok(value) => assert_eq!(value, expected, "value of {expression:?}"),
        Err(e) => panic!("Expression {expression:?} failed: {e}"),
    }
}

fn kinds(expression: &str) -> Vec<TokenKind> {
    tokenize(expression, &Variables::new()).unwrap()
                                           .into_iter()
                                           .map(|token| token.kind)
                                           .collect()
}

#[test]
fn precedence_and_associativity() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 + 3 ^ 2", 11.0);
    assert_value("2 * 3 ^ 2", 18.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("8 / 4 / 2", 1.0);
    assert_value("1 + 2 == 3", 1.0);
    assert_value("1 < 2 == 1", 1.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("((2))", 2.0);
    assert_value("2 * (3 + (4 - 1))", 12.0);
}

#[test]
fn postfix_unary_binds_to_the_preceding_operand() {
    assert_value("3++", 4.0);
    assert_value("3++++", 5.0);
    assert_value("2 * 3++", 8.0);
    assert_value("(1 + 2)++", 4.0);
    assert_value("sin(0)++", 1.0);
}

#[test]
fn functions_apply_to_their_parenthesized_argument() {
    assert_value("sin(0)", 0.0);
    assert_value("sin(0) + 2", 2.0);
    assert_value("2 * sin(1 - 1)", 0.0);
    assert_value("sin(sin(0))", 0.0);
    assert_eq!(evaluate("ctg(1)").unwrap(), 1.0 / 1.0_f64.tan());
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_value("5 > 3", 1.0);
    assert_value("5 > 9", 0.0);
    assert_value("2 < 3", 1.0);
    assert_value("3 < 2", 0.0);
    assert_value("4 == 4", 1.0);
    assert_value("4 == 4.5", 0.0);
}

#[test]
fn decimal_literals() {
    assert_value("0.5 + 0.25", 0.75);
    assert_value("2. * 2", 4.0);
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_eq!(evaluate("1 / 0").unwrap(), f64::INFINITY);
    assert!(evaluate("0 / 0").unwrap().is_nan());
    assert_eq!(evaluate("ctg(0)").unwrap(), f64::INFINITY);
}

#[test]
fn multi_character_operators_win_over_prefixes() {
    assert_eq!(kinds("3++"), vec![TokenKind::Number, TokenKind::Unary]);
    assert_eq!(kinds("3+++2"),
               vec![TokenKind::Number, TokenKind::Unary, TokenKind::Operator, TokenKind::Number]);
    assert_eq!(kinds("1==1"), vec![TokenKind::Number, TokenKind::Operator, TokenKind::Number]);
    assert_eq!(kinds("sin(2)"),
               vec![TokenKind::Function,
                    TokenKind::Parenthesis,
                    TokenKind::Number,
                    TokenKind::Parenthesis]);
}

#[test]
fn number_literals_are_kept_verbatim() {
    let tokens = tokenize("3.50 + 007", &Variables::new()).unwrap();
    assert_eq!(tokens[0], Token::new("3.50", TokenKind::Number));
    assert_eq!(tokens[2], Token::new("007", TokenKind::Number));
}

#[test]
fn variables_are_substituted_by_their_current_value() {
    let mut variables = Variables::new();
    variables.insert("rate".to_string(), 0.5);
    variables.insert("r".to_string(), 4.0);

    let tokens = tokenize("rate * r", &variables).unwrap();
    assert_eq!(tokens,
               vec![Token::new("0.5", TokenKind::Number),
                    Token::new("*", TokenKind::Operator),
                    Token::new("4", TokenKind::Number)]);

    variables.insert("r".to_string(), 8.0);
    let mut context = Context::new();
    context.variables = variables;
    assert_eq!(context.evaluate_source("rate * r").unwrap(), 4.0);
}

#[test]
fn tokenization_failures() {
    for expression in ["2 $ 3", "1.2.3", "x + 1", "2 = 3", "cos(0)"] {
        let error = tokenize(expression, &Variables::new()).unwrap_err();
        assert!(matches!(error, ParseError::Tokenization { .. }),
                "{expression:?} gave {error:?}");
    }

    let error = tokenize("2 + cos(0)", &Variables::new()).unwrap_err();
    assert_eq!(error,
               ParseError::Tokenization { fragment:   "cos".to_string(),
                                          expression: "2 + cos(0)".to_string(), });
}

#[test]
fn malformed_expressions_are_syntax_errors() {
    for expression in ["2 + ", "(2 + 3", "2 + 3)", "", "()", "2 3", "* 2", "++3", "sin 0", "sin", "2 (3)",
                       "2 sin()", "5 ctg()", "2 ()", "2 (+ 3)", "2 (++)", "(1 (2 3))"]
    {
        let error = evaluate(expression).unwrap_err();
        assert!(error.is_expression_syntax(), "{expression:?} gave {error:?}");
    }
}

#[test]
fn parenthesized_groups_keep_to_their_own_operands() {
    assert!(get_results("x = 2; return x sin();").unwrap_err().is_expression_syntax());

    let error = evaluate("2 ()").unwrap_err();
    assert_eq!(error.to_string(),
               "Error in expression '2 ()': Parentheses '()' enclose no expression.");

    assert_value("2 * (3)", 6.0);
    assert_value("(2) * (3 + (4))", 14.0);
}

#[test]
fn deep_trees_do_not_exhaust_the_stack() {
    let sum = vec!["1"; 20_000].join(" + ");
    assert_value(&sum, 20_000.0);

    let tree = parse_expression(&sum, &Variables::new()).unwrap();
    assert_eq!(tree.node_count(), 39_999);
    drop(tree);

    let chain = format!("1{}", "++".repeat(100_000));
    assert_value(&chain, 100_001.0);

    assert_eq!(get_results(&format!("return {sum};")).unwrap(), vec![20_000.0]);
}

#[test]
fn reparsing_yields_equal_trees_and_values() {
    let variables = Variables::new();
    for expression in ["2 + 3 * 4 ^ 2", "sin(1) * ctg(2)++", "(1 < 2) == (3 > 2)"] {
        let first = parse_expression(expression, &variables).unwrap();
        let second = parse_expression(expression, &variables).unwrap();
        assert_eq!(first, second);
        assert_eq!(Context::eval_expr(&first).unwrap().to_bits(),
                   Context::eval_expr(&second).unwrap().to_bits());
    }
}

#[test]
fn tree_shape_follows_precedence() {
    let tree = parse_expression("1 + 2 * 3 ^ 4 - 5", &Variables::new()).unwrap();
    assert_eq!(tree.to_string(), "((1 + (2 * (3 ^ 4))) - 5)");
    assert_eq!(tree.node_count(), 9);

    let tree = parse_expression("sin(1 + 2)++", &Variables::new()).unwrap();
    assert_eq!(tree.to_string(), "(sin((1 + 2))++)");
}

#[test]
fn unknown_symbols_fail_at_evaluation() {
    let leaf = Box::new(Expr::Number { text: "1".to_string() });

    let tree = Expr::Binary { symbol: "%".to_string(),
                              left:   leaf.clone(),
                              right:  leaf.clone(), };
    assert_eq!(Context::eval_expr(&tree),
               Err(RuntimeError::UnknownSymbol { symbol: "%".to_string() }));

    let tree = Expr::Unary { symbol:  "+".to_string(),
                             operand: leaf, };
    assert!(matches!(Context::eval_expr(&tree), Err(RuntimeError::UnknownSymbol { .. })));

    let tree = Expr::Number { text: "abc".to_string() };
    assert!(matches!(Context::eval_expr(&tree), Err(RuntimeError::InvalidLiteral { .. })));
}

#[test]
fn errors_have_readable_messages() {
    let error = evaluate("(2 + 3").unwrap_err();
    assert_eq!(error.to_string(),
               "Error in expression '(2 + 3': Expected closing parenthesis ')' but none found.");

    let error: Error = RuntimeError::UnknownSymbol { symbol: "%".to_string() }.into();
    assert!(error.is_unknown_symbol());
}
