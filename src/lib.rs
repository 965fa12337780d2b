//! # shunt
//!
//! shunt is an interpreter for a small brace-and-semicolon language written in
//! Rust. Programs assign floating-point variables, branch with `if`, loop with
//! `while` and emit values with `return`. Expressions are parsed with a
//! shunting-yard tree builder and evaluated by walking the tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Context, parser::block::parse_block},
};

/// Defines the structure of parsed code.
///
/// This module declares the expression tree built from a single expression and
/// the statement tree built from a whole program. Statement nodes keep their
/// embedded expressions as source text, which is rebuilt on every evaluation.
///
/// # Responsibilities
/// - Defines expression nodes (numbers, unary and binary operations).
/// - Defines statement nodes (conditionals, loops, assignments, returns and
///   sequences).
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// building trees, splitting statements, evaluating, or reading the program.
///
/// # Responsibilities
/// - Defines a parse error enum and a runtime error enum.
/// - Wraps both, plus source access failures, in a single crate error.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the operator registry, the lexer, the parsers and
/// the evaluator.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for parsing and evaluating code.
pub mod interpreter;
/// Reading programs and writing results.
///
/// The thin boundary between the interpreter and the outside world: a file
/// based source provider and a line oriented result sink.
pub mod io;
/// General text scanning helpers.
pub mod util;

/// Parses a whole program into its root statement sequence.
///
/// # Example
/// ```
/// use shunt::{ast::Statement, parse_program};
///
/// let program = parse_program("x = 0; if (x > 0) { x = 99; }").unwrap();
/// let Statement::Sequence(statements) = program else {
///     panic!("a program is always a sequence");
/// };
/// assert_eq!(statements.len(), 2);
/// ```
pub fn parse_program(source: &str) -> Result<Statement, ParseError> {
    parse_block(source)
}

/// Runs a program and returns the values of its `return` statements.
///
/// This function parses and executes all statements in the provided source in
/// a fresh evaluation context. Every executed `return` contributes one value,
/// in execution order; a `return` does not stop the program.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use shunt::get_results;
///
/// let results = get_results("x = 2; return x ^ 3; return x++;").unwrap();
/// assert_eq!(results, vec![8.0, 3.0]);
///
/// // `y` is never assigned, so it cannot be tokenized.
/// assert!(get_results("return y;").is_err());
/// ```
pub fn get_results(source: &str) -> Result<Vec<f64>, Error> {
    let mut context = Context::new();
    context.run(source)?;
    Ok(context.into_results())
}

/// Evaluates a single expression without any variables.
///
/// # Examples
/// ```
/// use shunt::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("5 > 3").unwrap(), 1.0);
/// assert!(evaluate("(2 + 3").unwrap_err().is_expression_syntax());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    Context::new().evaluate_source(expression)
}
