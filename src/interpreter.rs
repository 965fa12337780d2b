/// The evaluator module executes statements and computes expression values.
///
/// The evaluator walks statement trees, rebuilding and evaluating every
/// embedded expression against the current variable store, and collects the
/// values emitted by `return` statements.
///
/// # Responsibilities
/// - Evaluates expression trees using the operator registry.
/// - Runs conditionals, loops, assignments and returns.
/// - Owns the variable store and the returned values.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads raw expression text and produces a sequence of tokens:
/// numbers, operators, functions, postfix unary operators and parentheses.
/// Variable names are replaced by their current values as it goes.
///
/// # Responsibilities
/// - Converts expression text into typed tokens.
/// - Resolves names by longest match against variables and the registry.
/// - Reports text that matches nothing.
pub mod lexer;
/// The parser module builds expression trees and statement trees.
///
/// # Responsibilities
/// - Builds precedence-correct expression trees from tokens.
/// - Splits program text into statements and classifies them.
/// - Reports malformed expressions and statements.
pub mod parser;
/// The operator registry.
///
/// A static table describing every operator and function: its kind, its
/// precedence and the numeric function implementing it.
pub mod registry;
