use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{evaluator::core::Variables, lexer::tokenize, parser::shunting_yard::build},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing: the text is tokenized
/// against the given variables, whose current values are substituted in place,
/// and the tokens are assembled into a tree.
///
/// # Parameters
/// - `text`: Expression source, optionally wrapped in parentheses.
/// - `variables`: The variables visible to the expression.
///
/// # Returns
/// The root of the expression tree.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::core::Variables, parser::core::parse_expression};
///
/// let tree = parse_expression("(2 + 3) * 4", &Variables::new()).unwrap();
/// assert_eq!(tree.to_string(), "((2 + 3) * 4)");
/// ```
pub fn parse_expression(text: &str, variables: &Variables) -> ParseResult<Expr> {
    let tokens = tokenize(text, variables)?;
    build(&tokens, text)
}
