use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        parser::{
            block::{parse_block, split_statements},
            core::ParseResult,
        },
        registry::is_reserved,
    },
    util::scan::{
        KEYWORDS, find_assignment, is_identifier, matching_close, strip_keyword, strip_terminator,
    },
};

/// Parses a single statement unit.
///
/// A statement may be one of:
/// - a conditional, `if (condition) body`,
/// - a loop, `while (condition) body`,
/// - an assignment, `name = expression;`,
/// - a return, `return expression;`.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. Keywords are only recognized as the first word of the statement.
///
/// # Errors
/// Returns [`ParseError::StatementSyntax`] if no construct matches or the
/// matching construct is malformed.
///
/// # Example
/// ```
/// use shunt::{ast::Statement, interpreter::parser::statement::parse_statement};
///
/// let statement = parse_statement("if (x > 0) y = 1;").unwrap();
/// assert_eq!(statement,
///            Statement::Conditional { condition: "(x > 0)".to_string(),
///                                     body:      Box::new(Statement::Assignment { name:  "y".to_string(),
///                                                                                 value: "1".to_string(), }), });
///
/// assert!(parse_statement("x + 1;").is_err());
/// ```
pub fn parse_statement(unit: &str) -> ParseResult<Statement> {
    if let Some((condition, body)) = parse_guarded(unit, "if")? {
        return Ok(Statement::Conditional { condition,
                                           body: Box::new(body) });
    }
    if let Some((condition, body)) = parse_guarded(unit, "while")? {
        return Ok(Statement::Loop { condition,
                                    body: Box::new(body) });
    }
    if let Some(statement) = parse_assignment(unit)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_return(unit)? {
        return Ok(statement);
    }

    Err(ParseError::statement("Unrecognized statement", unit))
}

/// Parses the shared shape of conditionals and loops:
/// `<keyword> (condition) body`.
///
/// The condition keeps its parentheses. The body is either a brace block or a
/// single statement.
///
/// # Returns
/// - `Ok(Some((condition, body)))` if the unit starts with `keyword`,
/// - `Ok(None)` otherwise.
fn parse_guarded(unit: &str, keyword: &str) -> ParseResult<Option<(String, Statement)>> {
    let Some(rest) = strip_keyword(unit.trim(), keyword) else {
        return Ok(None);
    };

    let rest = rest.trim_start();
    if !rest.starts_with('(') {
        return Err(ParseError::statement(format!("Expected '(' after '{keyword}'"), unit));
    }
    let close = matching_close(rest, 0, b'(', b')').ok_or_else(|| {
                    ParseError::statement(format!("Expected closing parenthesis ')' after the '{keyword}' condition"),
                                          unit)
                })?;

    let condition = rest[..=close].to_string();
    let body = parse_body(rest[close + 1..].trim(), keyword, unit)?;

    Ok(Some((condition, body)))
}

/// Parses the body following a condition.
fn parse_body(text: &str, keyword: &str, unit: &str) -> ParseResult<Statement> {
    if text.starts_with('{') {
        let close = matching_close(text, 0, b'{', b'}').ok_or_else(|| {
                        ParseError::statement("Expected closing brace '}' but none found", unit)
                    })?;
        if !text[close + 1..].trim().trim_matches(';').trim().is_empty() {
            return Err(ParseError::statement(format!("Unexpected text after the '{keyword}' block"),
                                             unit));
        }
        return parse_block(&text[1..close]);
    }

    match split_statements(text)?.as_slice() {
        [single] => parse_statement(single),
        [] => Err(ParseError::statement(format!("Missing body after the '{keyword}' condition"),
                                        unit)),
        _ => Err(ParseError::statement(format!("The '{keyword}' body without braces must be a single statement"),
                                       unit)),
    }
}

/// Parses an assignment of the form `name = expression;`.
///
/// The name must be an identifier that is neither a keyword nor a registered
/// operator or function. The value is everything after the `=` up to the
/// terminating `;`.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` if the unit holds a lone `=`,
/// - `Ok(None)` otherwise.
fn parse_assignment(unit: &str) -> ParseResult<Option<Statement>> {
    let text = unit.trim();
    let Some(equals) = find_assignment(text) else {
        return Ok(None);
    };

    let name = text[..equals].trim();
    if !is_identifier(name) {
        return Err(ParseError::statement(format!("Invalid variable name '{name}'"), unit));
    }
    if KEYWORDS.contains(&name) || is_reserved(name) {
        return Err(ParseError::statement(format!("Identifier {name} is reserved"), unit));
    }

    let value = strip_terminator(&text[equals + 1..]);
    if value.is_empty() {
        return Err(ParseError::statement(format!("Missing value assigned to '{name}'"), unit));
    }

    Ok(Some(Statement::Assignment { name:  name.to_string(),
                                    value: value.to_string(), }))
}

/// Parses a return of the form `return expression;`.
///
/// # Returns
/// - `Ok(Some(Statement::Return))` if the unit starts with `return`,
/// - `Ok(None)` otherwise.
fn parse_return(unit: &str) -> ParseResult<Option<Statement>> {
    let Some(rest) = strip_keyword(unit.trim(), "return") else {
        return Ok(None);
    };

    let value = strip_terminator(rest);
    if value.is_empty() {
        return Err(ParseError::statement("Missing value after 'return'", unit));
    }

    Ok(Some(Statement::Return { value: value.to_string() }))
}
