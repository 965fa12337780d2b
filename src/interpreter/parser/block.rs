use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::parser::{core::ParseResult, statement::parse_statement},
    util::scan::matching_close,
};

/// Cuts program text into statement units.
///
/// A unit runs from the end of the previous one up to and including either a
/// top-level `;` or the `}` closing the first brace block met on the way.
/// Braces, not semicolons, decide where a block ends, so nested blocks stay
/// inside their enclosing unit. Units made only of `;` are dropped.
///
/// # Errors
/// Returns [`ParseError::StatementSyntax`] for an unclosed `{`, a stray `}`,
/// or trailing text without a terminating `;`.
///
/// # Example
/// ```
/// use shunt::interpreter::parser::block::split_statements;
///
/// let units = split_statements("x = 0; while (x < 3) { if (x > 1) { y = 1; } x = x + 1; } return x;")
///     .unwrap();
///
/// assert_eq!(units,
///            vec!["x = 0;",
///                 " while (x < 3) { if (x > 1) { y = 1; } x = x + 1; }",
///                 " return x;"]);
/// ```
pub fn split_statements(code: &str) -> ParseResult<Vec<&str>> {
    let bytes = code.as_bytes();
    let mut units = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                let close = matching_close(code, i, b'{', b'}').ok_or_else(|| {
                    ParseError::statement("Expected closing brace '}' but none found", &code[start..])
                })?;
                push_unit(&mut units, &code[start..=close]);
                start = close + 1;
                i = close + 1;
                continue;
            },
            b';' => {
                push_unit(&mut units, &code[start..=i]);
                start = i + 1;
            },
            b'}' => {
                return Err(ParseError::statement("Unexpected closing brace '}'", &code[start..=i]));
            },
            _ => {},
        }
        i += 1;
    }

    if !code[start..].trim().is_empty() {
        return Err(ParseError::statement("Expected ';' at the end of the statement",
                                         &code[start..]));
    }

    Ok(units)
}

fn push_unit<'a>(units: &mut Vec<&'a str>, unit: &'a str) {
    if !unit.trim().trim_matches(';').trim().is_empty() {
        units.push(unit);
    }
}

/// Parses a block of statements into a [`Statement::Sequence`].
///
/// The text is split with [`split_statements`] and every unit is parsed with
/// [`parse_statement`]. An empty block yields an empty sequence.
///
/// # Example
/// ```
/// use shunt::{ast::Statement, interpreter::parser::block::parse_block};
///
/// let block = parse_block("x = 1; return x;").unwrap();
/// assert_eq!(block,
///            Statement::Sequence(vec![Statement::Assignment { name:  "x".to_string(),
///                                                             value: "1".to_string(), },
///                                     Statement::Return { value: "x".to_string() }]));
/// ```
pub fn parse_block(code: &str) -> ParseResult<Statement> {
    let statements = split_statements(code)?.into_iter()
                                            .map(parse_statement)
                                            .collect::<ParseResult<Vec<_>>>()?;

    Ok(Statement::Sequence(statements))
}
