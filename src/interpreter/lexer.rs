use logos::Logos;
use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{evaluator::core::Variables, parser::core::ParseResult, registry},
};

/// The classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A numeric literal or a substituted variable value.
    Number,
    /// A binary operator such as `+` or `==`.
    Operator,
    /// A prefix function such as `sin`, applied to a parenthesized argument.
    Function,
    /// A postfix unary operator such as `++`.
    Unary,
    /// `(` or `)`.
    Parenthesis,
}

/// A classified piece of expression text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text. For substituted variables this is the rendered value.
    pub text: String,
    /// What the text stands for.
    pub kind: TokenKind,
}

impl Token {
    /// Creates a token from its text and kind.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self { text: text.into(),
               kind }
    }
}

/// Coarse lexemes recognized before name resolution.
///
/// Words and symbol runs are split further by [`tokenize`], since their
/// meaning depends on the variables known at the time.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    /// Digits with at most one `.`, such as `42`, `3.14` or `2.`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Identifier-like runs: variable names and function names.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
    /// Runs of operator characters, such as `+`, `==` or `++`.
    #[regex(r"[+\-*/\^=<>]+")]
    Symbols,
}

/// Converts expression text into a token sequence.
///
/// Numbers and parentheses are taken as written. Words and operator runs are
/// resolved left to right: at each position the longest known variable name
/// and the longest registered symbol are compared and the longer one wins, a
/// variable being replaced by its current value as a number token.
///
/// # Errors
/// Returns [`ParseError::Tokenization`] when some text matches neither a
/// number, a known variable nor a registered symbol.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     evaluator::core::Variables,
///     lexer::{Token, TokenKind, tokenize},
/// };
///
/// let mut variables = Variables::new();
/// variables.insert("x".to_string(), 5.0);
///
/// let tokens = tokenize("x++ == 6", &variables).unwrap();
/// assert_eq!(tokens,
///            vec![Token::new("5", TokenKind::Number),
///                 Token::new("++", TokenKind::Unary),
///                 Token::new("==", TokenKind::Operator),
///                 Token::new("6", TokenKind::Number)]);
///
/// assert!(tokenize("y + 1", &variables).is_err());
/// ```
pub fn tokenize(text: &str, variables: &Variables) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(text);

    while let Some(lexeme) = lexer.next() {
        let slice = lexer.slice();
        match lexeme {
            Ok(Lexeme::Number) => tokens.push(Token::new(slice, TokenKind::Number)),
            Ok(Lexeme::LParen | Lexeme::RParen) => {
                tokens.push(Token::new(slice, TokenKind::Parenthesis));
            },
            Ok(Lexeme::Word | Lexeme::Symbols) => resolve_run(slice, text, variables, &mut tokens)?,
            Err(()) => {
                return Err(ParseError::Tokenization { fragment:   slice.to_string(),
                                                      expression: text.trim().to_string(), });
            },
        }
    }

    trace!(expression = text.trim(), count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Splits a word or symbol run into numbers, substituted variables and
/// registered symbols.
fn resolve_run(run: &str,
               expression: &str,
               variables: &Variables,
               tokens: &mut Vec<Token>)
               -> ParseResult<()> {
    let mut rest = run;

    while !rest.is_empty() {
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits > 0 {
            tokens.push(Token::new(&rest[..digits], TokenKind::Number));
            rest = &rest[digits..];
            continue;
        }

        let variable = longest_variable(rest, variables);
        let operator = registry::longest_match(rest);

        match (variable, operator) {
            (Some((name, value)), op) if op.is_none_or(|def| def.symbol.len() <= name.len()) => {
                tokens.push(Token::new(value.to_string(), TokenKind::Number));
                rest = &rest[name.len()..];
            },
            (_, Some(def)) => {
                tokens.push(Token::new(def.symbol, def.kind));
                rest = &rest[def.symbol.len()..];
            },
            _ => {
                return Err(ParseError::Tokenization { fragment:   rest.to_string(),
                                                      expression: expression.trim().to_string(), });
            },
        }
    }

    Ok(())
}

/// Finds the longest variable name that `text` starts with.
fn longest_variable<'v>(text: &str, variables: &'v Variables) -> Option<(&'v str, f64)> {
    variables.iter()
             .filter(|(name, _)| text.starts_with(name.as_str()))
             .max_by_key(|(name, _)| name.len())
             .map(|(name, value)| (name.as_str(), *value))
}
